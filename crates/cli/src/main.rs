pub(crate) mod args;
pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use abiguess_config::Configuration;
use abiguess_core::{guess_abi_encoded_data_with_limits, guess_fragment_with_limits, Limits};
use args::Arguments;
use clap::Parser;
use error::Error;
use eyre::Result;
use output::{render_fragment, render_types};
use tracing::debug;

fn main() -> Result<()> {
    let args = Arguments::parse();
    args.init_tracing();

    let configuration = Configuration::load()?;
    let limits = Limits { safe_integer_bound: configuration.safe_integer_bound };

    let calldata = abiguess_common::strings::decode_hex(&args.calldata)?;
    debug!("parsed {} bytes of calldata", calldata.len());

    let output = if args.no_selector {
        let types =
            guess_abi_encoded_data_with_limits(&calldata, limits, configuration.max_calldata_words)
                .ok_or(Error::NoSignatureFound)?;
        render_types(&types, args.json)?
    } else {
        let fragment =
            guess_fragment_with_limits(&calldata, limits, configuration.max_calldata_words)
                .ok_or(Error::NoSignatureFound)?;
        render_fragment(&fragment, args.json)?
    };

    println!("{output}");
    Ok(())
}
