//! Command-line argument parsing.

use clap::{ArgAction, Parser};

/// Infers ABI parameter types from raw, unannotated calldata.
#[derive(Debug, Clone, Parser)]
#[clap(
    name = "abiguess",
    about = "Infers ABI parameter types from raw, unannotated calldata",
    override_usage = "abiguess <CALLDATA> [OPTIONS]"
)]
pub struct Arguments {
    /// The calldata to analyze, as a hex string (with or without a `0x` prefix).
    #[clap(required = true)]
    pub calldata: String,

    /// Treat `calldata` as a bare ABI-encoded tuple with no leading 4-byte selector.
    #[clap(long)]
    pub no_selector: bool,

    /// Emit the result as JSON instead of the default text rendering.
    #[clap(long)]
    pub json: bool,

    /// Set the minimum log level.
    ///
    /// -v     Warnings & Errors
    /// -vv    Info
    /// -vvv   Debug
    /// -vvvv  Traces (warning: very verbose!)
    #[clap(short, long, action = ArgAction::Count, default_value_t = 1, verbatim_doc_comment)]
    pub verbosity: u8,

    /// Silence all log output.
    #[clap(long, alias = "silent", short = 'q')]
    pub quiet: bool,
}
