//! Tracing setup, sized to what a single-binary CLI needs rather than heimdall's multi-sink
//! tracer: one `fmt` layer over stdout, filtered by verbosity or `RUST_LOG`.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::args::Arguments;

impl Arguments {
    /// Initializes the global tracing subscriber according to `-v`/`-q`, falling back to
    /// `RUST_LOG` when set.
    pub fn init_tracing(&self) {
        let default_level = if self.quiet {
            LevelFilter::OFF
        } else {
            match self.verbosity {
                0 => LevelFilter::ERROR,
                1 => LevelFilter::WARN,
                2 => LevelFilter::INFO,
                3 => LevelFilter::DEBUG,
                _ => LevelFilter::TRACE,
            }
        };

        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }
}
