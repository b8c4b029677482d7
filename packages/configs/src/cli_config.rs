use std::path::PathBuf;
use structopt::StructOpt;

/// Command-line surface for `ansv-cli`: a plain input file plus the ambient
/// harness flags (`--workers`, `--log-level`, `--verify`).
#[derive(Debug, StructOpt)]
pub struct CliConfig {
    /// Plain byte-sequence input file — no framing, no header.
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,

    /// Size of the simulated worker group. Defaults to the available
    /// parallelism; `--workers 1` takes the same code path through
    /// `ansv_parallel` that `ansv_sequential` takes directly.
    #[structopt(long)]
    pub workers: Option<usize>,

    /// Falls back to `AppConfig`'s env/file-derived default when unset.
    #[structopt(long)]
    pub log_level: Option<String>,

    /// Run the independent checker against the result before printing it.
    #[structopt(long)]
    pub verify: bool,
}

impl CliConfig {
    pub fn from_args() -> Self {
        StructOpt::from_args()
    }
}
