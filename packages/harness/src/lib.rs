//! Ties together config, the reference transport, the core, logging, and the
//! checker into the one call the CLI binary makes.

use std::path::Path;

use ansv::AnsvError;
use ansv_harness_config::{AppConfig, CliConfig};
use ansv_local_transport::run_group;
use ansv_monitor::{Phase, PhaseTimer};
use anyhow::{bail, Context};

/// Outcome of one end-to-end `ansv_parallel` run through the reference
/// transport: the global `L`/`R` arrays plus, if `--verify` was requested,
/// whether the independent checker accepted them.
pub struct RunOutcome {
    pub l: Vec<usize>,
    pub r: Vec<usize>,
    pub verified: Option<Result<(), String>>,
}

/// Read `input`, block-distribute it over `workers` simulated ranks via
/// `ansv-local-transport`, and drive `ansv_parallel` to completion.
pub fn run(cli: &CliConfig) -> anyhow::Result<RunOutcome> {
    // CLI flags win; anything left unset falls back to the env/file-derived
    // AppConfig.
    let defaults = AppConfig::from_env();
    let log_level = cli.log_level.clone().unwrap_or_else(|| defaults.log_level.clone());
    let workers = cli.workers.unwrap_or(defaults.workers);
    let verify = cli.verify || defaults.verify;

    ansv_logger::init(&log_level);

    let data = read_input(&cli.input)?;
    if data.is_empty() {
        bail!(AnsvError::EmptyInput);
    }

    let mut timer = PhaseTimer::start();
    log::info!("ansv: N={} P={workers}", data.len());

    let results = run_group(workers, |group| {
        let rank = group.rank();
        let root_data = if rank == 0 { Some(data.clone()) } else { None };
        let (local, _block) = group.block_distribute(root_data)?;
        ansv::ansv_parallel(&local, group)
    });

    // ansv_parallel exposes no per-phase hook, so the timer marks the whole
    // call as a single span rather than faking per-transition granularity.
    timer.mark(Phase::ResolveCross);
    log::info!("ansv: completed in {:?}", timer.total());

    let mut l = Vec::with_capacity(data.len());
    let mut r = Vec::with_capacity(data.len());
    for result in results {
        let (rank_l, rank_r) = result?;
        l.extend(rank_l);
        r.extend(rank_r);
    }

    let verified = if verify {
        log::info!("ansv: verifying result against independent RMQ checker");
        Some(ansv_checker::verify_all(&data, &l, &r))
    } else {
        None
    };

    Ok(RunOutcome { l, r, verified })
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading input file {}", path.display()))
}
