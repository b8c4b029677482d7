//! ```bash
//! cargo run --example stress_test --release
//! ```
//!
//! Boundary-stress run over large inputs (66,666 and 137,900 elements, values
//! in `[0, 10000)`), verifying cross-worker resolution under large `P`.

use ansv_checker::{random_sequence, verify_all};
use ansv_local_transport::run_group;
use std::time::Instant;

const SEED: u64 = 0xA5A5_1234_5678_90AB;

fn divider() {
    println!("{}", "─".repeat(60));
}

fn run_one(n: usize, max: u32, workers: usize) {
    divider();
    println!("Phase — N={n} values in [0, {max}), P={workers}");

    let t0 = Instant::now();
    let values = random_sequence(n, max, SEED);
    println!("  Generated in {:?}", t0.elapsed());

    let blocks = ansv::all_blocks(n, workers);
    let slices: Vec<Vec<u32>> = blocks.iter().map(|b| values[b.lo..b.hi].to_vec()).collect();

    let t0 = Instant::now();
    let results = run_group(workers, move |group| {
        let local = &slices[group.rank()];
        ansv::ansv_parallel(local, group)
    });
    let elapsed = t0.elapsed();

    let mut l = Vec::with_capacity(n);
    let mut r = Vec::with_capacity(n);
    for result in results {
        let (rank_l, rank_r) = result.expect("ansv_parallel failed under stress");
        l.extend(rank_l);
        r.extend(rank_r);
    }
    println!("  ansv_parallel completed in {elapsed:?}");
    println!("  Throughput: {:.0} elements/sec", n as f64 / elapsed.as_secs_f64());

    let t0 = Instant::now();
    match verify_all(&values, &l, &r) {
        Ok(()) => println!("  Verification: PASSED in {:?}", t0.elapsed()),
        Err(reason) => {
            eprintln!("  Verification: FAILED — {reason}");
            std::process::exit(1);
        }
    }
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║              ansv Boundary-Stress Verifier                ║");
    println!("╚══════════════════════════════════════════════════════════╝");

    let workers = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);

    run_one(66_666, 10_000, workers);
    run_one(137_900, 10_000, workers);

    divider();
    println!("All boundary-stress scenarios passed.");
}
