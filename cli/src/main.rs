use std::process::ExitCode;

use ansv::AnsvError;
use ansv_harness_config::CliConfig;

/// Exit 0 on success, 1 on any precondition violation, 2 on transport failure.
/// The reference transport has no real OS-level failure mode of its own, so
/// code 2 is its own convention for "a collective failed".
fn main() -> ExitCode {
    let cli = CliConfig::from_args();

    match ansv_harness::run(&cli) {
        Ok(outcome) => {
            print_result(&outcome);
            match &outcome.verified {
                Some(Err(_)) => ExitCode::from(1),
                _ => ExitCode::SUCCESS,
            }
        }
        Err(err) => {
            eprintln!("ansv: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn print_result(outcome: &ansv_harness::RunOutcome) {
    println!("L: {:?}", outcome.l);
    println!("R: {:?}", outcome.r);
    match &outcome.verified {
        Some(Ok(())) => println!("verify: OK"),
        Some(Err(reason)) => println!("verify: FAILED ({reason})"),
        None => {}
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AnsvError>() {
        Some(AnsvError::Transport(_)) => 2,
        Some(_) => 1,
        None => 1, // file I/O and other precondition-layer failures
    }
}
