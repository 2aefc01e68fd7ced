//! Console demo: generate a synthetic ceiling-grid deployment, solve it, and
//! print the report. An optional first argument seeds the run for
//! reproducible output.
use rust_multilat::demo;
use std::process::ExitCode;

fn main() -> ExitCode {
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());
    match demo::run(seed) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("mlat_demo: {err}");
            ExitCode::FAILURE
        }
    }
}
