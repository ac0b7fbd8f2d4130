use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use passwdgen::{Args, Error, run, seed_from_clock};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let seed = args.seed.unwrap_or_else(seed_from_clock);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = run(&args, seed, &mut out).and_then(|()| out.flush().map_err(Error::from));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
