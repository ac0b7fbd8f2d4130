//! Command-line front end for [`passwdgen_core`].
//!
//! Prints one password per line. The generator is seeded once per process,
//! from the current Unix time unless `--seed` is given, so repeated runs within
//! the same second print the same passwords.
//!
//! # Usage
//!
//! ```sh
//! passwdgen                             # 5 passwords, 16-31 characters, U/L/D forced
//! passwdgen -c 1 -n 20 -x 20 --ascii FORCE
//! passwdgen -n 12 -x 12 -- 0123456789abcdef
//! ```

pub mod cli;
pub mod error;

use std::io::Write;

use passwdgen_core::{GenerationConfig, PasswordGenerator};
use serde::Serialize;
use tracing::{debug, warn};

pub use cli::Args;
pub use error::Error;

/// Options as printed by `--debug`.
#[derive(Serialize)]
struct Options<'a> {
    seed: u32,
    #[serde(flatten)]
    config: &'a GenerationConfig,
}

/// Seed derived from the wall clock: Unix seconds truncated to 32 bits.
pub fn seed_from_clock() -> u32 {
    chrono::Utc::now().timestamp() as u32
}

/// Generates the configured passwords into `out`, one per line.
///
/// With `--debug` the effective options are written instead and nothing is
/// generated. Invalid numeric options fail either way.
pub fn run<W: Write>(args: &Args, seed: u32, out: &mut W) -> Result<(), Error> {
    let config = args.to_config();
    config.validate()?;

    if args.debug {
        serde_json::to_writer_pretty(&mut *out, &Options { seed, config: &config })?;
        writeln!(out)?;
        return Ok(());
    }

    let mut generator = PasswordGenerator::from_seed(config, seed)?;
    for warning in generator.warnings() {
        warn!("{warning}");
    }

    debug!(seed, "seeded generator");

    for _ in 0..generator.config().repetitions {
        writeln!(out, "{}", generator.generate())?;
    }

    Ok(())
}
