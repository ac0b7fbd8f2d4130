//! Password generation under character-class constraints.
//!
//! Passwords are drawn from four built-in classes (upper case, lower case,
//! digits, punctuation) or from a caller-supplied alphabet. Each class is
//! disallowed, allowed, or forced; every forced class appears at least once in
//! any password long enough to hold them all.
//!
//! Randomness comes from a self-contained xoshiro256++ engine seeded from a
//! single `u32`, so a given seed and configuration always produce the same
//! passwords. The engine is **not** a cryptographic random source.
//!
//! # Pipeline
//!
//! ```text
//! Xoshiro256PlusPlus  (256-bit state, seed / next)
//!     ↓ 31-bit raw words
//! uniform_int         (rejection sampling onto [0, n))
//!     ↓
//! PasswordGenerator   (length, class eligibility, glyph choice)
//!     ↓
//! permute             (in-place shuffle of the finished buffer)
//! ```
//!
//! # Example
//!
//! ```
//! use passwdgen_core::{AcceptMode, CharClass, GenerationConfig, PasswordGenerator};
//!
//! let config = GenerationConfig::default()
//!     .with_length(20)
//!     .with_mode(CharClass::Punctuation, AcceptMode::Forced);
//!
//! let mut generator = PasswordGenerator::from_seed(config, 1_700_000_000).unwrap();
//! let password = generator.generate();
//!
//! assert_eq!(password.chars().count(), 20);
//! assert!(password.chars().any(|c| c.is_ascii_punctuation()));
//! ```

pub mod bits;
pub mod classes;
pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod shuffle;

#[cfg(test)]
pub(crate) mod testing;

pub use classes::{AcceptMode, CharClass, ClassModes, ClassSet, ParseAcceptModeError};
pub use config::GenerationConfig;
#[cfg(feature = "rand")]
pub use engine::StdRngEngine;
pub use engine::{Engine, Xoshiro256PlusPlus};
pub use error::{ConfigError, ConfigWarning};
pub use generator::{PasswordBuffer, PasswordGenerator};
pub use sampler::{RMAX, uniform_int};
