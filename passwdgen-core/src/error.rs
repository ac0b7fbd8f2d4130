use std::fmt;

/// A configuration the generator refuses to run with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}")]
    InvalidRepetitions(u32),

    #[error("Invalid minimum length: {0}")]
    InvalidMinLength(u32),

    #[error("Invalid maximum length: {0}")]
    InvalidMaxLength(u32),

    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvertedLengthRange { min: u32, max: u32 },
}

impl ConfigError {
    /// Process exit status for this error, distinct per parameter kind.
    pub const fn exit_code(&self) -> u8 {
        match self {
            ConfigError::InvalidRepetitions(_) => 4,
            ConfigError::InvalidMinLength(_) => 5,
            ConfigError::InvalidMaxLength(_) => 6,
            ConfigError::InvertedLengthRange { .. } => 7,
        }
    }
}

/// A recoverable configuration problem. Generation continues with a
/// substitute, and the caller decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No class was allowed and no custom alphabet was given; the default
    /// classes were substituted.
    AllClassesDisallowed,
    /// An empty custom alphabet was given and ignored.
    BlankCustomAlphabet,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::AllClassesDisallowed => {
                write!(f, "all characters disallowed, using default sets")
            }
            ConfigWarning::BlankCustomAlphabet => {
                write!(f, "blank custom characters specified, using default")
            }
        }
    }
}
