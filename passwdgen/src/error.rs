use passwdgen_core::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to render options: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status. Configuration errors keep their per-parameter codes.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(e) => e.exit_code(),
            Error::Io(_) | Error::Json(_) => 1,
        }
    }
}
