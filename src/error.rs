use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuneError {
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Astronomical data unavailable: {0}")]
    AstronomicalDataUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl RuneError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RuneError>;
