use thiserror::Error;

/// Raised while reading `TIREFLOW_*` settings; every setting has a default, so only a
/// present but unparseable value is an error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
