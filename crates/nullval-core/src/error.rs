use thiserror::Error;

/// Errors shared by every value type at the encoding boundary
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Failed to parse {input:?} into {type_name}: {reason}")]
    ParseError {
        type_name: &'static str,
        input: String,
        reason: String,
    },

    #[error("Can't decode {input} into {type_name}: {reason}")]
    DecodeError {
        type_name: &'static str,
        input: String,
        reason: String,
    },

    #[error("Unrecognized input for type {type_name}: {found}")]
    ScanError {
        type_name: &'static str,
        found: &'static str,
    },

    #[error("Conversion error: {0}")]
    ConversionError(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
