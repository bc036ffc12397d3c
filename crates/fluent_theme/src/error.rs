use fluent_core::{ColorParseError, FontWeightParseError};
use thiserror::Error;

use crate::value::TokenKind;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown token `{token}` for control `{control}`")]
    UnknownToken { control: String, token: String },

    #[error("unknown alias token `{0}`")]
    UnknownAlias(String),

    #[error("unknown control `{0}`")]
    UnknownControl(String),

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("token `{token}` expects a {expected} value, found {found}")]
    KindMismatch {
        token: String,
        expected: TokenKind,
        found: TokenKind,
    },

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),

    #[error(transparent)]
    InvalidFontWeight(#[from] FontWeightParseError),

    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
