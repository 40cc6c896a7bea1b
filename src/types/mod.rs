use thiserror::Error;

mod annotation;
mod colors;

pub use annotation::*;
pub use colors::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Value out of bounds for {field}: {value}, expected {min}..={max}")]
    OutOfBounds {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Delimiter set must contain the sigil '{0}'")]
    MissingSigil(char),
}
