use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value range [0, {max_value}], the upper bound must not be negative")]
    InvalidRange { max_value: i32 },

    #[error("input size must be at least 1")]
    EmptySize,

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
