use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid layout parameter: {0}")]
    InvalidParameter(String),

    #[error("Layout produced a non-finite coordinate for node {0}")]
    NonFinite(usize),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
