use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The input image cannot be screened because it contains no pixels.
    #[error("input image has zero area ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, ScreenError>;
