use thiserror::Error;

use crate::scene::ElementKind;

pub type AdornResult<T> = Result<T, AdornError>;

#[derive(Debug, Error)]
pub enum AdornError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown paint kind `{0}`")]
    UnknownPaintKind(String),

    #[error("element of kind {kind:?} is not allowed in this group")]
    ElementRejected { kind: ElementKind },

    #[error("host region of kind {kind:?} cannot carry a drawing surface")]
    HostRejected { kind: crate::canvas::HostKind },

    #[error("drawing backend failure: {0}")]
    Backend(String),

    #[error("invalid attributes: {0}")]
    Config(String),
}
