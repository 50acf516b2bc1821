// Copyright @glimmer authors 2026

use crate::math::bitmap::BitmapError;
use crate::math::vector::MathError;

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Math(MathError),
    Bitmap(BitmapError),
    /// A construction parameter was out of range; carries the parameter name.
    InvalidParameter(&'static str),
    /// The camera orientation hint is parallel to the viewing direction, so
    /// no basis can be derived from their cross product.
    ParallelOrientation,
    Io(std::io::Error),
    Encode(String),
}

impl From<MathError> for RenderError {
    fn from(err: MathError) -> Self {
        RenderError::Math(err)
    }
}

impl From<BitmapError> for RenderError {
    fn from(err: BitmapError) -> Self {
        RenderError::Bitmap(err)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Math(err) => write!(f, "math error: {}", err),
            RenderError::Bitmap(err) => write!(f, "bitmap error: {}", err),
            RenderError::InvalidParameter(name) => {
                write!(f, "invalid parameter: {}", name)
            }
            RenderError::ParallelOrientation => {
                write!(f, "orientation vector is parallel to the viewing direction")
            }
            RenderError::Io(err) => write!(f, "io error: {}", err),
            RenderError::Encode(message) => write!(f, "encode error: {}", message),
        }
    }
}

impl std::error::Error for RenderError {}
