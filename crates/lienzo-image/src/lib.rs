#![deny(missing_docs)]
//! Image types and traits for the lienzo pixel transformation engine.

/// image representation for pixel processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations on the image pixel data.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
