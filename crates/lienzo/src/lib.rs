#![deny(missing_docs)]
//! lienzo top-level crate.
//!
//! Re-exports the image value types and the processing operations under
//! stable module names:
//!
//! ```
//! use lienzo::image::{Image, ImageSize};
//! use lienzo::imgproc::color;
//!
//! let src = Image::<f32, 3>::from_size_val(
//!     ImageSize { width: 4, height: 3 },
//!     0.5,
//! ).unwrap();
//!
//! let mut dst = Image::<f32, 3>::from_size_val(src.size(), 0.0).unwrap();
//! color::invert(&src, &mut dst).unwrap();
//!
//! assert_eq!(dst.as_slice()[0], 0.5);
//! ```

#[doc(inline)]
pub use lienzo_image as image;

#[doc(inline)]
pub use lienzo_imgproc as imgproc;
