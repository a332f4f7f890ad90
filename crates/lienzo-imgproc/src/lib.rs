#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color and channel transformations module.
pub mod color;

/// image cropping module.
pub mod crop;

/// tone adjustment and blending module.
pub mod enhance;

/// compute image histogram module.
pub mod histogram;

/// module containing parallelization utilities.
pub mod parallel;

/// block down/up-sampling module.
pub mod resize;

/// center rotation module.
pub mod rotate;

/// image translation module.
pub mod shift;

/// operations to threshold images.
pub mod threshold;
