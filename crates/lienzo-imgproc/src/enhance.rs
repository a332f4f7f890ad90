use lienzo_image::{Image, ImageError};
use num_traits::Float;
use rayon::prelude::*;

use crate::parallel;

/// The contrast curve to apply.
///
/// The logarithmic curve lifts dark regions, the exponential curve
/// compresses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastMode {
    /// `out = strength * log10(1 + v)`
    Logarithmic,
    /// `out = strength * exp(v - 1)`
    Exponential,
}

/// Adjust the brightness of an image.
///
/// Adds `delta` to every component of every pixel:
///
/// dst(x,y,c) = src(x,y,c) + delta
///
/// The result is not clamped, so repeated adjustments compose and a single
/// clamp before display suffices.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `delta` - The offset to add to each component.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::enhance::adjust_brightness;
///
/// let image = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     0.5,
/// ).unwrap();
///
/// let mut brightened = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// adjust_brightness(&image, &mut brightened, 0.2).unwrap();
/// assert!((brightened.as_slice()[0] - 0.7).abs() < 1e-6);
/// ```
pub fn adjust_brightness<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    delta: T,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = src_pixel + delta;
    });

    Ok(())
}

/// Adjust the brightness of a single channel of an image.
///
/// Adds `delta` to the components of `channel` and copies the other channels
/// through unchanged. The result is not clamped.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `channel` - The channel to adjust.
/// * `delta` - The offset to add to the channel's components.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds or if the sizes of
/// `src` and `dst` do not match.
pub fn adjust_channel<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    channel: usize,
    delta: T,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if channel >= C {
        return Err(ImageError::ChannelIndexOutOfBounds(channel, C));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(src_pixel);
        dst_pixel[channel] = dst_pixel[channel] + delta;
    });

    Ok(())
}

/// Apply a contrast curve to an image.
///
/// For [`ContrastMode::Logarithmic`] each component becomes
/// `strength * log10(1 + v)`; for [`ContrastMode::Exponential`] it becomes
/// `strength * exp(v - 1)`. The result is not clamped.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `mode` - The contrast curve to apply.
/// * `strength` - Gain applied after the curve; must be a finite positive
///   value.
///
/// # Errors
///
/// Returns an error if `strength` is not a finite positive value, if the
/// sizes of `src` and `dst` do not match, or if a component of a logarithmic
/// input lies at or below -1, the domain boundary of `log10(1 + v)`. The
/// source is scanned up front, so `dst` is untouched on failure. Normalized
/// input cannot trip the domain check, but the editor feeds this whatever the
/// previous operation produced.
pub fn adjust_contrast<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    mode: ContrastMode,
    strength: T,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if !strength.is_finite() || strength <= T::zero() {
        return Err(ImageError::InvalidContrastStrength(
            strength.to_f64().unwrap_or(f64::NAN),
        ));
    }

    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    if mode == ContrastMode::Logarithmic {
        let min = src
            .as_slice()
            .par_iter()
            .copied()
            .reduce(|| T::infinity(), |a, b| a.min(b));
        if min <= -T::one() {
            return Err(ImageError::LogContrastDomain(
                min.to_f64().unwrap_or(f64::NAN),
            ));
        }
    }

    parallel::par_iter_rows_val(src, dst, |&src_pixel, dst_pixel| {
        *dst_pixel = match mode {
            ContrastMode::Logarithmic => strength * (T::one() + src_pixel).log10(),
            ContrastMode::Exponential => strength * (src_pixel - T::one()).exp(),
        };
    });

    Ok(())
}

/// Performs weighted addition of two images `src1` and `src2` with weights `alpha`
/// and `beta`, and an optional scalar `gamma`. The formula used is:
///
/// dst(x,y,c) = (src1(x,y,c) * alpha + src2(x,y,c) * beta + gamma)
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `alpha` - Weight of the first image elements to be multiplied.
/// * `src2` - The second input image.
/// * `beta` - Weight of the second image elements to be multiplied.
/// * `gamma` - Scalar added to each sum.
/// * `dst` - The output image, same size as the inputs.
///
/// # Errors
///
/// Returns an error if the sizes of `src1` and `src2` do not match.
/// Returns an error if the size of `dst` does not match the size of `src1` or `src2`.
pub fn add_weighted<T, const C: usize>(
    src1: &Image<T, C>,
    alpha: T,
    src2: &Image<T, C>,
    beta: T,
    gamma: T,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    if src1.size() != src2.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            src2.cols(),
            src2.rows(),
        ));
    }

    if src1.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src1.cols(),
            src1.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val_two(src1, src2, dst, |&src1_pixel, &src2_pixel, dst_pixel| {
        *dst_pixel = (src1_pixel * alpha) + (src2_pixel * beta) + gamma;
    });

    Ok(())
}

/// Linearly interpolate between two equally sized images:
///
/// dst(x,y,c) = factor * src1(x,y,c) + (1 - factor) * src2(x,y,c)
///
/// `factor` is not range-restricted: values outside [0, 1] extrapolate
/// rather than interpolate, and clamping the result is left to the caller.
/// Reconciling differently sized inputs (e.g. cropping to a common minimum
/// size) is the caller's responsibility.
///
/// # Arguments
///
/// * `src1` - The first input image.
/// * `src2` - The second input image.
/// * `factor` - The interpolation weight of `src1`.
/// * `dst` - The output image, same size as the inputs.
///
/// # Errors
///
/// Returns an error if the input or output sizes do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::enhance::blend;
///
/// let a = Image::<f32, 3>::from_size_val(ImageSize { width: 2, height: 2 }, 1.0).unwrap();
/// let b = Image::<f32, 3>::from_size_val(a.size(), 0.0).unwrap();
///
/// let mut mixed = Image::<f32, 3>::from_size_val(a.size(), 0.0).unwrap();
///
/// blend(&a, &b, 0.25, &mut mixed).unwrap();
/// assert!((mixed.as_slice()[0] - 0.25).abs() < 1e-6);
/// ```
pub fn blend<T, const C: usize>(
    src1: &Image<T, C>,
    src2: &Image<T, C>,
    factor: T,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Float + Send + Sync,
{
    add_weighted(src1, factor, src2, T::one() - factor, T::zero(), dst)
}
