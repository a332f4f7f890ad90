use lienzo_image::{Image, ImageError};
use num_traits::{Float, One, Zero};

use crate::parallel;

/// Define the RGB weights for the grayscale conversion.
pub(crate) const RW: f64 = 0.299;
pub(crate) const GW: f64 = 0.587;
pub(crate) const BW: f64 = 0.114;

/// Keep a single channel of an image and zero out the others.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `channel` - The channel to keep.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds or if the sizes of
/// `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::color::isolate_channel;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![0.2, 0.4, 0.6],
/// ).unwrap();
///
/// let mut red = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// isolate_channel(&image, &mut red, 0).unwrap();
/// assert_eq!(red.as_slice(), &[0.2, 0.0, 0.0]);
/// ```
pub fn isolate_channel<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    channel: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Zero,
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
        dst_pixel.iter_mut().enumerate().for_each(|(k, d)| {
            *d = if k == channel { src_pixel[k] } else { T::zero() };
        });
    });

    Ok(())
}

/// Force every channel except `channel` to maximum intensity.
///
/// Used to preview a single channel against a bright background: the kept
/// channel shows through while the others saturate to white.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `channel` - The channel to keep.
///
/// # Errors
///
/// Returns an error if the channel index is out of bounds or if the sizes of
/// `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::color::mask_channel;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![0.2, 0.4, 0.6],
/// ).unwrap();
///
/// let mut green = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// mask_channel(&image, &mut green, 1).unwrap();
/// assert_eq!(green.as_slice(), &[1.0, 0.4, 1.0]);
/// ```
pub fn mask_channel<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    channel: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + One,
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
        dst_pixel.iter_mut().enumerate().for_each(|(k, d)| {
            *d = if k == channel { src_pixel[k] } else { T::one() };
        });
    });

    Ok(())
}

/// Compute the negative of an image, elementwise `1 - v`.
///
/// The input is assumed normalized to [0, 1]; no clamping is performed, so
/// the negative of a normalized image is itself normalized.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn invert<T, const C: usize>(src: &Image<T, C>, dst: &mut Image<T, C>) -> Result<(), ImageError>
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
        *dst_pixel = T::one() - src_pixel;
    });

    Ok(())
}

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The weights sum to 1.0, so a normalized input yields a normalized luma.
/// Whether the single channel is replicated back into an RGB triple for
/// display is the caller's decision (see [`rgb_from_gray`]).
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output grayscale image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::color::gray_from_rgb;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0f32; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// gray_from_rgb(&image, &mut gray).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb<T>(src: &Image<T, 3>, dst: &mut Image<T, 1>) -> Result<(), ImageError>
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

    let rw = T::from(RW).ok_or(ImageError::CastError)?;
    let gw = T::from(GW).ok_or(ImageError::CastError)?;
    let bw = T::from(BW).ok_or(ImageError::CastError)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let r = src_pixel[0];
        let g = src_pixel[1];
        let b = src_pixel[2];
        dst_pixel[0] = rw * r + gw * g + bw * b;
    });

    Ok(())
}

/// Convert a grayscale image to an RGB image by replicating the grayscale
/// value across all three channels.
///
/// # Arguments
///
/// * `src` - The input grayscale image.
/// * `dst` - The output RGB image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
pub fn rgb_from_gray<T>(src: &Image<T, 1>, dst: &mut Image<T, 3>) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[0];
        dst_pixel[2] = src_pixel[0];
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use lienzo_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_isolate_channel() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
        )?;
        let mut isolated = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::isolate_channel(&image, &mut isolated, 1)?;
        assert_eq!(isolated.as_slice(), &[0.0, 0.2, 0.0, 0.0, 0.5, 0.0]);

        let kept = isolated.channel(1)?;
        assert_eq!(kept.as_slice(), image.channel(1)?.as_slice());

        Ok(())
    }

    #[test]
    fn test_isolate_channel_invalid() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            0.0,
        )?;
        let mut dst = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        assert!(matches!(
            super::isolate_channel(&image, &mut dst, 3),
            Err(ImageError::ChannelIndexOutOfBounds(3, 3))
        ));

        Ok(())
    }

    #[test]
    fn test_mask_channel() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
        )?;
        let mut masked = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::mask_channel(&image, &mut masked, 2)?;
        assert_eq!(masked.as_slice(), &[1.0, 1.0, 0.3, 1.0, 1.0, 0.6]);

        assert!(matches!(
            super::mask_channel(&image, &mut masked, 5),
            Err(ImageError::ChannelIndexOutOfBounds(5, 3))
        ));

        Ok(())
    }

    #[test]
    fn test_invert_involution() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![0.0, 0.25, 0.5, 0.75, 1.0, 0.1],
        )?;
        let mut negative = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;
        let mut restored = Image::<f32, 3>::from_size_val(image.size(), 0.0)?;

        super::invert(&image, &mut negative)?;
        super::invert(&negative, &mut restored)?;

        restored
            .as_slice()
            .iter()
            .zip(image.as_slice().iter())
            .for_each(|(a, b)| {
                assert!((a - b).abs() < 1e-6);
            });

        Ok(())
    }

    #[test]
    fn test_gray_from_rgb_white() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            1.0,
        )?;
        let mut gray = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::gray_from_rgb(&image, &mut gray)?;

        // the weights sum to 1.0, so a white image keeps luma 1.0
        gray.as_slice().iter().for_each(|&v| {
            assert!((v - 1.0).abs() < 1e-6);
        });

        Ok(())
    }

    #[test]
    fn test_gray_weights() {
        assert!((super::RW + super::GW + super::BW - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rgb_from_gray() -> Result<(), ImageError> {
        let gray = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0.25, 0.75],
        )?;
        let mut rgb = Image::<f32, 3>::from_size_val(gray.size(), 0.0)?;

        super::rgb_from_gray(&gray, &mut rgb)?;
        assert_eq!(rgb.as_slice(), &[0.25, 0.25, 0.25, 0.75, 0.75, 0.75]);

        Ok(())
    }
}
