use num_traits::{Float, Zero};
use std::cmp::PartialOrd;

use lienzo_image::{Image, ImageError};

use crate::color;
use crate::parallel;

/// Apply a binary threshold to an image.
///
/// # Arguments
///
/// * `src` - The input image of an arbitrary number of channels and type.
/// * `dst` - The output image of an arbitrary number of channels and type.
/// * `threshold` - The threshold value. Must be the same type as the image.
/// * `max_value` - The value to use when the input value is greater than the threshold.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Examples
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::threshold::threshold_binary;
///
/// let data = vec![100u8, 200, 50, 150, 200, 250];
/// let image = Image::<_, 1>::new(ImageSize { width: 2, height: 3 }, data).unwrap();
///
/// let mut thresholded = Image::<_, 1>::from_size_val(image.size(), 0).unwrap();
///
/// threshold_binary(&image, &mut thresholded, 100, 255).unwrap();
/// assert_eq!(thresholded.as_slice(), &[0u8, 255, 0, 255, 255, 255]);
/// ```
pub fn threshold_binary<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    threshold: T,
    max_value: T,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + PartialOrd + Zero,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows_val(src, dst, |src_pixel, dst_pixel| {
        *dst_pixel = if *src_pixel > threshold {
            max_value
        } else {
            T::zero()
        };
    });

    Ok(())
}

/// Binarize an RGB image against a luma threshold.
///
/// The luma of each pixel (`0.299 R + 0.587 G + 0.114 B`) is compared to
/// `threshold` and the result is a 0/1 mask: 1 where `luma > threshold`,
/// 0 elsewhere. The threshold is an arbitrary real; no range restriction is
/// enforced.
///
/// # Arguments
///
/// * `src` - The input RGB image.
/// * `dst` - The output mask, same size as `src`.
/// * `threshold` - The luma cut-off.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::threshold::binarize;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![0.9, 0.9, 0.9, 0.1, 0.1, 0.1],
/// ).unwrap();
///
/// let mut mask = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
///
/// binarize(&image, &mut mask, 0.5).unwrap();
/// assert_eq!(mask.as_slice(), &[1u8, 0]);
/// ```
pub fn binarize<T>(src: &Image<T, 3>, dst: &mut Image<u8, 1>, threshold: T) -> Result<(), ImageError>
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

    let rw = T::from(color::RW).ok_or(ImageError::CastError)?;
    let gw = T::from(color::GW).ok_or(ImageError::CastError)?;
    let bw = T::from(color::BW).ok_or(ImageError::CastError)?;

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let luma = rw * src_pixel[0] + gw * src_pixel[1] + bw * src_pixel[2];
        dst_pixel[0] = u8::from(luma > threshold);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use lienzo_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_threshold_binary() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.1, 0.6, 0.5, 0.9],
        )?;
        let mut thresholded = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::threshold_binary(&image, &mut thresholded, 0.5, 1.0)?;
        assert_eq!(thresholded.as_slice(), &[0.0, 1.0, 0.0, 1.0]);

        Ok(())
    }

    #[test]
    fn test_binarize() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![
                1.0, 1.0, 1.0, // white, luma 1.0
                0.0, 0.0, 0.0, // black, luma 0.0
                0.0, 1.0, 0.0, // green, luma 0.587
            ],
        )?;
        let mut mask = Image::<u8, 1>::from_size_val(image.size(), 7)?;

        super::binarize(&image, &mut mask, 0.5)?;
        assert_eq!(mask.as_slice(), &[1, 0, 1]);

        super::binarize(&image, &mut mask, 0.6)?;
        assert_eq!(mask.as_slice(), &[1, 0, 0]);

        // the threshold is unrestricted; everything clears a negative one
        super::binarize(&image, &mut mask, -1.0)?;
        assert_eq!(mask.as_slice(), &[1, 1, 1]);

        Ok(())
    }

    #[test]
    fn test_binarize_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.5,
        )?;
        let mut mask = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 1,
            },
            0,
        )?;

        assert!(matches!(
            super::binarize(&image, &mut mask, 0.5),
            Err(ImageError::InvalidImageSize(2, 2, 2, 1))
        ));

        Ok(())
    }
}
