use lienzo_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Rotate an image around its center, keeping the original extent.
///
/// For each destination pixel the corresponding source coordinate is found
/// by rotating the centered destination coordinate by `angle_degrees` and
/// rounding to the nearest pixel (nearest-neighbor resampling). Destination
/// pixels whose source coordinate falls outside the image are black. The
/// center is `(width / 2, height / 2)` with integer division.
///
/// Rotation by 0 degrees is the identity; rotation by 360 degrees
/// reproduces the input up to rounding at the border. The resampling is
/// lossy: rotating back does not restore the original image exactly.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `angle_degrees` - The rotation angle in degrees.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::rotate::rotate_image;
///
/// let image = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     0.5,
/// ).unwrap();
///
/// let mut rotated = Image::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
///
/// rotate_image(&image, &mut rotated, 0.0).unwrap();
/// assert_eq!(rotated.as_slice(), image.as_slice());
/// ```
pub fn rotate_image<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    angle_degrees: f32,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let cols = src.cols();
    let rows = src.rows();
    let (cx, cy) = ((cols / 2) as f32, (rows / 2) as f32);

    let theta = angle_degrees.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();

    let src_slice = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let y0 = y as f32 - cy;

            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let x0 = x as f32 - cx;

                    // rotate the centered destination coordinate back into
                    // the source frame
                    let xr = (x0 * cos_t - y0 * sin_t + cx).round();
                    let yr = (x0 * sin_t + y0 * cos_t + cy).round();

                    if xr >= 0.0 && xr < cols as f32 && yr >= 0.0 && yr < rows as f32 {
                        let offset = (yr as usize * cols + xr as usize) * C;
                        dst_pixel.copy_from_slice(&src_slice[offset..offset + C]);
                    } else {
                        dst_pixel.fill(0.0);
                    }
                });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use lienzo_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_rotate_zero_is_identity() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|v| v as f32).collect(),
        )?;
        let mut rotated = Image::<f32, 1>::from_size_val(image.size(), 9.0)?;

        super::rotate_image(&image, &mut rotated, 0.0)?;
        assert_eq!(rotated.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn test_rotate_full_turn() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0..16).map(|v| v as f32).collect(),
        )?;
        let mut rotated = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        super::rotate_image(&image, &mut rotated, 360.0)?;
        assert_eq!(rotated.as_slice(), image.as_slice());

        Ok(())
    }

    #[test]
    fn test_rotate_black_stays_black() -> Result<(), ImageError> {
        let image = Image::<f32, 3>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;
        let mut rotated = Image::<f32, 3>::from_size_val(image.size(), 1.0)?;

        for angle in [17.0, 45.0, 90.0, 133.7, 270.0] {
            super::rotate_image(&image, &mut rotated, angle)?;
            assert_eq!(rotated.size(), image.size());
            rotated.as_slice().iter().for_each(|&v| {
                assert_eq!(v, 0.0);
            });
        }

        Ok(())
    }

    #[test]
    fn test_rotate_quarter_turn_center_pixel() -> Result<(), ImageError> {
        let mut data = vec![0.0f32; 9];
        data[4] = 1.0; // center of a 3x3
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            data,
        )?;
        let mut rotated = Image::<f32, 1>::from_size_val(image.size(), 0.0)?;

        // the center is a fixed point of the rotation
        super::rotate_image(&image, &mut rotated, 90.0)?;
        assert_eq!(rotated.get([1, 1, 0]), Some(&1.0));

        Ok(())
    }

    #[test]
    fn test_rotate_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0.0,
        )?;
        let mut rotated = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;

        assert!(matches!(
            super::rotate_image(&image, &mut rotated, 45.0),
            Err(ImageError::InvalidImageSize(4, 4, 2, 2))
        ));

        Ok(())
    }
}
