use lienzo_image::{Image, ImageError};
use num_traits::{Float, FromPrimitive};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Downsample an image by block-mean pooling.
///
/// Each output pixel is the elementwise mean over its `factor x factor`
/// input block. The output extent is `floor(height / factor) x
/// floor(width / factor)`; remainder rows and columns at the high edge are
/// dropped, not averaged into the last block. Downsampling and
/// [`upsample`] are not inverses of each other.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image of the reduced size.
/// * `factor` - The block extent; must be a positive integer.
///
/// # Errors
///
/// Returns an error if `factor` is zero or if `dst` does not have the
/// reduced size.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::resize::downsample;
///
/// let image = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     0.5,
/// ).unwrap();
///
/// let mut reduced = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 2, height: 2 },
///     0.0,
/// ).unwrap();
///
/// downsample(&image, &mut reduced, 2).unwrap();
/// assert!(reduced.as_slice().iter().all(|&v| (v - 0.5).abs() < 1e-6));
/// ```
pub fn downsample<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    factor: usize,
) -> Result<(), ImageError>
where
    T: Float + FromPrimitive + Send + Sync,
{
    if factor == 0 {
        return Err(ImageError::InvalidScaleFactor(factor));
    }

    let (new_rows, new_cols) = (src.rows() / factor, src.cols() / factor);
    if dst.rows() != new_rows || dst.cols() != new_cols {
        return Err(ImageError::InvalidImageSize(
            new_cols,
            new_rows,
            dst.cols(),
            dst.rows(),
        ));
    }

    // a factor beyond either extent leaves an empty image
    if new_rows == 0 || new_cols == 0 {
        return Ok(());
    }

    let cols = src.cols();
    let src_slice = src.as_slice();
    let norm = T::from_usize(factor * factor).ok_or(ImageError::CastError)?;

    dst.as_slice_mut()
        .par_chunks_exact_mut(new_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(j, dst_pixel)| {
                    let mut acc = [T::zero(); C];

                    for bi in 0..factor {
                        let row_offset = ((i * factor + bi) * cols + j * factor) * C;
                        for bj in 0..factor {
                            let pixel = &src_slice[row_offset + bj * C..row_offset + (bj + 1) * C];
                            for (a, &v) in acc.iter_mut().zip(pixel.iter()) {
                                *a = *a + v;
                            }
                        }
                    }

                    for (d, &a) in dst_pixel.iter_mut().zip(acc.iter()) {
                        *d = a / norm;
                    }
                });
        });

    Ok(())
}

/// Upsample an image by pixel replication.
///
/// Each input pixel is replicated into a `factor x factor` output block
/// (nearest-neighbor magnification). The output extent is
/// `height * factor x width * factor`.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image of the enlarged size.
/// * `factor` - The replication extent; must be a positive integer.
///
/// # Errors
///
/// Returns an error if `factor` is zero or if `dst` does not have the
/// enlarged size.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::resize::upsample;
///
/// let image = Image::<f32, 3>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![1.0, 0.0, 0.0],
/// ).unwrap();
///
/// let mut enlarged = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 3, height: 3 },
///     0.5,
/// ).unwrap();
///
/// upsample(&image, &mut enlarged, 3).unwrap();
///
/// for pixel in enlarged.as_slice().chunks_exact(3) {
///     assert_eq!(pixel, &[1.0, 0.0, 0.0]);
/// }
/// ```
pub fn upsample<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    factor: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if factor == 0 {
        return Err(ImageError::InvalidScaleFactor(factor));
    }

    let (new_rows, new_cols) = (src.rows() * factor, src.cols() * factor);
    if dst.rows() != new_rows || dst.cols() != new_cols {
        return Err(ImageError::InvalidImageSize(
            new_cols,
            new_rows,
            dst.cols(),
            dst.rows(),
        ));
    }

    if new_rows == 0 || new_cols == 0 {
        return Ok(());
    }

    let src_cols = src.cols();
    let src_slice = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(new_cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_row = &src_slice[(y / factor) * src_cols * C..(y / factor + 1) * src_cols * C];

            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let sx = x / factor;
                    dst_pixel.copy_from_slice(&src_row[sx * C..(sx + 1) * C]);
                });
        });

    Ok(())
}
