use lienzo_image::{Image, ImageError};
use num_traits::Zero;
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Translate the content of an image by `(dx, dy)` pixels.
///
/// Content shifted past the frame is discarded; pixels entering the frame
/// are filled with zero (black). A shift magnitude at or beyond the full
/// dimension therefore yields an all-zero image rather than an error: fully
/// shifted content has nothing left to show.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `dst` - The output image, same size as `src`.
/// * `dx` - Horizontal displacement in pixels; positive moves content right.
/// * `dy` - Vertical displacement in pixels; positive moves content down.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` do not match.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::shift::shift_image;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1.0, 2.0, 3.0, 4.0],
/// ).unwrap();
///
/// let mut shifted = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();
///
/// shift_image(&image, &mut shifted, 1, 1).unwrap();
/// assert_eq!(shifted.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn shift_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    dx: isize,
    dy: isize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync + Zero,
{
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
    let src_slice = src.as_slice();

    // destination columns receiving content: [dx, cols + dx) intersected with [0, cols)
    let x0 = dx.clamp(0, cols as isize) as usize;
    let x1 = (cols as isize + dx).clamp(0, cols as isize) as usize;

    dst.as_slice_mut()
        .par_chunks_exact_mut(cols * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            dst_row.fill(T::zero());

            let sy = y as isize - dy;
            if sy < 0 || sy >= rows as isize || x0 >= x1 {
                return;
            }

            let len = (x1 - x0) * C;
            let src_offset = sy as usize * cols * C + (x0 as isize - dx) as usize * C;
            dst_row[x0 * C..x0 * C + len]
                .copy_from_slice(&src_slice[src_offset..src_offset + len]);
        });

    Ok(())
}
