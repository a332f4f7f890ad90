use rayon::prelude::*;

use lienzo_image::Image;

/// Apply a function to each pixel in the image in parallel.
///
/// The images are processed row by row; the closure receives one source
/// pixel slice and one destination pixel slice at a time.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each component in the image in parallel.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    src.as_slice()
        .par_chunks_exact(C1 * src.cols())
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * src.cols()))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each component of two equally shaped images in
/// parallel.
pub fn par_iter_rows_val_two<T1, const C1: usize, T2, const C2: usize, T3, const C3: usize>(
    src1: &Image<T1, C1>,
    src2: &Image<T2, C2>,
    dst: &mut Image<T3, C3>,
    f: impl Fn(&T1, &T2, &mut T3) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
    T3: Clone + Send + Sync,
{
    src1.as_slice()
        .par_chunks_exact(C1 * src1.cols())
        .zip(src2.as_slice().par_chunks_exact(C2 * src1.cols()))
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C3 * src1.cols()))
        .for_each(|((src1_chunk, src2_chunk), dst_chunk)| {
            src1_chunk
                .iter()
                .zip(src2_chunk.iter())
                .zip(dst_chunk.iter_mut())
                .for_each(|((src1_pixel, src2_pixel), dst_pixel)| {
                    f(src1_pixel, src2_pixel, dst_pixel);
                });
        });
}

#[cfg(test)]
mod tests {
    use lienzo_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_par_iter_rows_val() -> Result<(), ImageError> {
        let src = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        super::par_iter_rows_val(&src, &mut dst, |s, d| *d = *s * 2);
        assert_eq!(dst.as_slice(), &[2, 4, 6, 8]);

        Ok(())
    }

    #[test]
    fn test_par_iter_rows_two_channels() -> Result<(), ImageError> {
        let src = Image::<u8, 2>::new(
            ImageSize {
                width: 1,
                height: 2,
            },
            vec![1, 2, 3, 4],
        )?;
        let mut dst = Image::<u8, 2>::from_size_val(src.size(), 0)?;

        super::par_iter_rows(&src, &mut dst, |s, d| {
            d[0] = s[1];
            d[1] = s[0];
        });
        assert_eq!(dst.as_slice(), &[2, 1, 4, 3]);

        Ok(())
    }
}
