use lienzo_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Crop an image to a specified region.
///
/// The window's extent is taken from the destination image: the copied
/// region spans columns `[x, x + dst.width())` and rows `[y, y + dst.height())`
/// of the source. `x` is a column offset and `y` a row offset.
///
/// # Arguments
///
/// * `src` - The source image to crop.
/// * `dst` - The destination image receiving the window.
/// * `x` - The column of the top-left corner of the region to crop.
/// * `y` - The row of the top-left corner of the region to crop.
///
/// # Errors
///
/// Returns an error if the window is empty or does not fit inside the
/// source image.
///
/// # Examples
///
/// ```rust
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::crop::crop_image;
///
/// let image = Image::<_, 1>::new(ImageSize { width: 4, height: 4 }, vec![
///     0u8, 1, 2, 3,
///     4u8, 5, 6, 7,
///     8u8, 9, 10, 11,
///     12u8, 13, 14, 15
/// ]).unwrap();
///
/// let mut cropped = Image::<_, 1>::from_size_val(ImageSize { width: 2, height: 2 }, 0u8).unwrap();
///
/// crop_image(&image, &mut cropped, 1, 1).unwrap();
///
/// assert_eq!(cropped.as_slice(), &[5u8, 6, 9, 10]);
/// ```
pub fn crop_image<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    let dst_cols = dst.cols();
    let dst_rows = dst.rows();

    if dst_cols == 0
        || dst_rows == 0
        || x + dst_cols > src.cols()
        || y + dst_rows > src.rows()
    {
        return Err(ImageError::InvalidCropWindow {
            x,
            y,
            width: dst_cols,
            height: dst_rows,
        });
    }

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .enumerate()
        .for_each(|(i, dst_row)| {
            // get the slice at the top left corner
            let offset = (y + i) * src.cols() * C + x * C;
            let src_slice = &src.as_slice()[offset..offset + dst_cols * C];

            // copy the slice to the destination
            dst_row.copy_from_slice(src_slice);
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use lienzo_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_crop() -> Result<(), ImageError> {
        let image_size = ImageSize {
            width: 2,
            height: 3,
        };

        #[rustfmt::skip]
        let image = Image::<_, 3>::new(
            image_size,
            vec![
                0u8, 1, 2, 3, 4, 5,
                6u8, 7, 8, 9, 10, 11,
                12u8, 13, 14, 15, 16, 17,
            ],
        )?;

        let data_expected = vec![9u8, 10, 11, 15, 16, 17];

        let crop_size = ImageSize {
            width: 1,
            height: 2,
        };

        let mut cropped = Image::<_, 3>::from_size_val(crop_size, 0u8)?;

        super::crop_image(&image, &mut cropped, 1, 1)?;

        assert_eq!(cropped.as_slice(), &data_expected);

        Ok(())
    }

    #[test]
    fn test_crop_out_of_bounds() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            0,
        )?;

        let mut cropped = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0,
        )?;

        assert!(matches!(
            super::crop_image(&image, &mut cropped, 2, 0),
            Err(ImageError::InvalidCropWindow {
                x: 2,
                y: 0,
                width: 3,
                height: 3,
            })
        ));

        Ok(())
    }

    #[test]
    fn test_crop_composes() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 4,
            },
            (0u8..16).collect(),
        )?;

        // crop twice with relative bounds
        let mut first = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0,
        )?;
        super::crop_image(&image, &mut first, 1, 1)?;

        let mut second = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        super::crop_image(&first, &mut second, 1, 1)?;

        // a single crop with the composed bounds is equivalent
        let mut composed = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0,
        )?;
        super::crop_image(&image, &mut composed, 2, 2)?;

        assert_eq!(second.as_slice(), composed.as_slice());

        Ok(())
    }
}
