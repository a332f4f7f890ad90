use lienzo_image::{Image, ImageError};
use rayon::prelude::*;

/// Number of intensity bins per channel.
pub const NUM_BINS: usize = 256;

/// Pixels per parallel accumulation chunk.
const CHUNK_PIXELS: usize = 1024;

/// Per-channel intensity histogram of an RGB image.
///
/// One 256-bin count table per channel; each table sums to the pixel count
/// of the source image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    /// Red channel bin counts.
    pub red: [usize; NUM_BINS],
    /// Green channel bin counts.
    pub green: [usize; NUM_BINS],
    /// Blue channel bin counts.
    pub blue: [usize; NUM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            red: [0; NUM_BINS],
            green: [0; NUM_BINS],
            blue: [0; NUM_BINS],
        }
    }
}

/// Quantize a normalized intensity to a bin index.
///
/// Values outside [0, 1] are clamped into the valid bin range so that
/// unclamped tone or blend output can still be charted.
fn bin(value: f32) -> usize {
    ((value * 255.0).floor() as i64).clamp(0, NUM_BINS as i64 - 1) as usize
}

/// Compute the per-channel intensity histogram of an RGB image.
///
/// Each channel value is quantized with `floor(value * 255)`, clamped to
/// `[0, 255]`, and counted into the corresponding channel table of `hist`.
/// Counts are accumulated on top of whatever `hist` already holds, so one
/// histogram can aggregate several images. Accumulation runs over pixel
/// chunks in parallel with per-chunk partial counts merged by reduction.
///
/// # Arguments
///
/// * `src` - The input image to compute the histogram of.
/// * `hist` - The output histogram.
///
/// # Example
///
/// ```
/// use lienzo_image::{Image, ImageSize};
/// use lienzo_imgproc::histogram::{compute_histogram, Histogram};
///
/// let image = Image::<f32, 3>::from_size_val(
///     ImageSize { width: 3, height: 2 },
///     1.0,
/// ).unwrap();
///
/// let mut histogram = Histogram::default();
/// compute_histogram(&image, &mut histogram).unwrap();
///
/// assert_eq!(histogram.red[255], 6);
/// assert_eq!(histogram.green[255], 6);
/// assert_eq!(histogram.blue[255], 6);
/// ```
pub fn compute_histogram(src: &Image<f32, 3>, hist: &mut Histogram) -> Result<(), ImageError> {
    let counts = src
        .as_slice()
        .par_chunks(3 * CHUNK_PIXELS)
        .fold(Histogram::default, |mut local, chunk| {
            for pixel in chunk.chunks_exact(3) {
                local.red[bin(pixel[0])] += 1;
                local.green[bin(pixel[1])] += 1;
                local.blue[bin(pixel[2])] += 1;
            }
            local
        })
        .reduce(Histogram::default, |mut a, b| {
            for i in 0..NUM_BINS {
                a.red[i] += b.red[i];
                a.green[i] += b.green[i];
                a.blue[i] += b.blue[i];
            }
            a
        });

    for i in 0..NUM_BINS {
        hist.red[i] += counts.red[i];
        hist.green[i] += counts.green[i];
        hist.blue[i] += counts.blue[i];
    }

    Ok(())
}
