use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use lienzo_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// Represents an image with pixel data.
///
/// The pixel data is stored as a dense row-major buffer with shape (H, W, C),
/// where H is the height of the image, W the width and C the number of
/// channels. Operations over images never mutate their input; results are
/// written to a separately allocated destination image.
#[derive(Clone)]
pub struct Image<T, const CHANNELS: usize> {
    data: Vec<T>,
    size: ImageSize,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major (H, W, C) order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use lienzo_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { data, size })
    }

    /// Create a new image with the given size, every component set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lienzo_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 3>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0.0,
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the underlying pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the component at `[row, col, channel]`, or `None`
    /// if the index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lienzo_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 3>::new(
    ///     ImageSize { width: 1, height: 2 },
    ///     vec![0., 1., 2., 3., 4., 5.],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get([1, 0, 2]), Some(&5.0));
    /// assert_eq!(image.get([2, 0, 0]), None);
    /// ```
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.size.height || x >= self.size.width || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.size.width + x) * CHANNELS + c)
    }

    /// Get a channel of the image.
    ///
    /// # Arguments
    ///
    /// * `channel` - The channel to extract.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image<T, 1>, ImageError>
    where
        T: Copy,
    {
        if channel >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }

        let channel_data = self
            .data
            .chunks_exact(CHANNELS)
            .map(|pixel| pixel[channel])
            .collect();

        Image::new(self.size, channel_data)
    }

    /// Split the image into its channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use lienzo_image::{Image, ImageSize};
    ///
    /// let image = Image::<f32, 2>::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0.0,
    /// ).unwrap();
    ///
    /// let channels = image.split_channels().unwrap();
    /// assert_eq!(channels.len(), 2);
    /// ```
    pub fn split_channels(&self) -> Result<Vec<Image<T, 1>>, ImageError>
    where
        T: Copy,
    {
        let mut channels = Vec::with_capacity(CHANNELS);

        for i in 0..CHANNELS {
            channels.push(self.channel(i)?);
        }

        Ok(channels)
    }
}
