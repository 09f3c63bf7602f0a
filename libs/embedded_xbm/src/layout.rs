use crate::error::{Precondition, XbmError};

/// Width and height of a bitmap, both non-zero multiples of 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, XbmError> {
        if width == 0 || height == 0 {
            return Err(Precondition::ZeroDimension.into());
        }
        if width % 8 != 0 || height % 8 != 0 {
            return Err(Precondition::UnalignedDimension.into());
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Packed bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.width / 8
    }

    /// Packed bytes for the whole bitmap.
    pub fn buffer_size(&self) -> usize {
        self.row_bytes() * self.height
    }

    /// Source bytes needed for pixels with `channels` components.
    pub fn source_size(&self, channels: usize) -> usize {
        self.width
            .saturating_mul(self.height)
            .saturating_mul(channels)
    }
}

/// Number of bytes needed to hold the packed bitmap of a `width` x
/// `height` image. This is the in-memory size, not the size of the XBM
/// text.
///
/// ```
/// assert_eq!(embedded_xbm::bytes_for_dimensions(16, 8), Ok(16));
/// ```
pub fn bytes_for_dimensions(width: usize, height: usize) -> Result<usize, XbmError> {
    Dimensions::new(width, height).map(|dims| dims.buffer_size())
}
