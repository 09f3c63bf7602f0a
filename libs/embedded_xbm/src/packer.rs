use core::slice::ChunksExact;

use crate::{
    error::{Precondition, XbmError},
    layout::Dimensions,
    policy::Policy,
};

/// Row-major iterator over the packed rows of a source image.
///
/// Each row yields `width / 8` bytes. Bit `pos` of a byte is the pixel at
/// horizontal offset `pos` within its group of 8, so the leftmost pixel
/// lands in the least significant bit.
pub struct PackedRows<'a> {
    rows: ChunksExact<'a, u8>,
    dims: Dimensions,
    channels: usize,
    policy: Policy,
}

impl<'a> PackedRows<'a> {
    /// Validates every precondition up front, before any pixel is read.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        channels: usize,
        policy: Policy,
    ) -> Result<Self, XbmError> {
        let dims = Dimensions::new(width, height)?;
        policy.check_channels(channels)?;
        let needed = dims.source_size(channels);
        if data.len() < needed {
            return Err(Precondition::SourceTooSmall {
                needed,
                actual: data.len(),
            }
            .into());
        }
        debug!(
            "Packing {}x{} image ({} channels) with {:?}",
            width, height, channels, policy
        );
        Ok(Self {
            rows: data[..needed].chunks_exact(width * channels),
            dims,
            channels,
            policy,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }
}

impl<'a> Iterator for PackedRows<'a> {
    type Item = PackedRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|row| PackedRow {
            groups: row.chunks_exact(8 * self.channels),
            channels: self.channels,
            policy: self.policy,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for PackedRows<'_> {}

/// The packed bytes of a single row.
pub struct PackedRow<'a> {
    groups: ChunksExact<'a, u8>,
    channels: usize,
    policy: Policy,
}

impl Iterator for PackedRow<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.groups
            .next()
            .map(|group| pack_group(group, self.channels, &self.policy))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups.size_hint()
    }
}

impl ExactSizeIterator for PackedRow<'_> {}

fn pack_group(group: &[u8], channels: usize, policy: &Policy) -> u8 {
    group
        .chunks_exact(channels)
        .enumerate()
        .fold(0u8, |byte, (pos, pixel)| {
            byte | (u8::from(policy.classify(pixel)) << pos)
        })
}

/// Converts an RGB(A) image into a packed monochrome bitmap using
/// [`Policy::BUFFER_DEFAULT`].
///
/// See [`convert_with`].
pub fn convert(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    output: &mut [u8],
) -> Result<usize, XbmError> {
    convert_with(data, width, height, channels, output, Policy::BUFFER_DEFAULT)
}

/// Converts an RGB(A) image into a packed monochrome bitmap.
///
/// `data` holds `width * height` pixels of `channels` bytes each, row-major.
/// `output` must hold at least [`bytes_for_dimensions`] bytes; only that
/// prefix is written. Returns the number of bytes written.
///
/// Nothing is written unless every precondition holds.
///
/// [`bytes_for_dimensions`]: crate::bytes_for_dimensions
pub fn convert_with(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    output: &mut [u8],
    policy: Policy,
) -> Result<usize, XbmError> {
    let rows = PackedRows::new(data, width, height, channels, policy)?;
    let dims = rows.dimensions();
    let needed = dims.buffer_size();
    if output.len() < needed {
        return Err(Precondition::OutputTooSmall {
            needed,
            actual: output.len(),
        }
        .into());
    }

    for (row, out) in rows.zip(output[..needed].chunks_exact_mut(dims.row_bytes())) {
        for (byte, slot) in row.zip(out.iter_mut()) {
            *slot = byte;
        }
    }
    Ok(needed)
}
