/*!
A no_std converter from RGB(A) pixels to XBM monochrome bitmaps, for
icons baked into firmware of small monochrome displays.

## Features
- no_std, never allocates: all buffers are supplied by the caller
- packed output into a byte buffer, or XBM text into any `embedded_io::Write`
- `std`: write XBM files by path
- `embedded-graphics`: draw packed bitmaps with [`XbmImage`]
- `log`: debug and trace logging

The test suite enables `std` and `embedded-graphics` through a
dev-dependency on this crate, so `cargo test -p embedded-xbm` covers the
file and drawing code too.

## Usage
```
# fn main() -> Result<(), embedded_xbm::XbmError> {
// 8x8 RGBA image with bright even columns
let mut rgba = [0u8; 8 * 8 * 4];
for (index, pixel) in rgba.chunks_exact_mut(4).enumerate() {
    if index % 2 == 0 {
        pixel.fill(0xff);
    }
}

let mut packed = [0u8; 8];
let size = embedded_xbm::convert(&rgba, 8, 8, 4, &mut packed)?;
assert_eq!(size, embedded_xbm::bytes_for_dimensions(8, 8)?);
assert_eq!(packed, [0x55; 8]);

let mut text: Vec<u8> = Vec::new();
embedded_xbm::write_xbm(&mut text, &rgba, 8, 8, 4, "icon")?;
assert!(text.starts_with(b"#define icon_width 8\n"));
# Ok(())
# }
```

## Limitations & non-goals
- width and height must be multiples of 8
- no decoding, scaling or hotspots
- no parsing of XBM text
*/

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
        #[cfg(test)]
        std::eprintln!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    };
}

mod error;
mod layout;
mod packer;
mod policy;
mod writer;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "embedded-graphics")]
mod image;


pub use error::{Precondition, XbmError};
pub use layout::{Dimensions, bytes_for_dimensions};
pub use packer::{PackedRow, PackedRows, convert, convert_with};
pub use policy::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_COLOR_THRESHOLD, Mode, Policy};
pub use writer::{write_xbm, write_xbm_with};

#[cfg(feature = "std")]
pub use file::{write_xbm_file, write_xbm_file_with};
#[cfg(feature = "embedded-graphics")]
pub use image::XbmImage;
