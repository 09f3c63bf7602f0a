use embedded_io::Write;

use crate::{error::XbmError, packer::PackedRows, policy::Policy};

/// Writes an RGB(A) image as XBM text using [`Policy::FILE_DEFAULT`].
///
/// See [`write_xbm_with`].
pub fn write_xbm<W: Write>(
    sink: &mut W,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
) -> Result<(), XbmError> {
    write_xbm_with(sink, data, width, height, channels, name, Policy::FILE_DEFAULT)
}

/// Writes an RGB(A) image as XBM text: the `<name>_width` and
/// `<name>_height` defines followed by the `<name>_bits[]` array.
///
/// The sink is neither flushed nor closed, so several bitmaps can be
/// appended to the same sink. `name` is used verbatim and must be a valid
/// C identifier. A failed write leaves an unusable fragment behind.
pub fn write_xbm_with<W: Write>(
    sink: &mut W,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
    policy: Policy,
) -> Result<(), XbmError> {
    let rows = PackedRows::new(data, width, height, channels, policy)?;
    write_rows(sink, name, rows)
}

pub(crate) fn write_rows<W: Write>(
    sink: &mut W,
    name: &str,
    rows: PackedRows<'_>,
) -> Result<(), XbmError> {
    let dims = rows.dimensions();
    write!(
        sink,
        "#define {name}_width {}\n#define {name}_height {}\nstatic unsigned char {name}_bits[] = {{",
        dims.width(),
        dims.height()
    )
    .map_err(XbmError::from_write_fmt_error)?;

    for (index, row) in rows.enumerate() {
        let separator = if index == 0 { "" } else { "," };
        write!(sink, "{separator}\n    ").map_err(XbmError::from_write_fmt_error)?;
        for (column, byte) in row.enumerate() {
            let glue = if column == 0 { "" } else { ", " };
            write!(sink, "{glue}0x{byte:02x}").map_err(XbmError::from_write_fmt_error)?;
        }
        trace!("Wrote row {} of {}", index, name);
    }

    sink.write_all(b"};\n").map_err(XbmError::from_io_error)
}
