use std::{fs, io, path::Path};

use crate::{error::XbmError, packer::PackedRows, policy::Policy, writer::write_rows};

struct FileSink {
    file: io::BufWriter<fs::File>,
}

impl embedded_io::ErrorType for FileSink {
    type Error = io::Error;
}

impl embedded_io::Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}

/// Creates (or truncates) the file at `path` and writes the image into it
/// as XBM text using [`Policy::FILE_DEFAULT`].
pub fn write_xbm_file(
    path: impl AsRef<Path>,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
) -> Result<(), XbmError> {
    write_xbm_file_with(path, data, width, height, channels, name, Policy::FILE_DEFAULT)
}

/// Like [`write_xbm_file`], with an explicit policy.
///
/// Preconditions are checked before the file is created.
pub fn write_xbm_file_with(
    path: impl AsRef<Path>,
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    name: &str,
    policy: Policy,
) -> Result<(), XbmError> {
    let rows = PackedRows::new(data, width, height, channels, policy)?;
    let path = path.as_ref();
    let file = fs::File::create(path).map_err(XbmError::from_io_error)?;
    debug!("Writing XBM '{}' to {}", name, path.display());
    let mut sink = FileSink {
        file: io::BufWriter::new(file),
    };
    write_rows(&mut sink, name, rows)?;
    embedded_io::Write::flush(&mut sink).map_err(XbmError::from_io_error)
}
