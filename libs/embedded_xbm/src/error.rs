use core::fmt;

/// A violated caller contract. These are programmer errors and are never
/// worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// Width or height is zero.
    ZeroDimension,
    /// Width or height is not a multiple of 8.
    UnalignedDimension,
    /// Only 3 (RGB) and 4 (RGBA) channels are supported.
    UnsupportedChannels(usize),
    /// The mode consults alpha but the pixels have no alpha channel.
    AlphaChannelMissing,
    /// A side does not fit the 32-bit coordinates of a draw target.
    DimensionTooLarge,
    SourceTooSmall { needed: usize, actual: usize },
    OutputTooSmall { needed: usize, actual: usize },
}

/// Error type for bitmap conversion and serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XbmError {
    Precondition(Precondition),
    IoError(embedded_io::ErrorKind),
}

impl XbmError {
    pub(crate) fn from_io_error(error: impl embedded_io::Error) -> Self {
        XbmError::IoError(error.kind())
    }

    pub(crate) fn from_write_fmt_error<E: embedded_io::Error>(
        error: embedded_io::WriteFmtError<E>,
    ) -> Self {
        match error {
            embedded_io::WriteFmtError::FmtError => {
                XbmError::IoError(embedded_io::ErrorKind::Other)
            }
            embedded_io::WriteFmtError::Other(e) => XbmError::from_io_error(e),
        }
    }
}

impl From<Precondition> for XbmError {
    fn from(precondition: Precondition) -> Self {
        XbmError::Precondition(precondition)
    }
}

impl embedded_io::Error for XbmError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            XbmError::IoError(kind) => *kind,
            XbmError::Precondition(_) => embedded_io::ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::ZeroDimension => f.write_str("width and height must be non-zero"),
            Precondition::UnalignedDimension => {
                f.write_str("width and height must be multiples of 8")
            }
            Precondition::UnsupportedChannels(n) => {
                write!(f, "unsupported channel count {n}, expected 3 or 4")
            }
            Precondition::AlphaChannelMissing => {
                f.write_str("mode needs an alpha channel but pixels have 3 channels")
            }
            Precondition::DimensionTooLarge => f.write_str("width or height exceeds u32"),
            Precondition::SourceTooSmall { needed, actual } => {
                write!(f, "source holds {actual} bytes, {needed} needed")
            }
            Precondition::OutputTooSmall { needed, actual } => {
                write!(f, "output holds {actual} bytes, {needed} needed")
            }
        }
    }
}

impl fmt::Display for XbmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XbmError::Precondition(p) => write!(f, "precondition violated: {p}"),
            XbmError::IoError(kind) => write!(f, "sink error: {kind:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for XbmError {}
