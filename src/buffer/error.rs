use core::{
    fmt,
    fmt::{Debug, Display, Formatter},
};
use embedded_io::ErrorKind;

/// An invalid buffer configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The buffer must hold at least one word.
    ZeroCapacity,

    /// The address increment is smaller than a word, so consecutive words would overlap.
    IncrementTooSmall,

    /// The last word of the buffer does not fit in the address space.
    AddressOverflow,
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::ZeroCapacity => "buffer capacity must be at least one word",
            Self::IncrementTooSmall => "address increment is smaller than the word size",
            Self::AddressOverflow => "buffer extends past the end of the address space",
        })
    }
}

impl core::error::Error for ConfigError {}

impl embedded_io::Error for ConfigError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// The sink failed while exporting the buffer.
///
/// Anything written to the sink before the failure stays there.
#[derive(Debug, Eq, PartialEq)]
pub struct ExportError<E> {
    sink: E,
}

impl<E> ExportError<E> {
    pub(in crate::buffer) fn new(sink: E) -> Self {
        Self { sink }
    }

    /// The error reported by the sink.
    pub fn sink_error(&self) -> &E {
        &self.sink
    }

    /// Takes the error reported by the sink.
    pub fn into_inner(self) -> E {
        self.sink
    }
}

impl<E> Display for ExportError<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("the sink failed while exporting the buffer")
    }
}

impl<E: Debug> core::error::Error for ExportError<E> {}

impl<E: embedded_io::Error> embedded_io::Error for ExportError<E> {
    fn kind(&self) -> ErrorKind {
        self.sink.kind()
    }
}
