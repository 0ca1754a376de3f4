use crate::mmio::Word;

/// How words are rendered by [`ExternalMemoryBuffer::export_to_sink()`].
///
/// [`ExternalMemoryBuffer::export_to_sink()`]: super::ExternalMemoryBuffer::export_to_sink
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexFormat {
    /// No leading zeros, so zero is rendered as `0`.
    #[default]
    Compact,

    /// Zero-padded to the full width of the word, e.g. `000F` for a `u16`.
    Padded,
}

impl HexFormat {
    pub(in crate::buffer) fn min_digits<T: Word>(self) -> usize {
        match self {
            Self::Compact => 1,
            Self::Padded => T::HEX_DIGITS,
        }
    }
}
