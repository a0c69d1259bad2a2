use thiserror::Error;

/// An error type returned by the checked conversions.
///
/// The plain `from_*`/`to_*` functions never produce one of these; they
/// truncate or return zero instead.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum BcdError {
    /// Indicates that a nibble (4-bit segment) of the provided BCD byte
    /// is invalid (greater than 9).
    #[error("invalid BCD nibble: {0:#X}")]
    InvalidBcdNibble(u8),

    /// The packed input holds more bytes than the target width.
    #[error("BCD input is {len} bytes, at most {max} allowed")]
    InputTooLong { len: usize, max: usize },

    /// The value has more decimal digits than the packed form can hold.
    #[error("cannot encode {0} as BCD: too many digits")]
    Overflow(u64),
}
