use crate::codec;
use crate::error::BcdError;

/// An unsigned integer with a fixed-width packed BCD form.
///
/// Each width packs two decimal digits per byte, so `u8` holds 2 digits in
/// 1 byte, `u16` 4 digits in 2 bytes, `u32` 8 digits in 4 bytes and `u64`
/// 16 digits in 8 bytes.
///
/// # Examples
///
/// ```
/// use bcd_uint::BcdUint;
///
/// assert_eq!(1234u16.to_bcd(), [0x12, 0x34]);
/// assert_eq!(u32::from_bcd(&[0x12, 0x34]), 1234);
/// assert!(100u8.try_to_bcd().is_err());
/// ```
pub trait BcdUint: Sized + Copy {
    /// Length of the packed form in bytes.
    const BYTES: usize;
    /// Number of decimal digits the packed form holds.
    const DIGITS: usize;
    /// Largest value that encodes without losing digits.
    const MAX_BCD: Self;

    /// The packed form, most significant byte first.
    type Packed: AsRef<[u8]> + Copy;

    /// Encodes the low [`Self::DIGITS`] decimal digits of `self`.
    /// Higher digits are dropped.
    fn to_bcd(self) -> Self::Packed;

    /// Decodes packed BCD.
    ///
    /// Input shorter than [`Self::BYTES`] is left-padded with zero bytes,
    /// longer input keeps only its trailing [`Self::BYTES`] bytes. If any
    /// nibble of the decoded bytes is above 9 the result is zero.
    fn from_bcd(bytes: &[u8]) -> Self;

    /// Encodes `self`, failing with [`BcdError::Overflow`] if it is larger
    /// than [`Self::MAX_BCD`].
    fn try_to_bcd(self) -> Result<Self::Packed, BcdError>;

    /// Decodes packed BCD, reporting the first invalid byte or an over-long
    /// input instead of returning zero.
    fn try_from_bcd(bytes: &[u8]) -> Result<Self, BcdError>;
}

macro_rules! impl_bcd_uint {
    ($($t:ty => $bytes:literal, $max:literal;)*) => {$(
        impl BcdUint for $t {
            const BYTES: usize = $bytes;
            const DIGITS: usize = $bytes * 2;
            const MAX_BCD: Self = $max;

            type Packed = [u8; $bytes];

            fn to_bcd(self) -> Self::Packed {
                codec::pack_truncating::<$bytes>(u64::from(self))
            }

            fn from_bcd(bytes: &[u8]) -> Self {
                // at most DIGITS digits, so always in range
                codec::unpack_or_zero(bytes, $bytes) as $t
            }

            fn try_to_bcd(self) -> Result<Self::Packed, BcdError> {
                codec::pack_checked::<$bytes>(u64::from(self))
            }

            fn try_from_bcd(bytes: &[u8]) -> Result<Self, BcdError> {
                codec::unpack(bytes, $bytes).map(|value| value as $t)
            }
        }
    )*};
}

impl_bcd_uint! {
    u8 => 1, 99;
    u16 => 2, 9_999;
    u32 => 4, 99_999_999;
    u64 => 8, 9_999_999_999_999_999;
}
