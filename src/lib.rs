//! Fixed-width packed BCD (Binary Coded Decimal) conversion.
//!
//! Each byte holds two decimal digits: the upper nibble for the higher digit
//! and the lower nibble for the lower digit, with the most significant byte
//! first. `[0x12, 0x34]` is the decimal number 1234.
//!
//! Every width has one encoder (`from_u*`) and one decoder (`to_u*`). Both
//! are total:
//!
//! - encoding keeps only the low-order digits that fit, so `from_u8(255)`
//!   is `0x55`;
//! - decoding left-pads short input with zeros, and returns zero if any
//!   nibble is above 9.
//!
//! The [`BcdUint`] trait exposes the same conversions generically, along
//! with checked variants that report [`BcdError`] instead.

mod codec;
mod error;
mod uint;

pub use error::BcdError;
pub use uint::BcdUint;

/// Encodes the low two decimal digits of `value` into one BCD byte.
///
/// # Examples
///
/// ```
/// assert_eq!(bcd_uint::from_u8(42), 0x42);
/// assert_eq!(bcd_uint::from_u8(255), 0x55);
/// ```
pub fn from_u8(value: u8) -> u8 {
    let [byte] = value.to_bcd();
    byte
}

/// Encodes the low four decimal digits of `value`.
///
/// # Examples
///
/// ```
/// assert_eq!(bcd_uint::from_u16(1234), [0x12, 0x34]);
/// assert_eq!(bcd_uint::from_u16(u16::MAX), [0x55, 0x35]);
/// ```
pub fn from_u16(value: u16) -> [u8; 2] {
    value.to_bcd()
}

/// Encodes the low eight decimal digits of `value`.
pub fn from_u32(value: u32) -> [u8; 4] {
    value.to_bcd()
}

/// Encodes the low sixteen decimal digits of `value`.
pub fn from_u64(value: u64) -> [u8; 8] {
    value.to_bcd()
}

/// Decodes one BCD byte. Returns zero if either nibble is above 9.
///
/// # Examples
///
/// ```
/// assert_eq!(bcd_uint::to_u8(0x42), 42);
/// assert_eq!(bcd_uint::to_u8(0x4F), 0);
/// ```
pub fn to_u8(bcd: u8) -> u8 {
    u8::from_bcd(&[bcd])
}

/// Decodes up to two BCD bytes.
///
/// Shorter input is treated as the low-order bytes, so `[0x99]` is 99.
/// Returns zero if any nibble is above 9.
///
/// # Examples
///
/// ```
/// assert_eq!(bcd_uint::to_u16(&[0x12, 0x34]), 1234);
/// assert_eq!(bcd_uint::to_u16(&[0x99]), 99);
/// assert_eq!(bcd_uint::to_u16(&[0x00, 0xF0]), 0);
/// ```
pub fn to_u16(bcd: &[u8]) -> u16 {
    u16::from_bcd(bcd)
}

/// Decodes up to four BCD bytes, with the same rules as [`to_u16`].
pub fn to_u32(bcd: &[u8]) -> u32 {
    u32::from_bcd(bcd)
}

/// Decodes up to eight BCD bytes, with the same rules as [`to_u16`].
pub fn to_u64(bcd: &[u8]) -> u64 {
    u64::from_bcd(bcd)
}
