//! Digit packing shared by every width.
//!
//! Values are carried as `u64` here; the widest packed form (8 bytes, 16
//! digits) tops out at 9_999_999_999_999_999, well inside `u64`.

use crate::error::BcdError;

/// Packs the low `2 * N` decimal digits of `value`, most significant byte
/// first.
///
/// Returns the packed bytes together with the high-order part of `value`
/// that did not fit, which is zero when nothing was dropped.
pub(crate) fn pack<const N: usize>(mut value: u64) -> ([u8; N], u64) {
    let mut bytes = [0u8; N];
    for byte in bytes.iter_mut().rev() {
        let lo = (value % 10) as u8;
        value /= 10;
        let hi = (value % 10) as u8;
        value /= 10;
        *byte = (hi << 4) | lo;
    }
    (bytes, value)
}

/// Like [`pack`], but silently drops the digits that do not fit.
pub(crate) fn pack_truncating<const N: usize>(value: u64) -> [u8; N] {
    let (bytes, dropped) = pack::<N>(value);
    if dropped != 0 {
        tracing::trace!(value, dropped, bytes = N, "high BCD digits dropped");
    }
    bytes
}

/// Like [`pack`], but refuses values with more than `2 * N` digits.
pub(crate) fn pack_checked<const N: usize>(value: u64) -> Result<[u8; N], BcdError> {
    match pack::<N>(value) {
        (bytes, 0) => Ok(bytes),
        _ => Err(BcdError::Overflow(value)),
    }
}

/// Unpacks at most `max` BCD bytes, most significant first.
///
/// Shorter input is read as the low-order bytes of a zero-padded value, so
/// `[0x99]` is 99 for every width.
pub(crate) fn unpack(bytes: &[u8], max: usize) -> Result<u64, BcdError> {
    if bytes.len() > max {
        return Err(BcdError::InputTooLong {
            len: bytes.len(),
            max,
        });
    }

    let mut result = 0u64;
    for &b in bytes {
        let hi = b >> 4;
        let lo = b & 0x0F;
        if hi > 9 || lo > 9 {
            return Err(BcdError::InvalidBcdNibble(b));
        }
        result = result * 100 + u64::from(hi * 10 + lo);
    }
    Ok(result)
}

/// Total form of [`unpack`].
///
/// Over-long input keeps its trailing `max` bytes. Any invalid nibble makes
/// the whole result zero.
pub(crate) fn unpack_or_zero(bytes: &[u8], max: usize) -> u64 {
    let start = bytes.len().saturating_sub(max);
    if start > 0 {
        tracing::trace!(len = bytes.len(), max, "leading BCD bytes ignored");
    }
    match unpack(&bytes[start..], max) {
        Ok(value) => value,
        Err(err) => {
            tracing::trace!(%err, "BCD input decoded as zero");
            0
        }
    }
}
