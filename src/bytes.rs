use std::{fmt, str};

use fstr::FStr;

use crate::hex::{byte_digits, bytes_to_hex, decode_digit};
use crate::ParseError;

/// Represents the 128-bit body of a time-ordered random identifier.
///
/// The bytes are big-endian: the first six hold the Unix timestamp in milliseconds, the top
/// nibble of byte 6 holds the version and the top two bits of byte 8 hold the variant. The text
/// form is 32 unbroken lowercase hex digits.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct IdentifierBytes([u8; 16]);

impl IdentifierBytes {
    /// All-zero identifier body.
    pub const NIL: Self = Self([0x00; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Forces the variant bits of byte 8 to `10` and the version nibble of byte 6 to `7`,
    /// preserving every other bit.
    pub fn set_version_and_variant(&mut self) {
        self.0[8] = 0x80 | (self.0[8] & 0x3f);
        self.0[6] = 0x70 | (self.0[6] & 0x0f);
    }

    /// Writes a millisecond timestamp into bytes 0 through 5.
    ///
    /// The value is split into a high component (`unix_ts_ms >> 32`) stored big-endian in bytes
    /// 0–1 and a low 32-bit component stored big-endian in bytes 2–5. Bits above the 48th are
    /// dropped.
    pub fn set_timestamp(&mut self, unix_ts_ms: u64) {
        let high = (unix_ts_ms >> 32) as u16;
        let low = unix_ts_ms as u32;
        self.0[0..2].copy_from_slice(&high.to_be_bytes());
        self.0[2..6].copy_from_slice(&low.to_be_bytes());
    }

    /// Returns the 48-bit timestamp stored in bytes 0 through 5.
    pub fn timestamp(&self) -> u64 {
        let mut buf = [0u8; 8];
        buf[2..].copy_from_slice(&self.0[..6]);
        u64::from_be_bytes(buf)
    }

    /// Returns the version nibble stored in the top four bits of byte 6.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns true if the top two bits of byte 8 are `10`.
    pub const fn has_standard_variant(&self) -> bool {
        self.0[8] >> 6 == 0b10
    }

    /// Returns the 32-digit hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guidgen::IdentifierBytes;
    ///
    /// let x = "018fd5c46e2b7a3c9f1e0d2c4b6a8e10".parse::<IdentifierBytes>()?;
    /// assert_eq!(&x.encode() as &str, "018fd5c46e2b7a3c9f1e0d2c4b6a8e10");
    /// # Ok::<(), guidgen::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<32> {
        let mut buffer = [0u8; 32];
        for (dst, src) in buffer.iter_mut().zip(byte_digits(&self.0)) {
            *dst = src;
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: every byte written is an ASCII hex digit.
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }
}

impl fmt::Display for IdentifierBytes {
    /// Returns the 32-digit unbroken hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for IdentifierBytes {
    type Err = ParseError;

    /// Creates an object from the 32-digit hexadecimal string representation of either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError::InvalidIdentifier;
        let src = src.as_bytes();
        if src.len() != 32 {
            return Err(ERR);
        }
        let mut dst = [0u8; 16];
        for (e, pair) in dst.iter_mut().zip(src.chunks_exact(2)) {
            let hi = decode_digit(pair[0]).ok_or(ERR)?;
            let lo = decode_digit(pair[1]).ok_or(ERR)?;
            *e = (hi << 4) | lo;
        }
        Ok(Self(dst))
    }
}

impl From<IdentifierBytes> for [u8; 16] {
    fn from(src: IdentifierBytes) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for IdentifierBytes {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for IdentifierBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<IdentifierBytes> for u128 {
    fn from(src: IdentifierBytes) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for IdentifierBytes {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<IdentifierBytes> for String {
    fn from(src: IdentifierBytes) -> Self {
        bytes_to_hex(src.as_bytes())
    }
}

impl TryFrom<String> for IdentifierBytes {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::IdentifierBytes;

    impl From<IdentifierBytes> for uuid::Uuid {
        fn from(src: IdentifierBytes) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for IdentifierBytes {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, IdentifierBytes};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for IdentifierBytes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for IdentifierBytes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = IdentifierBytes;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 32-digit hex identifier or 16 bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::IdentifierBytes;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases: [(&str, &[u8]); 3] = [
                ("00000000000000000000000000000000", &[0u8; 16]),
                (
                    "0123456789ab70008000000000000000",
                    &[1, 35, 69, 103, 137, 171, 112, 0, 128, 0, 0, 0, 0, 0, 0, 0],
                ),
                (
                    "018fd5c46e2b7a3c9f1e0d2c4b6a8e10",
                    &[
                        1, 143, 213, 196, 110, 43, 122, 60, 159, 30, 13, 44, 75, 106, 142, 16,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<IdentifierBytes>().unwrap();
                assert_tokens(&e.readable(), &[Token::Str(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
