//! Hexadecimal rendering helpers shared by the generation routines.

/// Lowercase hexadecimal digits indexed by nibble value.
pub(crate) const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Yields the ASCII lowercase hex digits of `value`, most significant first, left-padded with
/// `'0'` to at least `width` digits.
pub(crate) fn hex_digits(value: u64, width: usize) -> impl Iterator<Item = u8> {
    let significant = ((64 - value.leading_zeros() as usize) + 3) / 4;
    let len = width.max(significant).max(1);
    (0..len).rev().map(move |i| match i {
        0..=15 => DIGITS[((value >> (4 * i)) & 0xf) as usize],
        _ => b'0',
    })
}

/// Renders `value` as lowercase hexadecimal, left-padded with zeros to `width` characters.
///
/// Values that need more than `width` digits are rendered in full.
///
/// # Examples
///
/// ```rust
/// use guidgen::hex::to_hex;
///
/// assert_eq!(to_hex(0xab, 4), "00ab");
/// assert_eq!(to_hex(0x1_0000, 2), "10000");
/// ```
pub fn to_hex(value: u64, width: usize) -> String {
    hex_digits(value, width).map(char::from).collect()
}

/// Renders `bytes` as a contiguous lowercase hex string, two digits per byte in array order.
///
/// # Examples
///
/// ```rust
/// use guidgen::hex::bytes_to_hex;
///
/// assert_eq!(bytes_to_hex(&[0x01, 0x8f, 0xff]), "018fff");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    byte_digits(bytes).map(char::from).collect()
}

/// Yields the two ASCII hex digits of every byte in array order.
pub(crate) fn byte_digits(bytes: &[u8]) -> impl Iterator<Item = u8> + '_ {
    bytes.iter().flat_map(|&e| hex_digits(e as u64, 2))
}

/// Decodes a single ASCII hex digit of either case.
pub(crate) const fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
