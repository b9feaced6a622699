//! Random identifier routine and the placeholder template filler shared with v1.

use crate::hex::DIGITS;
use crate::RandSource;

/// Placeholder template of the canonical random identifier.
const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Generates a random identifier in the canonical 8-4-4-4-12 lowercase layout.
///
/// The third group starts with the version digit `4` and the fourth group starts with one of
/// `8`, `9`, `a` or `b`.
pub(crate) fn generate<R: RandSource>(rng: &mut R) -> String {
    let mut dst = String::with_capacity(TEMPLATE.len());
    fill_template(TEMPLATE, rng, &mut dst);
    dst
}

/// Appends `template` to `dst`, replacing every `x` with a random hex digit and every `y` with a
/// random hex digit whose top two bits are `10`. Other characters are copied as they are.
///
/// Placeholders take the nibbles of one `fill_bytes` draw in order, high nibble first.
pub(crate) fn fill_template<R: RandSource>(template: &str, rng: &mut R, dst: &mut String) {
    let n_placeholders = template.chars().filter(|&c| c == 'x' || c == 'y').count();
    let mut random = vec![0u8; (n_placeholders + 1) / 2];
    rng.fill_bytes(&mut random);

    let mut nibbles = random.iter().flat_map(|&e| [e >> 4, e & 0xf]);
    for c in template.chars() {
        let nibble = match c {
            'x' => nibbles.next().unwrap_or_default(),
            'y' => (nibbles.next().unwrap_or_default() & 0x3) | 0x8,
            _ => {
                dst.push(c);
                continue;
            }
        };
        dst.push(DIGITS[nibble as usize] as char);
    }
}
