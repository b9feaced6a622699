//! Time-ordered random identifier routine.

use crate::hex::decode_digit;
use crate::{v4, IdentifierBytes, RandSource, TimeSource};

/// Generates a time-ordered random identifier body.
///
/// The trailing ten bytes come from a freshly generated v4 identifier, decoded from its text form
/// so that they carry the same randomness as the v4 routine. Bytes 0–5 hold the timestamp and the
/// version and variant bits are applied last.
pub(crate) fn generate<R: RandSource, T: TimeSource>(
    rng: &mut R,
    clock: &mut T,
) -> IdentifierBytes {
    let mut random = [0u8; 16];
    let text = v4::generate(rng);
    let digits = text.bytes().filter(|&c| c != b'-');
    for (i, c) in digits.enumerate() {
        let nibble = decode_digit(c).unwrap_or_default();
        random[i / 2] |= nibble << (4 * (1 - i % 2));
    }

    let mut bytes = [0u8; 16];
    bytes[6..].copy_from_slice(&random[6..]);

    let mut dst = IdentifierBytes::from(bytes);
    dst.set_timestamp(clock.unix_ts_ms());
    dst.set_version_and_variant();
    dst
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::generator::tests::{ConstRand, FixedClock, SeqRand, StepClock};
    use crate::generator::{with_rand08, StdSystemTime};

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = {
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        (0..N_SAMPLES)
            .map(|_| String::from(generate(&mut rng, &mut StdSystemTime)))
            .collect()
    });

    /// Generates unbroken hex string
    #[test]
    fn generates_unbroken_hex_string() {
        let pattern = r"^[0-9a-f]{12}7[0-9a-f]{3}[89ab][0-9a-f]{15}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert_eq!(e.len(), 32);
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Keeps timestamp prefix non-decreasing
    #[test]
    fn keeps_timestamp_prefix_non_decreasing() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                let prev = u64::from_str_radix(&samples[i - 1][..12], 16).unwrap();
                let curr = u64::from_str_radix(&samples[i][..12], 16).unwrap();
                assert!(prev <= curr);
            }
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::TimeSource;

        let mut rng = with_rand08::Adapter(rand::thread_rng());
        for _ in 0..10_000 {
            let ts_now = StdSystemTime.unix_ts_ms() as i64;
            let timestamp = generate(&mut rng, &mut StdSystemTime).timestamp() as i64;
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                let mut it = bins.iter_mut().rev();
                for c in e.chars().rev() {
                    if let Some(mut num) = c.to_digit(16) {
                        for _ in 0..4 {
                            *it.next().unwrap() += num & 1;
                            num >>= 1;
                        }
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Builds prepared cases from fake sources
    #[test]
    fn builds_prepared_cases_from_fake_sources() {
        let mut clock = FixedClock(0x0123_4567_89ab);
        assert_eq!(
            generate(&mut ConstRand(0), &mut clock).to_string(),
            "0123456789ab70008000000000000000"
        );
        assert_eq!(
            generate(&mut ConstRand(u32::MAX), &mut clock).to_string(),
            "0123456789ab7fffbfffffffffffffff"
        );
        // v4 digits "0001020304054060b08090a0b0c0d0e0" keep bytes 6.. as "4060b08090a0b0c0d0e0"
        assert_eq!(
            generate(&mut SeqRand(0), &mut clock).to_string(),
            "0123456789ab7060b08090a0b0c0d0e0"
        );
    }

    /// Orders identifiers by clock readings
    #[test]
    fn orders_identifiers_by_clock_readings() {
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        let mut clock = StepClock(1_700_000_000_000);
        let mut prev = generate(&mut rng, &mut clock);
        for _ in 0..10_000 {
            let curr = generate(&mut rng, &mut clock);
            assert!(prev < curr);
            assert!(prev.to_string() < curr.to_string());
            prev = curr;
        }
    }
}
