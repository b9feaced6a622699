//! Time-based identifier routine.
//!
//! This is a decorative format of its own rather than the RFC 4122 time-and-node layout: the
//! first two groups are the decimal Unix timestamp in milliseconds and a decimal random "machine
//! id" below 2^24, followed by three hex groups of 4, 4 and 12 digits.

use std::fmt::Write as _;

use crate::v4::fill_template;
use crate::{RandSource, TimeSource};

/// Exclusive upper bound of the random machine id.
const MACHINE_ID_LIMIT: u32 = 1 << 24;

/// Placeholder template following the timestamp and machine id groups.
const TEMPLATE: &str = "1xxx-yxxx-xxxxxxxxxxxx";

/// Generates a `{timestamp}-{machine id}-1xxx-yxxx-xxxxxxxxxxxx` string.
pub(crate) fn generate<R: RandSource, T: TimeSource>(rng: &mut R, clock: &mut T) -> String {
    let timestamp = clock.unix_ts_ms();
    let machine_id = rng.next_u32() % MACHINE_ID_LIMIT;

    let mut dst = String::with_capacity(48);
    // writing into a String cannot fail
    let _ = write!(dst, "{timestamp}-{machine_id}-");
    fill_template(TEMPLATE, rng, &mut dst);
    dst
}

#[cfg(test)]
mod tests {
    use super::generate;
    use crate::generator::tests::{ConstRand, FixedClock};
    use crate::generator::{with_rand08, StdSystemTime};

    const PATTERN: &str = r"^([0-9]+)-([0-9]+)-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

    /// Generates decorative time-based string
    #[test]
    fn generates_decorative_time_based_string() {
        let re = regex::Regex::new(PATTERN).unwrap();
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        let mut clock = FixedClock(1_700_000_000_000);
        for _ in 0..10_000 {
            let e = generate(&mut rng, &mut clock);
            let caps = re.captures(&e).unwrap();
            assert_eq!(&caps[1], "1700000000000");
            assert!(caps[2].parse::<u32>().unwrap() < 1 << 24);
        }
    }

    /// Fills templates from known random values
    #[test]
    fn fills_templates_from_known_random_values() {
        let mut clock = FixedClock(1_700_000_000_000);
        assert_eq!(
            generate(&mut ConstRand(0), &mut clock),
            "1700000000000-0-1000-8000-000000000000"
        );
        assert_eq!(
            generate(&mut ConstRand(u32::MAX), &mut clock),
            "1700000000000-16777215-1fff-bfff-ffffffffffff"
        );
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use crate::TimeSource;

        let re = regex::Regex::new(PATTERN).unwrap();
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        for _ in 0..1_000 {
            let ts_now = StdSystemTime.unix_ts_ms() as i64;
            let e = generate(&mut rng, &mut StdSystemTime);
            let timestamp: i64 = re.captures(&e).unwrap()[1].parse().unwrap();
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Spreads machine ids over 24 bits
    #[test]
    fn spreads_machine_ids_over_24_bits() {
        let re = regex::Regex::new(PATTERN).unwrap();
        let mut rng = with_rand08::Adapter(rand::thread_rng());
        let mut clock = FixedClock(1);
        let max = (0..10_000)
            .map(|_| {
                let e = generate(&mut rng, &mut clock);
                re.captures(&e).unwrap()[2].parse::<u32>().unwrap()
            })
            .max()
            .unwrap();
        assert!(max >= 1 << 23);
    }
}
