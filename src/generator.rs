//! Identifier generator and the capabilities it draws from.

use crate::{v1, v4, v7, GuidSettings, IdentifierBytes, Version};

pub mod with_rand08;


/// A trait that defines the minimum random number generator interface for [`Generator`].
pub trait RandSource {
    /// Returns the next random `u32`.
    fn next_u32(&mut self) -> u32;

    /// Fills `dest` with random data. Template placeholders are drawn through this method.
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

/// A trait that defines the minimum system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current Unix timestamp in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads the system clock.
///
/// A clock set before the Unix epoch reads as `0`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Represents an identifier generator that owns its random number generator and clock.
///
/// The generator keeps no state between calls other than whatever its sources keep, so every
/// identifier is built from fresh clock and random readings. Sharing a generator across threads
/// requires the caller's own synchronization because the methods take `&mut self`; the
/// crate-level `generate` function of the `global_gen` feature uses a thread-local instance.
///
/// # Examples
///
/// ```rust
/// use guidgen::{Generator, Version};
///
/// let mut g = Generator::with_rand08(rand::rngs::OsRng);
/// println!("{}", g.generate(Version::V4, false)); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{}", g.generate(Version::V7, true)); // e.g., "018FD5C46E2B7A3C9F1E0D2C4B6A8E10"
/// ```
///
/// # Output shapes
///
/// | Method          | Shape                                                      |
/// | --------------- | ---------------------------------------------------------- |
/// | [`generate_v1`] | `{decimal ms}-{decimal machine id}-1xxx-yxxx-xxxxxxxxxxxx` |
/// | [`generate_v4`] | `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`                     |
/// | [`generate_v7`] | 32 unbroken hex digits                                     |
///
/// [`generate_v1`]: Generator::generate_v1
/// [`generate_v4`]: Generator::generate_v4
/// [`generate_v7`]: Generator::generate_v7
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R, T = StdSystemTime> {
    /// The random number generator used by the generator.
    rng: R,

    /// The clock used by the generator.
    clock: T,
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator instance from a random number generator and a clock.
    pub const fn new(rng: R, clock: T) -> Self {
        Self { rng, clock }
    }

    /// Generates an identifier string of `version`, uppercased if `uppercase` is true.
    ///
    /// This never fails and always returns a non-empty string. See the [`Generator`] type
    /// documentation for the shape each version produces.
    pub fn generate(&mut self, version: Version, uppercase: bool) -> String {
        log::trace!("generating {version} identifier (uppercase: {uppercase})");
        let mut dst = match version {
            Version::V1 => self.generate_v1(),
            Version::V4 => self.generate_v4(),
            Version::V7 => self.generate_v7().into(),
        };
        if uppercase {
            dst.make_ascii_uppercase();
        }
        dst
    }

    /// Generates an identifier string as described by `settings`.
    pub fn generate_with(&mut self, settings: &GuidSettings) -> String {
        self.generate(settings.version, settings.uppercase)
    }

    /// Generates a lowercase `{timestamp}-{machine id}-1xxx-yxxx-xxxxxxxxxxxx` string.
    ///
    /// This is not an RFC 4122 version 1 identifier: the first two groups are decimal numbers.
    pub fn generate_v1(&mut self) -> String {
        v1::generate(&mut self.rng, &mut self.clock)
    }

    /// Generates a lowercase random identifier in the canonical 8-4-4-4-12 layout.
    pub fn generate_v4(&mut self) -> String {
        v4::generate(&mut self.rng)
    }

    /// Generates a time-ordered random identifier body.
    ///
    /// Its [`Display`](std::fmt::Display) form is 32 unbroken lowercase hex digits.
    pub fn generate_v7(&mut self) -> IdentifierBytes {
        v7::generate(&mut self.rng, &mut self.clock)
    }
}
