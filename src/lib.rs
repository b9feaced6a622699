//! Version 1, 4 and 7 style identifier generation for graph-node hosts
//!
//! ```rust
//! # #[cfg(feature = "global_gen")]
//! # {
//! use guidgen::Version;
//!
//! println!("{}", guidgen::generate(Version::V4, false)); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{}", guidgen::generate(Version::V7, true)); // e.g., "018FD5C46E2B7A3C9F1E0D2C4B6A8E10"
//! # }
//! ```
//!
//! A host resolves two values, a version tag and an uppercase flag, and receives one string.
//! Generation never fails. The three versions produce differently shaped strings:
//!
//! - `v1`: `{timestamp}-{machine id}-1xxx-yxxx-xxxxxxxxxxxx`, where the first two groups are the
//!   decimal Unix timestamp in milliseconds and a decimal random number below 2^24. This is a
//!   format of its own, not an RFC 4122 version 1 layout.
//! - `v4`: the canonical `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx` random layout.
//! - `v7`: 32 unbroken hex digits, sortable by creation time.
//!
//! In the `x` positions every digit is random; the `y` digit is one of `8`, `9`, `a` or `b`.
//!
//! # Field and bit layout of v7
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The 48-bit `unix_ts_ms` field holds the Unix timestamp in milliseconds, the 4-bit `ver` field
//! is `0111` and the 2-bit `var` field is `10`. The `rand` bits are taken from a v4 identifier
//! generated for the purpose. Unlike monotonic generators, two identifiers created within the
//! same millisecond are not ordered relative to each other.
//!
//! # Clock and randomness
//!
//! [`Generator`] draws from a [`RandSource`] and a [`TimeSource`] that it owns, so tests and
//! reproducible pipelines can substitute their own:
//!
//! ```rust
//! use guidgen::{Generator, TimeSource, Version};
//!
//! struct Frozen;
//!
//! impl TimeSource for Frozen {
//!     fn unix_ts_ms(&mut self) -> u64 {
//!         0x0123_4567_89ab
//!     }
//! }
//!
//! let mut g = Generator::new(guidgen::with_rand08::Adapter(rand::thread_rng()), Frozen);
//! assert!(g.generate(Version::V7, false).starts_with("0123456789ab7"));
//! ```
//!
//! # Crate features
//!
//! - `global_gen` (default): [`generate`] and the `guid_v*` functions backed by a thread-local
//!   generator.
//! - `serde`: `Serialize` and `Deserialize` for [`Version`], [`GuidSettings`] and
//!   [`IdentifierBytes`].
//! - `uuid`: conversions between [`IdentifierBytes`] and `uuid::Uuid`.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bytes;
pub use bytes::IdentifierBytes;

mod error;
pub use error::ParseError;

pub mod hex;

mod generator;
pub use generator::{with_rand08, Generator, RandSource, StdSystemTime, TimeSource};

mod settings;
pub use settings::GuidSettings;

mod version;
pub use version::Version;

mod v1;
mod v4;
mod v7;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{generate, guid_v1, guid_v4, guid_v7};
