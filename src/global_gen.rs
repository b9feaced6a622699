//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use crate::generator::{with_rand08::Adapter, Generator};
use crate::{IdentifierBytes, Version};
use rand::rngs::ThreadRng;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Generator<Adapter<ThreadRng>>> = Default::default();
}

/// Generates an identifier string of `version`, uppercased if `uppercase` is true.
///
/// This function employs a thread-local generator, so concurrent callers never contend for it.
/// The v1 and v4 results are hyphenated while the v7 result is 32 unbroken hex digits.
///
/// # Examples
///
/// ```rust
/// use guidgen::Version;
///
/// let guid = guidgen::generate(Version::V4, true);
/// println!("{guid}"); // e.g., "2CA4B2CE-6C13-40D4-BCCF-37D222820F6F"
/// ```
pub fn generate(version: Version, uppercase: bool) -> String {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().generate(version, uppercase))
}

/// Generates a lowercase `{timestamp}-{machine id}-1xxx-yxxx-xxxxxxxxxxxx` string.
///
/// # Examples
///
/// ```rust
/// let guid = guidgen::guid_v1();
/// println!("{guid}"); // e.g., "1718000000000-9634817-1c05-9219-566f82fff672"
/// ```
pub fn guid_v1() -> String {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().generate_v1())
}

/// Generates a lowercase random identifier in the canonical 8-4-4-4-12 layout.
///
/// # Examples
///
/// ```rust
/// let guid = guidgen::guid_v4();
/// println!("{guid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn guid_v4() -> String {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().generate_v4())
}

/// Generates a time-ordered random identifier body.
///
/// # Examples
///
/// ```rust
/// let guid = guidgen::guid_v7();
/// println!("{guid}"); // e.g., "018fd5c46e2b7a3c9f1e0d2c4b6a8e10"
/// println!("{:?}", guid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn guid_v7() -> IdentifierBytes {
    DEFAULT_GENERATOR.with(|g| g.borrow_mut().generate_v7())
}
