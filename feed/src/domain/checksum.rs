//! Rolling checksums over feed records.
//!
//! Both checksums fold fields into an `i32` accumulator seeded with `1` using
//! `acc = 31 * acc + hash(field)`. Arithmetic wraps on overflow; the values
//! must stay bit-compatible with checksums produced by existing clients, so
//! text hashes walk UTF-16 code units and 64-bit ids fold their high and low
//! halves together.
//!
//! The snapshot and summary checksums are separate functions; callers key on
//! one specific derivation and must never mix the two.

use super::remote::{RemotePost, RemoteUser};

const SEED: i32 = 1;
const MULTIPLIER: i32 = 31;

/// One input to [`rolling_checksum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumField<'a> {
    /// Text hashed by content.
    Text(&'a str),
    /// Integer identifier.
    Int(i64),
}

impl ChecksumField<'_> {
    fn hash(self) -> i32 {
        match self {
            Self::Text(text) => text_hash(text),
            Self::Int(value) => int_hash(value),
        }
    }
}

/// Fold `fields` into a checksum, in order.
///
/// # Examples
/// ```
/// use feed::domain::{ChecksumField, rolling_checksum};
///
/// assert_eq!(rolling_checksum([]), 1);
/// assert_eq!(rolling_checksum([ChecksumField::Int(2)]), 33);
/// ```
pub fn rolling_checksum<'a>(fields: impl IntoIterator<Item = ChecksumField<'a>>) -> i32 {
    fields.into_iter().fold(SEED, |acc, field| {
        acc.wrapping_mul(MULTIPLIER).wrapping_add(field.hash())
    })
}

/// Checksum of a fetched snapshot over `(user.id, user.name, (post.id, post.title)*)`.
pub fn snapshot_checksum(user: &RemoteUser, posts: &[RemotePost]) -> i32 {
    let head = [ChecksumField::Int(user.id), ChecksumField::Text(&user.name)];
    let tail = posts
        .iter()
        .flat_map(|post| [ChecksumField::Int(post.id), ChecksumField::Text(&post.title)]);
    rolling_checksum(head.into_iter().chain(tail))
}

/// Checksum of a user summary, derived from the name only.
pub fn summary_checksum(name: &str) -> i32 {
    rolling_checksum([ChecksumField::Text(name)])
}

/// Content hash of a string over its UTF-16 code units.
pub fn text_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(MULTIPLIER).wrapping_add(i32::from(unit))
    })
}

/// Hash of a 64-bit integer: high and low halves xor-ed, truncated to 32 bits.
pub fn int_hash(value: i64) -> i32 {
    let bits = value as u64;
    (bits ^ (bits >> 32)) as u32 as i32
}
