//! SHA-1 digest engine
//!
//! Every object is addressed by the SHA-1 of its canonical encoding
//! (`<kind> <len>\0<payload>`), rendered as 40 lowercase hex characters.

use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};

/// Raw length of a SHA-1 digest in bytes.
pub const DIGEST_LENGTH: usize = 20;

/// Hash `data` and return its object id.
pub fn digest(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);

    let mut raw = [0u8; DIGEST_LENGTH];
    raw.copy_from_slice(&hasher.finalize());
    ObjectId::from_raw(raw)
}
