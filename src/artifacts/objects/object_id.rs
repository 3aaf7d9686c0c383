//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They are both the
//! identity of an object and its address in the store.
//!
//! ## Storage
//!
//! Objects are stored at `<objects>/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::core::digest::DIGEST_LENGTH;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::error::{ObjectError, Result};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

/// Validated object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from its hex form
    ///
    /// Uppercase digits are accepted and normalized to lowercase so that the
    /// derived storage path is unique per digest.
    pub fn try_parse(id: impl AsRef<str>) -> Result<Self> {
        let id = id.as_ref();
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ObjectError::InvalidObjectId(id.to_string()));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    pub(crate) fn from_raw(raw: [u8; DIGEST_LENGTH]) -> Self {
        Self(hex::encode(raw))
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Tree entries reference their targets by raw digest, not by hex text.
    pub fn write_raw_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut raw = [0u8; DIGEST_LENGTH];
        hex::decode_to_slice(&self.0, &mut raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        writer.write_all(&raw)
    }

    /// Read an object ID from binary format (20 bytes)
    pub fn read_raw_from<R: io::Read + ?Sized>(reader: &mut R) -> io::Result<Self> {
        let mut raw = [0u8; DIGEST_LENGTH];
        reader.read_exact(&mut raw)?;

        Ok(Self::from_raw(raw))
    }

    /// Relative storage path
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl FromStr for ObjectId {
    type Err = ObjectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
