use crate::artifacts::core::digest::digest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::Result;
use bytes::Bytes;

/// Anything that can be written to the object database
///
/// Implementors only describe their type and payload. Header framing and
/// hashing are shared, so every kind goes through the same pipeline.
pub trait Object {
    fn object_type(&self) -> ObjectType;

    /// The type-specific body, without the `<kind> <len>\0` header
    fn payload(&self) -> Result<Bytes>;

    /// Canonical encoding: header followed by payload
    fn serialize(&self) -> Result<Bytes> {
        let payload = self.payload()?;
        let header = self.object_type().header(payload.len());

        let mut object_bytes = Vec::with_capacity(header.len() + payload.len());
        object_bytes.extend_from_slice(header.as_bytes());
        object_bytes.extend_from_slice(&payload);

        Ok(object_bytes.into())
    }

    fn object_id(&self) -> Result<ObjectId> {
        Ok(digest(&self.serialize()?))
    }
}

/// Rebuild an object from its payload (header already stripped)
pub trait Unpackable {
    fn deserialize(payload: &[u8]) -> Result<Self>
    where
        Self: Sized;
}
