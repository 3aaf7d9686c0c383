//! Blob object
//!
//! Blobs store file content. They contain only the raw bytes, without any
//! metadata like filename or permissions (those live in trees).
//!
//! ## Format
//!
//! `blob <size>\0<content>`

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::Result;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn new(content: impl Into<Bytes>) -> Self {
        Blob {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn payload(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hello_world_blob_has_a_twelve_byte_header() {
        let blob = Blob::new("Hello World\n");
        let encoded = blob.serialize().unwrap();

        assert!(encoded.starts_with(b"blob 12\0"));
        assert_eq!(&encoded[8..], b"Hello World\n");
    }

    #[test]
    fn hello_world_blob_matches_the_git_digest() {
        let blob = Blob::new("Hello World\n");

        assert_eq!(
            blob.object_id().unwrap().as_ref(),
            "557db03de997c86a4a028e1ebd3a1ceb225be238"
        );
    }

    #[test]
    fn empty_blob_matches_the_git_digest() {
        let blob = Blob::new(Bytes::new());

        assert_eq!(
            blob.object_id().unwrap().as_ref(),
            "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391"
        );
    }

    #[test]
    fn content_is_not_normalized() {
        let blob = Blob::new(b"no trailing newline\r".to_vec());

        assert_eq!(blob.payload().unwrap().as_ref(), b"no trailing newline\r");
    }

    #[test]
    fn binary_content_with_nul_bytes_is_kept_verbatim() {
        let content = vec![0u8, 159, 146, 150, 0];
        let blob = Blob::new(content.clone());
        let encoded = blob.serialize().unwrap();

        assert_eq!(&encoded[..7], b"blob 5\0");
        assert_eq!(&encoded[7..], content.as_slice());
    }
}
