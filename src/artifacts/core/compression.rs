//! zlib compressor
//!
//! Objects are stored zlib-compressed so that stock git tooling can read them.

use crate::error::{ObjectError, Result};
use bytes::Bytes;
use std::io::{Read, Write};

pub fn compress(data: &[u8]) -> Result<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;

    Ok(encoder.finish()?.into())
}

/// Inflate zlib data, reporting malformed input as [`ObjectError::CorruptObject`].
pub fn decompress(data: &[u8]) -> Result<Bytes> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| ObjectError::CorruptObject(format!("unable to decompress: {e}")))?;

    Ok(decompressed.into())
}
