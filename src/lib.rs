//! A content-addressable object store in git's loose object format
//!
//! Blobs, trees and commits are framed as `<kind> <len>\0<payload>`, hashed
//! with SHA-1, zlib-compressed and written to `<objects>/<xx>/<yyyy...>`.
//!
//! ```no_run
//! use bit_store::areas::database::Database;
//! use bit_store::artifacts::objects::blob::Blob;
//!
//! let database = Database::open(".git/objects");
//! let oid = database.store(&Blob::new("Hello World\n"))?;
//! assert_eq!(oid.as_ref(), "557db03de997c86a4a028e1ebd3a1ceb225be238");
//! # Ok::<(), bit_store::error::ObjectError>(())
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
pub mod logging;
