//! Object types and their canonical encoding
//!
//! Every record in the store is one of three kinds:
//!
//! - **Blob**: File content (raw bytes)
//! - **Tree**: Directory listing (names, modes, and object IDs)
//! - **Commit**: Snapshot with metadata (tree, parent, author, message)
//!
//! All objects share the framing `<type> <size>\0<content>` and are addressed
//! by the SHA-1 of that framed form.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
