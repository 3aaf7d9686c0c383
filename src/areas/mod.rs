//! Repository components
//!
//! - `database`: Object database pipeline (encode, hash, compress, store)
//! - `repository`: Entry point tying the database to a working directory
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod repository;
pub mod workspace;
