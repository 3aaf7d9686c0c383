//! Command implementations
//!
//! Only plumbing commands exist: each builds one or more objects and writes
//! them to the object database, printing the resulting object ID.

pub mod plumbing;
