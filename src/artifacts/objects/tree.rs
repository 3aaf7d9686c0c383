//! Tree object
//!
//! Trees represent directory snapshots. They list files (blobs) and
//! subdirectories (other trees) together with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<entries>`
//! Each entry: `<mode> <name>\0<20-byte-sha1>`
//!
//! ## Ordering
//!
//! Entries are kept sorted by name, where a directory compares as if its name
//! ended in `/`. This is the order git itself writes, so two trees with the
//! same entries always encode to the same bytes.

use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::{ObjectError, Result};
use bytes::Bytes;
use std::cmp::Ordering;
use std::io::{BufRead, Write};

/// A single named reference inside a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: EntryMode,
    name: String,
    oid: ObjectId,
}

impl TreeEntry {
    pub fn new(mode: EntryMode, name: impl Into<String>, oid: ObjectId) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        Ok(TreeEntry { mode, name, oid })
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    fn validate_name(name: &str) -> Result<()> {
        let reason = if name.is_empty() {
            "name is empty"
        } else if name == "." || name == ".." {
            "name is a relative path component"
        } else if name.contains('/') {
            "name contains a path separator"
        } else if name.contains('\0') {
            "name contains a NUL byte"
        } else {
            return Ok(());
        };

        Err(ObjectError::InvalidEntryName {
            name: name.to_string(),
            reason,
        })
    }

    fn cmp_by_name(&self, other: &Self) -> Ordering {
        let suffix = |entry: &TreeEntry| -> &'static [u8] {
            if entry.mode.is_tree() { b"/".as_slice() } else { b"".as_slice() }
        };

        self.name
            .as_bytes()
            .iter()
            .chain(suffix(self))
            .cmp(other.name.as_bytes().iter().chain(suffix(other)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn from_entries(entries: impl IntoIterator<Item = TreeEntry>) -> Result<Self> {
        let mut tree = Self::default();
        for entry in entries {
            tree.add_entry(entry)?;
        }

        Ok(tree)
    }

    /// Insert an entry at its sorted position
    pub fn add_entry(&mut self, entry: TreeEntry) -> Result<()> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(ObjectError::DuplicateEntry(entry.name));
        }

        let position = self
            .entries
            .binary_search_by(|e| e.cmp_by_name(&entry))
            .unwrap_or_else(|position| position);
        self.entries.insert(position, entry);

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn payload(&self) -> Result<Bytes> {
        let mut content_bytes = Vec::new();

        for entry in &self.entries {
            write!(content_bytes, "{} {}", entry.mode, entry.name)?;
            content_bytes.push(0);
            entry.oid.write_raw_to(&mut content_bytes)?;
        }

        Ok(content_bytes.into())
    }
}

impl Unpackable for Tree {
    fn deserialize(payload: &[u8]) -> Result<Self> {
        let corrupt = |what: &str| ObjectError::CorruptObject(format!("tree: {what}"));
        let mut reader = payload;
        let mut tree = Tree::default();

        // Reuse scratch buffers to reduce allocs
        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break;
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(corrupt("unexpected end of entry mode"));
            }
            let mode = std::str::from_utf8(&mode_bytes).map_err(|_| corrupt("mode is not ASCII"))?;
            let mode = EntryMode::try_from(mode)?;

            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(corrupt("unexpected end of entry name"));
            }
            let name = String::from_utf8(name_bytes.clone())
                .map_err(|_| corrupt("entry name is not UTF-8"))?;

            let oid = ObjectId::read_raw_from(&mut reader)
                .map_err(|_| corrupt("unexpected end of object id"))?;

            let entry = TreeEntry::new(mode, name, oid)?;
            if let Some(previous) = tree.entries.last() {
                if previous.name == entry.name {
                    return Err(corrupt("duplicate entry name"));
                }
                if previous.cmp_by_name(&entry) != Ordering::Less {
                    return Err(corrupt("entries are not in canonical order"));
                }
            }
            tree.entries.push(entry);
        }

        Ok(tree)
    }
}
