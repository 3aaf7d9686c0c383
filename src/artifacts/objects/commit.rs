//! Commit object
//!
//! Commits record a snapshot of the repository at a point in time. They
//! contain:
//! - A tree object ID (directory snapshot)
//! - At most one parent commit ID (history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <<email>> <timestamp> <timezone>
//! committer <name> <<email>> <timestamp> <timezone>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted entirely for a root commit.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::{ObjectError, Result};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};

/// Author or committer identity
///
/// Contains name, email, and a timestamp carrying its own timezone offset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: DateTime<FixedOffset>,
}

impl Author {
    /// Create a new author with the current local time
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(name: String, email: String, timestamp: DateTime<FixedOffset>) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Identity line as stored in the commit
    ///
    /// String in format "Name <email> <epoch-seconds> <+HHMM>"
    pub fn display(&self) -> String {
        format!(
            "{} <{}> {} {}",
            self.name,
            self.email,
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Load the author from `GIT_AUTHOR_NAME`, `GIT_AUTHOR_EMAIL` and optionally `GIT_AUTHOR_DATE`
    pub fn load_author_from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let name = std::env::var("GIT_AUTHOR_NAME").context("GIT_AUTHOR_NAME not set")?;
        let email = std::env::var("GIT_AUTHOR_EMAIL").context("GIT_AUTHOR_EMAIL not set")?;

        Self::with_env_date(name, email, "GIT_AUTHOR_DATE")
    }

    /// Load the committer from `GIT_COMMITTER_*`, falling back to the author
    /// for anything that is not set
    pub fn load_committer_from_env(author: &Author) -> anyhow::Result<Self> {
        let name = std::env::var("GIT_COMMITTER_NAME").unwrap_or_else(|_| author.name.clone());
        let email = std::env::var("GIT_COMMITTER_EMAIL").unwrap_or_else(|_| author.email.clone());

        match std::env::var("GIT_COMMITTER_DATE") {
            Ok(_) => Self::with_env_date(name, email, "GIT_COMMITTER_DATE"),
            Err(_) => Ok(Author::new_with_timestamp(name, email, author.timestamp)),
        }
    }

    fn with_env_date(name: String, email: String, date_var: &str) -> anyhow::Result<Self> {
        match std::env::var(date_var) {
            Ok(date_str) => {
                let timestamp = parse_date(&date_str)
                    .ok_or_else(|| anyhow::anyhow!("{date_var} has an unsupported format: {date_str}"))?;
                Ok(Author::new_with_timestamp(name, email, timestamp))
            }
            Err(_) => Ok(Author::new(name, email)),
        }
    }

    fn validate(&self, role: &str) -> Result<()> {
        let breaks_layout = |s: &str| s.contains(['<', '>', '\n', '\0']);

        if breaks_layout(&self.name) {
            return Err(ObjectError::Encoding(format!(
                "{role} name {:?} contains '<', '>', newline or NUL",
                self.name
            )));
        }
        if breaks_layout(&self.email) {
            return Err(ObjectError::Encoding(format!(
                "{role} email {:?} contains '<', '>', newline or NUL",
                self.email
            )));
        }

        Ok(())
    }
}

/// Parse a date in one of the formats git accepts in `GIT_*_DATE`
///
/// - RFC 2822 (`Mon, 1 Jan 2024 12:00:00 +0000`)
/// - ISO-like (`2024-01-01 12:00:00 +0000`)
/// - raw (`@1704110400 +0000` or `1704110400 +0000`)
pub fn parse_date(date_str: &str) -> Option<DateTime<FixedOffset>> {
    let date_str = date_str.trim();

    DateTime::parse_from_rfc2822(date_str)
        .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
        .ok()
        .or_else(|| {
            let (epoch, offset) = date_str.trim_start_matches('@').split_once(' ')?;
            let epoch = epoch.parse::<i64>().ok()?;
            let offset = DateTime::parse_from_str(&format!("1970-01-01 00:00:00 {offset}"), "%Y-%m-%d %H:%M:%S %z")
                .ok()?
                .offset()
                .to_owned();

            Some(DateTime::from_timestamp(epoch, 0)?.with_timezone(&offset))
        })
}

/// Commit object
///
/// References the tree representing the snapshot, an optional parent and the
/// people who wrote and recorded the change.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    /// Create a new commit
    ///
    /// The message is normalized to end with exactly one newline.
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        committer: Author,
        message: &str,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            author,
            committer,
            message: format!("{}\n", message.trim_end_matches('\n')),
        }
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn payload(&self) -> Result<Bytes> {
        self.author.validate("author")?;
        self.committer.validate("committer")?;
        if self.message.contains('\0') {
            return Err(ObjectError::Encoding(
                "commit message contains a NUL byte".into(),
            ));
        }

        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines.push(String::new());
        lines.push(self.message.clone());

        Ok(lines.join("\n").into())
    }
}
