use crate::error::{ObjectError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// The `<kind> <len>\0` prefix of a canonical encoding
    pub fn header(&self, payload_len: usize) -> String {
        format!("{} {}\0", self.as_str(), payload_len)
    }

    /// Split a canonical encoding into its type and payload
    ///
    /// The declared length must match the number of payload bytes that follow
    /// the header, otherwise the object is reported as corrupt.
    pub fn parse_header(data: &[u8]) -> Result<(ObjectType, &[u8])> {
        let nul = data
            .iter()
            .position(|&b| b == b'\0')
            .ok_or_else(|| ObjectError::CorruptObject("missing header terminator".into()))?;
        let (header, payload) = (&data[..nul], &data[nul + 1..]);

        let header = std::str::from_utf8(header)
            .map_err(|_| ObjectError::CorruptObject("header is not ASCII".into()))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| ObjectError::CorruptObject(format!("malformed header {header:?}")))?;

        let object_type = ObjectType::try_from(kind)?;
        let size = size
            .parse::<usize>()
            .map_err(|_| ObjectError::CorruptObject(format!("invalid object size {size:?}")))?;

        if size != payload.len() {
            return Err(ObjectError::CorruptObject(format!(
                "{object_type} declares {size} bytes but holds {}",
                payload.len()
            )));
        }

        Ok((object_type, payload))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = ObjectError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(ObjectError::CorruptObject(format!(
                "unknown object type {value:?}"
            ))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
