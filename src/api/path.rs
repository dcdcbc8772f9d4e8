//! Field paths into a parsed JSON body: `status`, `user.id`, `orders[0].qty`, `[2]`.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member
    Key(String),
    /// Array element
    Index(usize),
}

/// A parsed dotted/bracketed path. The empty path addresses the root value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field path '{path}': {reason}")]
pub struct InvalidFieldPath {
    pub path: String,
    pub reason: &'static str,
}

impl FieldPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolve against `root`. `None` when any segment is missing or the
    /// intermediate value has the wrong shape.
    pub fn lookup<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| match segment {
                Segment::Key(key) => current.get(key.as_str()),
                Segment::Index(index) => current.get(*index),
            })
    }
}

impl FromStr for FieldPath {
    type Err = InvalidFieldPath;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| InvalidFieldPath {
            path: path.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        if path.is_empty() {
            return Ok(Self { segments });
        }

        for part in path.split('.') {
            if part.is_empty() {
                return Err(invalid("empty segment"));
            }

            let (key, mut rest) = match part.find('[') {
                Some(i) => part.split_at(i),
                None => (part, ""),
            };
            if !key.is_empty() {
                segments.push(Segment::Key(key.to_string()));
            }

            while !rest.is_empty() {
                let inner = rest
                    .strip_prefix('[')
                    .ok_or_else(|| invalid("unexpected text after ']'"))?;
                let (index, tail) = inner
                    .split_once(']')
                    .ok_or_else(|| invalid("unclosed '['"))?;
                let index = index
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| invalid("index must be a non-negative integer"))?;
                segments.push(Segment::Index(index));
                rest = tail;
            }
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}
