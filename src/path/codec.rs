//! Flat key encoding and decoding
//!
//! Grammar:
//!
//! ```text
//! key     := segment ("." segment)*
//! segment := name ("[" digits "]")*
//! name    := any text without "." or "["
//! digits  := "0" | [1-9][0-9]*
//! ```
//!
//! A key step renders its name, preceded by `.` when anything has been
//! rendered before it. An index step renders `[i]` with no separator, so
//! `[Key("cars"), Index(0), Key("name")]` encodes to `cars[0].name`.
//!
//! Names containing `.` or `[` cannot be represented. They are rendered
//! verbatim and do not decode back to the same path.
//!
//! Every decoded path starts with a key step. A key beginning with `[` has an
//! empty first name, so `[0].a` decodes to `[Key(""), Index(0), Key("a")]`
//! and a path that starts with an index step does not round trip.

use super::errors::{PathError, PathResult};
use super::step::{Path, Step};

/// How index steps are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// `cars[0].name`
    #[default]
    Bracketed,
    /// `cars.0.name`, `.` as the only separator (key-value store form)
    Dotted,
}

/// Encoder/decoder between `Path` and flat keys
pub struct PathCodec;

impl PathCodec {
    /// Encodes steps as a bracketed flat key.
    pub fn encode(steps: &[Step]) -> String {
        Self::encode_with_prefix("", steps, KeyStyle::Bracketed)
    }

    /// Encodes steps after an already-rendered `prefix`.
    pub fn encode_with_prefix(prefix: &str, steps: &[Step], style: KeyStyle) -> String {
        let mut key = String::with_capacity(prefix.len() + steps.len() * 8);
        key.push_str(prefix);

        let mut leading = prefix.is_empty();
        for step in steps {
            Self::append_step(&mut key, step, leading, style);
            leading = false;
        }
        key
    }

    /// Appends one step. `leading` is true when nothing has been rendered yet.
    pub fn append_step(key: &mut String, step: &Step, leading: bool, style: KeyStyle) {
        match step {
            Step::Key(name) => Self::append_key(key, name, leading),
            Step::Index(index) => Self::append_index(key, *index, leading, style),
        }
    }

    /// Appends a key step.
    pub fn append_key(key: &mut String, name: &str, leading: bool) {
        if !leading {
            key.push('.');
        }
        key.push_str(name);
    }

    /// Appends an index step.
    pub fn append_index(key: &mut String, index: usize, leading: bool, style: KeyStyle) {
        match style {
            KeyStyle::Bracketed => {
                key.push('[');
                key.push_str(&index.to_string());
                key.push(']');
            }
            KeyStyle::Dotted => {
                if !leading {
                    key.push('.');
                }
                key.push_str(&index.to_string());
            }
        }
    }

    /// Decodes a bracketed flat key.
    ///
    /// # Errors
    ///
    /// Returns `PathError` for unbalanced brackets, empty or non-numeric
    /// indices, leading zeros, indices that overflow `usize`, and any text
    /// following a closing bracket inside a dot-segment.
    pub fn decode(key: &str) -> PathResult<Path> {
        let mut steps = Vec::new();
        let mut offset = 0;

        for segment in key.split('.') {
            let (name, brackets) = match segment.find('[') {
                Some(at) => segment.split_at(at),
                None => (segment, ""),
            };

            steps.push(Step::Key(name.to_string()));

            Self::decode_indices(key, brackets, offset + name.len(), &mut steps)?;
            offset += segment.len() + 1;
        }

        Ok(Path::new(steps))
    }

    /// Decodes the trailing `[i][j]...` groups of one dot-segment.
    fn decode_indices(
        key: &str,
        mut rest: &str,
        mut position: usize,
        steps: &mut Vec<Step>,
    ) -> PathResult<()> {
        while !rest.is_empty() {
            let Some(body) = rest.strip_prefix('[') else {
                return Err(PathError::UnexpectedCharacter {
                    key: key.to_string(),
                    found: rest.chars().next().unwrap_or_default(),
                    position,
                });
            };

            let close = body.find(']').ok_or_else(|| PathError::UnclosedBracket {
                key: key.to_string(),
                position,
            })?;

            let index = Self::parse_index(key, &body[..close], position)?;
            steps.push(Step::Index(index));

            rest = &body[close + 1..];
            position += close + 2;
        }
        Ok(())
    }

    fn parse_index(key: &str, digits: &str, position: usize) -> PathResult<usize> {
        if digits.is_empty() {
            return Err(PathError::EmptyIndex {
                key: key.to_string(),
                position,
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::NonNumericIndex {
                key: key.to_string(),
                index: digits.to_string(),
                position,
            });
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(PathError::LeadingZero {
                key: key.to_string(),
                index: digits.to_string(),
                position,
            });
        }
        digits.parse::<usize>().map_err(|_| PathError::IndexOverflow {
            key: key.to_string(),
            index: digits.to_string(),
            position,
        })
    }
}
