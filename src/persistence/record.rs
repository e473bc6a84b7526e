//! A single line of the board text format

use std::fmt;

use crate::consts::{FIELD_SEPARATOR, ITEM_MARKER};

/// One parsed line, borrowing from the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// `<image> <name...>`
    Category { image_loc: &'a str, name: &'a str },
    /// `><image> <text...>`
    Item { image_loc: &'a str, text: &'a str },
}

impl<'a> Record<'a> {
    /// Parse one line. A trailing `\r` and trailing separators are dropped.
    ///
    /// Returns `None` for a category line without an image location, which
    /// covers empty and blank lines. An item line may have an empty
    /// location; the category ignores it.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (head, rest) = match line.split_once(FIELD_SEPARATOR) {
            Some((head, rest)) => (head, rest.trim_end_matches(FIELD_SEPARATOR)),
            None => (line, ""),
        };

        if let Some(image_loc) = head.strip_prefix(ITEM_MARKER) {
            return Some(Record::Item {
                image_loc,
                text: rest,
            });
        }
        if head.is_empty() {
            return None;
        }
        Some(Record::Category {
            image_loc: head,
            name: rest,
        })
    }

    /// Why this record would not read back as written, if it would not.
    pub fn encoding_problem(&self) -> Option<&'static str> {
        let (image_loc, text) = match *self {
            Record::Category { image_loc, name } => (image_loc, name),
            Record::Item { image_loc, text } => (image_loc, text),
        };
        if image_loc.contains(FIELD_SEPARATOR) {
            return Some("image location contains a space");
        }
        if image_loc.contains(is_line_break) {
            return Some("image location contains a line break");
        }
        if matches!(self, Record::Category { .. }) && image_loc.starts_with(ITEM_MARKER) {
            return Some("category location starts with the item marker");
        }
        if text.contains(is_line_break) {
            return Some("text contains a line break");
        }
        if text.ends_with(FIELD_SEPARATOR) {
            return Some("text ends with a space");
        }
        None
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Category { image_loc, name } => {
                write!(f, "{}{}{}", image_loc, FIELD_SEPARATOR, name)
            }
            Record::Item { image_loc, text } => {
                write!(f, "{}{}{}{}", ITEM_MARKER, image_loc, FIELD_SEPARATOR, text)
            }
        }
    }
}
