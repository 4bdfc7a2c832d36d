//! Minimal key-file codec.
//!
//! Key files are the INI dialect used by desktop entries and by the legacy
//! dock configuration:
//!
//! ```text
//! # comment
//! [Group]
//! Key=value
//! List=first;second;
//! ```
//!
//! Parsing keeps every comment, blank line and entry in its original position
//! so that a load/modify/save cycle only changes the keys that were set.

use crate::core::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// Blank line or comment, written back verbatim.
    Raw(String),
    Entry {
        key: String,
        value: String,
        /// Original text, cleared once the value is changed.
        raw: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Group {
    name: String,
    lines: Vec<Line>,
}

impl Group {
    fn value(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }
}

/// An ordered key-file document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFile {
    preamble: Vec<String>,
    groups: Vec<Group>,
}

impl KeyFile {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parses a key file.
    ///
    /// Repeated group headers are merged into the first group of that name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyFile`] for a line that is neither a comment, a group
    /// header, nor a `key=value` pair, and for entries before the first group.
    pub fn parse(content: &str) -> Result<Self> {
        let mut doc = Self::new();
        let mut current: Option<usize> = None;

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                match current {
                    Some(group) => doc.groups[group].lines.push(Line::Raw(raw.to_string())),
                    None => doc.preamble.push(raw.to_string()),
                }
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| Error::key_file(line_no, "unterminated group header"))?;
                if name.is_empty() || name.contains(['[', ']']) {
                    return Err(Error::key_file(line_no, format!("invalid group name '{name}'")));
                }
                current = Some(doc.group_index(name).unwrap_or_else(|| {
                    doc.groups.push(Group { name: name.to_string(), lines: Vec::new() });
                    doc.groups.len() - 1
                }));
                continue;
            }

            let Some((key, value)) = raw.split_once('=') else {
                return Err(Error::key_file(line_no, "expected group header, key=value, or comment"));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(Error::key_file(line_no, "empty key"));
            }
            let Some(group) = current else {
                return Err(Error::key_file(line_no, format!("key '{key}' outside of any group")));
            };

            doc.groups[group].lines.push(Line::Entry {
                key: key.to_string(),
                value: value.trim().to_string(),
                raw: Some(raw.to_string()),
            });
        }

        Ok(doc)
    }

    fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// Group names in document order.
    pub fn groups(&self) -> impl Iterator<Item = &str> { self.groups.iter().map(|g| g.name.as_str()) }

    /// Raw (still escaped) value of `key` in `group`.
    #[must_use]
    pub fn get_value(&self, group: &str, key: &str) -> Option<&str> {
        self.group_index(group).and_then(|idx| self.groups[idx].value(key))
    }

    /// Unescaped string value.
    #[must_use]
    pub fn get_string(&self, group: &str, key: &str) -> Option<String> {
        self.get_value(group, key).map(unescape)
    }

    /// `;`-separated list value. A trailing separator does not add an item.
    #[must_use]
    pub fn get_string_list(&self, group: &str, key: &str) -> Option<Vec<String>> {
        self.get_value(group, key).map(split_list)
    }

    /// Boolean value. Accepts `true`, `false`, `1` and `0`; anything else
    /// reads as `None`, the same as a missing key.
    #[must_use]
    pub fn get_boolean(&self, group: &str, key: &str) -> Option<bool> {
        match self.get_value(group, key)? {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Sets a string value, escaping it. Creates the group and key as needed.
    pub fn set_string(&mut self, group: &str, key: &str, value: &str) {
        self.set_value(group, key, escape(value));
    }

    /// Sets a boolean value. Creates the group and key as needed.
    pub fn set_boolean(&mut self, group: &str, key: &str, value: bool) {
        self.set_value(group, key, value.to_string());
    }

    fn set_value(&mut self, group: &str, key: &str, value: String) {
        let idx = self.group_index(group).unwrap_or_else(|| {
            self.groups.push(Group { name: group.to_string(), lines: Vec::new() });
            self.groups.len() - 1
        });
        let lines = &mut self.groups[idx].lines;

        let existing = lines.iter_mut().find_map(|line| match line {
            Line::Entry { key: k, value: v, raw } if k == key => Some((v, raw)),
            _ => None,
        });
        if let Some((v, raw)) = existing {
            *v = value;
            *raw = None;
            return;
        }

        // New keys go after the last entry so trailing comments stay trailing.
        let insert_at = lines
            .iter()
            .rposition(|line| matches!(line, Line::Entry { .. }))
            .map_or(0, |pos| pos + 1);
        lines.insert(insert_at, Line::Entry {
            key: key.to_string(),
            value,
            raw: None,
        });
    }

    /// Serializes the document.
    #[must_use]
    pub fn to_data(&self) -> String {
        let mut out = String::new();
        for line in &self.preamble {
            out.push_str(line);
            out.push('\n');
        }
        for group in &self.groups {
            out.push('[');
            out.push_str(&group.name);
            out.push_str("]\n");
            for line in &group.lines {
                match line {
                    Line::Raw(text) | Line::Entry { raw: Some(text), .. } => out.push_str(text),
                    Line::Entry { key, value, raw: None } => {
                        out.push_str(key);
                        out.push('=');
                        out.push_str(value);
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

fn unescape_char(next: Option<char>, out: &mut String) {
    match next {
        Some('s') => out.push(' '),
        Some('n') => out.push('\n'),
        Some('t') => out.push('\t'),
        Some('r') => out.push('\r'),
        Some(other) => out.push(other),
        None => out.push('\\'),
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            unescape_char(chars.next(), &mut out);
        } else {
            out.push(c);
        }
    }
    out
}

fn split_list(value: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescape_char(chars.next(), &mut current),
            ';' => items.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        items.push(current);
    }
    items
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for (idx, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            ' ' if idx == 0 => out.push_str("\\s"),
            _ => out.push(c),
        }
    }
    out
}
