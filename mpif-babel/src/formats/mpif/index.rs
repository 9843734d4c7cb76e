//! Tag index over the lines of an MPIF document
//!
//!     Field lookup in MPIF is by tag prefix: a field is found on the first line (in document
//!     order) that starts with its tag. Rather than rescanning the whole document for every
//!     field, the index is built once, keyed by the leading token of every line. A prefix
//!     lookup is then a range scan over the sorted keys, merged back into line order.

use super::tags::TEXT_DELIMITER;
use crate::values::unquote;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Trimmed document lines plus a leading-token → line positions map.
pub struct TagIndex<'a> {
    lines: Vec<&'a str>,
    by_token: BTreeMap<String, Vec<usize>>,
}

impl<'a> TagIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
        let mut by_token: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, line) in lines.iter().enumerate() {
            let token = line.split(char::is_whitespace).next().unwrap_or_default();
            if token.is_empty() {
                continue;
            }
            by_token.entry(token.to_string()).or_default().push(position);
        }
        Self { lines, by_token }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line(&self, position: usize) -> Option<&'a str> {
        self.lines.get(position).copied()
    }

    /// Positions of every line starting with `prefix`, in document order.
    pub fn positions(&self, prefix: &str) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .by_token
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(token, _)| token.starts_with(prefix))
            .flat_map(|(_, found)| found.iter().copied())
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Position of the first line starting with `prefix`.
    pub fn first_line(&self, prefix: &str) -> Option<usize> {
        self.positions(prefix).into_iter().next()
    }

    /// Value after the first tab of the first matching line that has one, quotes stripped.
    pub fn find_value(&self, tag: &str) -> Option<&'a str> {
        self.find_entry(tag).map(|(_, value)| value)
    }

    /// Like [`TagIndex::find_value`], also returning the full tag the value was found under.
    pub fn find_entry(&self, tag: &str) -> Option<(&'a str, &'a str)> {
        self.positions(tag).into_iter().find_map(|position| {
            let line = self.lines[position];
            line.split_once('\t')
                .map(|(found, value)| (found.trim(), unquote(value)))
        })
    }

    /// Free text between the pair of lone `;` lines following the first line starting with
    /// `tag`. Returns `None` when the tag is missing or the block holds no lines.
    pub fn text_block(&self, tag: &str) -> Option<String> {
        let start = self.first_line(tag)?;
        let mut content = Vec::new();
        let mut in_block = false;

        for line in &self.lines[start + 1..] {
            if *line == TEXT_DELIMITER {
                if in_block {
                    break;
                }
                in_block = true;
            } else if in_block {
                content.push(*line);
            }
        }

        if content.is_empty() {
            None
        } else {
            Some(content.join("\n"))
        }
    }
}
