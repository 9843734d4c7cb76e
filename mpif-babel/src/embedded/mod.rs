//! Embedded tagged-text blocks
//!
//!     MPIF documents carry two self-contained sub-documents inside free-text blocks: the
//!     crystallographic-properties block of the product ([`cif`]) and the adsorption-isotherm
//!     block of the characterization ([`aif`]). The two-column pxrd and tga blocks of the
//!     outer document use the same grammar.
//!
//!     All of them share one line grammar, read here by [`scan`]:
//!
//!         data_<name>                 block name
//!         _tag   value                scalar (value may sit alone on the following line)
//!         loop_                       start of a table
//!         _header_a                   table headers, one per line
//!         _header_b
//!         v1  v2                      rows, whitespace separated
//!
//!     The scanner is a three-state machine: seeking the next item, reading loop headers,
//!     reading loop rows. Rows end at the next tag, `loop_`, `data_`, comment, blank line, lone
//!     `;` or end of input, and the scanner returns to seeking.
//!
//!     Interpretation of the items (which tags are properties, which loops hold which data) is
//!     left to the block codecs.

pub mod aif;
pub mod cif;

pub use aif::{decode_aif, decode_aif_with_warnings, encode_aif};
pub use cif::{decode_cif, encode_cif};

/// One structural item of a tagged-text block.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<'a> {
    /// `data_<name>`
    DataName(&'a str),
    /// A scalar tag line; `raw` is the whole trimmed line.
    Tag {
        tag: &'a str,
        value: &'a str,
        raw: &'a str,
    },
    /// A loop table.
    Loop(LoopTable<'a>),
}

/// Headers and whitespace-split rows of one `loop_` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopTable<'a> {
    pub headers: Vec<&'a str>,
    pub rows: Vec<Vec<&'a str>>,
}

impl LoopTable<'_> {
    /// Whether any header contains `needle`.
    pub fn has_header_containing(&self, needle: &str) -> bool {
        self.headers.iter().any(|h| h.contains(needle))
    }
}

enum State {
    Seeking,
    Headers,
    Rows,
}

/// Split a block into its items.
pub fn scan(text: &str) -> Vec<Item<'_>> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut items = Vec::new();
    let mut state = State::Seeking;
    let mut table = LoopTable::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        match state {
            State::Seeking => {
                if let Some(name) = line.strip_prefix("data_") {
                    items.push(Item::DataName(name.trim()));
                } else if line == "loop_" {
                    state = State::Headers;
                } else if line.starts_with('_') {
                    let (tag, value) = split_tag(line);
                    let value = if value.is_empty() && is_plain_line(lines.get(i + 1)) {
                        i += 1;
                        lines[i]
                    } else {
                        value
                    };
                    items.push(Item::Tag {
                        tag,
                        value,
                        raw: line,
                    });
                }
                i += 1;
            }
            State::Headers => {
                if line.starts_with('_') {
                    table.headers.push(line);
                    i += 1;
                } else {
                    state = State::Rows;
                }
            }
            State::Rows => {
                if ends_rows(line) {
                    items.push(Item::Loop(std::mem::take(&mut table)));
                    state = State::Seeking;
                } else {
                    table.rows.push(line.split_whitespace().collect());
                    i += 1;
                }
            }
        }
    }

    if !matches!(state, State::Seeking) {
        items.push(Item::Loop(table));
    }

    items
}

/// Split `_tag<whitespace>value` at the first whitespace run.
fn split_tag(line: &str) -> (&str, &str) {
    match line.find(char::is_whitespace) {
        Some(at) => (&line[..at], line[at..].trim()),
        None => (line, ""),
    }
}

/// A line that can serve as the detached value of a preceding tag.
fn is_plain_line(line: Option<&&str>) -> bool {
    match line {
        Some(line) => {
            !line.is_empty()
                && !line.starts_with('_')
                && !line.starts_with('#')
                && !line.starts_with("data_")
                && *line != "loop_"
                && *line != ";"
        }
        None => false,
    }
}

/// Whether `line` closes the rows of a loop.
pub(crate) fn ends_rows(line: &str) -> bool {
    line.is_empty()
        || line == ";"
        || line == "loop_"
        || line.starts_with('_')
        || line.starts_with('#')
        || line.starts_with("data_")
}
