//! Rewrites literal marker cells in a model-produced quiz table.
//!
//! The model often spells booleans and blanks the way a scripting language
//! would print them. Only cells whose whole trimmed value is one of those
//! markers are rewritten; everything else is passed through untouched.

pub const ROW_SEPARATOR: char = '\n';
pub const CELL_SEPARATOR: char = '\t';

/// Marker values recognised as a whole cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellToken {
    True,
    False,
    Null,
    Undefined,
}

impl CellToken {
    pub const ALL: [CellToken; 4] = [
        CellToken::True,
        CellToken::False,
        CellToken::Null,
        CellToken::Undefined,
    ];

    pub fn literal(self) -> &'static str {
        match self {
            CellToken::True => "true",
            CellToken::False => "false",
            CellToken::Null => "null",
            CellToken::Undefined => "undefined",
        }
    }

    pub fn replacement(self) -> &'static str {
        match self {
            CellToken::True => "1",
            CellToken::False => "0",
            CellToken::Null | CellToken::Undefined => "",
        }
    }

    /// Exact, case-sensitive match against the trimmed cell.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let trimmed = cell.trim();
        Self::ALL.into_iter().find(|t| t.literal() == trimmed)
    }
}

pub fn normalize_cell(cell: &str) -> &str {
    match CellToken::from_cell(cell) {
        Some(token) => token.replacement(),
        None => cell,
    }
}

/// Trailing whitespace is dropped before splitting, except tabs: a trailing
/// tab delimits an empty last cell and must survive.
pub fn normalize_quiz_text(raw: &str) -> String {
    let trimmed = raw.trim_end_matches(|c: char| c.is_whitespace() && c != CELL_SEPARATOR);
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len());
    for (row_idx, row) in trimmed.split(ROW_SEPARATOR).enumerate() {
        if row_idx > 0 {
            out.push(ROW_SEPARATOR);
        }
        for (cell_idx, cell) in row.split(CELL_SEPARATOR).enumerate() {
            if cell_idx > 0 {
                out.push(CELL_SEPARATOR);
            }
            out.push_str(normalize_cell(cell));
        }
    }
    out
}
