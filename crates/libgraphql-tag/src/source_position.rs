/// Source position information produced by the lexer, with dual column
/// tracking.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: UTF-8 character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// For ASCII text both columns are equal. For characters outside the Basic
/// Multilingual Plane (e.g. emoji) `col_utf8` advances by 1 while `col_utf16`
/// advances by 2.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Convert to a [`graphql_parser::Pos`].
    ///
    /// Note: `graphql_parser::Pos` uses 1-based line and column numbers, so
    /// this method adds 1 to both. The column is always derived from
    /// `col_utf8`.
    pub fn to_ast_pos(&self) -> graphql_parser::Pos {
        graphql_parser::Pos {
            line: self.line + 1,
            column: self.col_utf8 + 1,
        }
    }
}
