use std::collections::BTreeMap;

/// One data line of the uploaded file, keyed by header name.
///
/// The expected keys are `product_code` and `new_price`, but the intake keeps
/// whatever columns the file declares so the shape check can report them.
pub type RawRow = BTreeMap<String, String>;

/// In-memory result of reading a user-selected CSV file.
///
/// A `ParsedFile` lives for a single upload/validate/update cycle. It is
/// produced by `intake::read_price_file` and held by the `Workflow` until the
/// next file pick or a successful update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedFile {
    /// Header cells in file order, trimmed.
    pub headers: Vec<String>,
    /// Data rows in file order. Empty for a header-only file.
    pub data: Vec<RawRow>,
}

impl ParsedFile {
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Exact, case-sensitive header lookup.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}
