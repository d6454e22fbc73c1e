#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Location {
    pub column: usize,
}

impl Location {
    pub(super) fn new(column: usize) -> Self {
        Self { column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "column {}", self.column)
    }
}
