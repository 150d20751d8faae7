use crate::Record;

/// Rows of one dataset in file order. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First `min(k, len)` rows
    pub fn head(&self, k: usize) -> &[R] {
        &self.rows[..k.min(self.rows.len())]
    }

    /// Project a numeric column over all rows
    pub fn column(&self, f: impl Fn(&R) -> f64) -> Vec<f64> {
        self.rows.iter().map(f).collect()
    }

    /// Project a numeric column over the first `k` rows
    pub fn head_column(&self, k: usize, f: impl Fn(&R) -> f64) -> Vec<f64> {
        self.head(k).iter().map(f).collect()
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}
