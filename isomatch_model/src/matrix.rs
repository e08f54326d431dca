//! Symmetric weight table model.
//!
//! An n-by-n grid of weight-label strings. Symmetry is enforced at the
//! mutation boundary — every accepted edit is mirrored across the diagonal —
//! and the diagonal itself is locked empty, so the invariant can never be
//! merely "checked later".

use isomatch_common::MatrixData;

/// Editable n-by-n grid of weight labels.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WeightMatrix {
    cells: Vec<Vec<String>>,
}

impl WeightMatrix {
    /// Create an empty table of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut matrix = Self::default();
        matrix.resize(size);
        matrix
    }

    /// Current table size (rows == columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Resize to `size`-by-`size`.
    ///
    /// Cells whose `(r, c)` existed before are preserved; new cells start
    /// empty; resizing down discards out-of-range cells. The diagonal stays
    /// empty throughout.
    pub fn resize(&mut self, size: usize) {
        let mut cells = vec![vec![String::new(); size]; size];
        for (r, row) in self.cells.iter().enumerate().take(size) {
            for (c, cell) in row.iter().enumerate().take(size) {
                if r != c {
                    cells[r][c].clone_from(cell);
                }
            }
        }
        self.cells = cells;
        tracing::debug!("matrix resized to {size}x{size}");
    }

    /// Write `text` into `(r, c)` and mirror it into `(c, r)`.
    ///
    /// Diagonal and out-of-range writes are silent no-ops.
    pub fn set_cell(&mut self, r: usize, c: usize, text: &str) {
        if r == c || r >= self.size() || c >= self.size() {
            return;
        }
        self.cells[r][c] = text.to_string();
        self.cells[c][r] = text.to_string();
    }

    /// Read a single cell.
    #[must_use]
    pub fn cell(&self, r: usize, c: usize) -> Option<&str> {
        self.cells.get(r)?.get(c).map(String::as_str)
    }

    /// Full snapshot of the current cell text.
    #[must_use]
    pub fn data(&self) -> MatrixData {
        self.cells.clone()
    }

    /// Replace the grid wholesale, without the mirroring side effect.
    ///
    /// Used by the persistence layer, where the file is assumed already
    /// symmetric. Rows are padded or truncated to keep the grid square, and
    /// the diagonal is forced empty, so a hand-edited file cannot break the
    /// model invariants.
    pub fn load_data(&mut self, data: MatrixData) {
        let size = data.len();
        let mut cells = data;
        for (r, row) in cells.iter_mut().enumerate() {
            row.resize(size, String::new());
            row[r].clear();
        }
        self.cells = cells;
        tracing::debug!("matrix loaded: {size}x{size}");
    }
}
