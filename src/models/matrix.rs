/// Square grid of tri-state modules (unset / light / dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Option<bool>>,
}

impl ModuleGrid {
    /// Create a grid with every module unset
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module state at (row, col); `None` when unset or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// True for dark modules; unset and out-of-bounds read as light
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Whether a structural or data module has been written here
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row * self.size + col].is_some()
    }

    /// Set module at (row, col)
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row >= self.size || col >= self.size {
            return;
        }
        self.cells[row * self.size + col] = Some(dark);
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Some(true)).count()
    }

    /// Rows of dark flags, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        self.cells
            .chunks(self.size.max(1))
            .take(self.size)
            .map(|row| row.iter().map(|c| c.unwrap_or(false)).collect())
    }
}

impl Default for ModuleGrid {
    fn default() -> Self {
        Self::new(0)
    }
}
