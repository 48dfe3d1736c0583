//! Mask penalty scoring and best-mask selection
use crate::models::{MaskPattern, ModuleGrid};

/// Penalty of a fully rendered symbol, split by rule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PenaltyScore {
    /// Modules with more than five same-colored neighbors
    pub adjacent: u32,
    /// Single-colored 2x2 blocks
    pub blocks: u32,
    /// 1:1:3:1:1 finder-like runs in rows and columns
    pub finder_like: u32,
    /// Deviation of the dark ratio from 50%
    pub balance: f64,
}

impl PenaltyScore {
    /// Lower is better
    pub fn total(&self) -> f64 {
        (self.adjacent + self.blocks + self.finder_like) as f64 + self.balance
    }
}

const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Score a fully rendered grid against the four penalty rules
pub fn penalty_score(grid: &ModuleGrid) -> PenaltyScore {
    PenaltyScore {
        adjacent: adjacent_penalty(grid),
        blocks: block_penalty(grid),
        finder_like: finder_like_penalty(grid),
        balance: balance_penalty(grid),
    }
}

fn adjacent_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut penalty = 0;
    for row in 0..size {
        for col in 0..size {
            let dark = grid.is_dark(row, col);
            let mut same = 0;
            for r in row.saturating_sub(1)..=(row + 1).min(size - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(size - 1) {
                    if (r, c) != (row, col) && grid.is_dark(r, c) == dark {
                        same += 1;
                    }
                }
            }
            if same > 5 {
                penalty += 3 + (same - 5);
            }
        }
    }
    penalty
}

fn block_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut penalty = 0;
    for row in 0..size.saturating_sub(1) {
        for col in 0..size.saturating_sub(1) {
            let count = [(0, 0), (1, 0), (0, 1), (1, 1)]
                .iter()
                .filter(|&&(dr, dc)| grid.is_dark(row + dr, col + dc))
                .count();
            if count == 0 || count == 4 {
                penalty += 3;
            }
        }
    }
    penalty
}

fn finder_like_penalty(grid: &ModuleGrid) -> u32 {
    let size = grid.size();
    let mut penalty = 0;
    for line in 0..size {
        for start in 0..size.saturating_sub(6) {
            if (0..7).all(|k| grid.is_dark(line, start + k) == FINDER_LIKE[k]) {
                penalty += 40;
            }
            if (0..7).all(|k| grid.is_dark(start + k, line) == FINDER_LIKE[k]) {
                penalty += 40;
            }
        }
    }
    penalty
}

fn balance_penalty(grid: &ModuleGrid) -> f64 {
    let size = grid.size() as f64;
    if size == 0.0 {
        return 0.0;
    }
    let dark = grid.dark_count() as f64;
    let ratio = (100.0 * dark / size / size - 50.0).abs() / 5.0;
    ratio * 10.0
}

/// Lowest-penalty mask; ties go to the lowest pattern index
pub fn select_best_mask(scores: &[(MaskPattern, f64)]) -> Option<(MaskPattern, f64)> {
    let mut best: Option<(MaskPattern, f64)> = None;
    for &(mask, score) in scores {
        match best {
            Some((_, min)) if min <= score => {}
            _ => best = Some((mask, score)),
        }
    }
    best
}
