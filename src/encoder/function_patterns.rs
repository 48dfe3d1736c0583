//! Structural (function) pattern placement
//!
//! Finder patterns with separators, alignment and timing patterns, format
//! info and version info. Everything here is written before data mapping;
//! the data mapper fills only the modules left unset.

use crate::encoder::bch::BchEncoder;
use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{ECLevel, MaskPattern, ModuleGrid, Version};

/// Build a grid holding every function pattern for `version`
///
/// With `placeholder` set, format and version info (and the fixed dark
/// module) are written light so every mask trial is scored on the same base.
pub fn build_function_patterns(
    version: Version,
    level: ECLevel,
    mask: MaskPattern,
    placeholder: bool,
) -> ModuleGrid {
    let size = version.size();
    let mut grid = ModuleGrid::new(size);

    place_finder_pattern(&mut grid, 0, 0);
    place_finder_pattern(&mut grid, size - 7, 0);
    place_finder_pattern(&mut grid, 0, size - 7);
    place_alignment_patterns(&mut grid, version);
    place_timing_patterns(&mut grid);
    place_format_info(&mut grid, level, mask, placeholder);
    if version.number() >= 7 {
        place_version_info(&mut grid, version, placeholder);
    }
    grid
}

/// 7x7 finder pattern with its light separator, clipped to the grid
fn place_finder_pattern(grid: &mut ModuleGrid, row: usize, col: usize) {
    let size = grid.size() as isize;
    for r in -1isize..=7 {
        let y = row as isize + r;
        if y < 0 || y >= size {
            continue;
        }
        for c in -1isize..=7 {
            let x = col as isize + c;
            if x < 0 || x >= size {
                continue;
            }
            let ring = ((0..=6).contains(&r) && (c == 0 || c == 6))
                || ((0..=6).contains(&c) && (r == 0 || r == 6));
            let center = (2..=4).contains(&r) && (2..=4).contains(&c);
            grid.set(y as usize, x as usize, ring || center);
        }
    }
}

/// 5x5 alignment patterns; any whose center is already taken is skipped
fn place_alignment_patterns(grid: &mut ModuleGrid, version: Version) {
    let positions = alignment_pattern_positions(version);
    for &row in positions {
        for &col in positions {
            if grid.is_set(row, col) {
                continue;
            }
            for r in -2isize..=2 {
                for c in -2isize..=2 {
                    let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                    grid.set(
                        (row as isize + r) as usize,
                        (col as isize + c) as usize,
                        dark,
                    );
                }
            }
        }
    }
}

/// Alternating row 6 / column 6 between the finder patterns
fn place_timing_patterns(grid: &mut ModuleGrid) {
    let size = grid.size();
    for i in 8..size - 8 {
        if !grid.is_set(i, 6) {
            grid.set(i, 6, i % 2 == 0);
        }
        if !grid.is_set(6, i) {
            grid.set(6, i, i % 2 == 0);
        }
    }
}

/// Two copies of the 15-bit format info plus the fixed dark module
fn place_format_info(grid: &mut ModuleGrid, level: ECLevel, mask: MaskPattern, placeholder: bool) {
    let size = grid.size();
    let bits = BchEncoder::format_bits(level, mask);
    let bit = |i: usize| !placeholder && (bits >> i) & 1 == 1;

    // Column 8: top-left going down, then bottom-left
    for i in 0..15 {
        let row = match i {
            0..=5 => i,
            6..=7 => i + 1,
            _ => size - 15 + i,
        };
        grid.set(row, 8, bit(i));
    }

    // Row 8: top-right going left, then top-left
    for i in 0..15 {
        let col = match i {
            0..=7 => size - i - 1,
            8 => 15 - i,
            _ => 15 - i - 1,
        };
        grid.set(8, col, bit(i));
    }

    grid.set(size - 8, 8, !placeholder);
}

/// 6x3 version info blocks beside the top-right and bottom-left finders
fn place_version_info(grid: &mut ModuleGrid, version: Version, placeholder: bool) {
    let size = grid.size();
    let bits = BchEncoder::version_bits(version);
    for i in 0..18 {
        let dark = !placeholder && (bits >> i) & 1 == 1;
        let a = i / 3;
        let b = i % 3 + size - 11;
        grid.set(a, b, dark);
        grid.set(b, a, dark);
    }
}
