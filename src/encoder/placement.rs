//! Codeword placement into the QR code matrix
use crate::models::{MaskPattern, ModuleGrid};

/// Fill every unset module with codeword bits, following the zigzag pattern
///
/// Column pairs are walked from the right edge, alternating upward and
/// downward and skipping the vertical timing column. Bits are taken MSB
/// first; once the codewords run out the remaining modules get light
/// bits. Each bit is inverted where `mask` says so.
pub fn map_data(grid: &mut ModuleGrid, codewords: &[u8], mask: MaskPattern) {
    let dimension = grid.size();
    let mut bit_index = 0usize;

    let mut upward = true;
    let mut col = dimension as isize - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
        }

        for step in 0..dimension {
            let row = if upward { dimension - 1 - step } else { step };
            for c in [col as usize, col as usize - 1] {
                if grid.is_set(row, c) {
                    continue;
                }
                let byte = codewords.get(bit_index / 8).copied().unwrap_or(0);
                let mut dark = (byte >> (7 - bit_index % 8)) & 1 == 1;
                if mask.is_masked(row, c) {
                    dark = !dark;
                }
                grid.set(row, c, dark);
                bit_index += 1;
            }
        }

        upward = !upward;
        col -= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::build_function_patterns;
    use crate::models::{ECLevel, Version};

    fn base_grid() -> ModuleGrid {
        build_function_patterns(
            Version::new(1).unwrap(),
            ECLevel::M,
            MaskPattern::Pattern0,
            true,
        )
    }

    #[test]
    fn test_fills_every_module() {
        let mut grid = base_grid();
        map_data(&mut grid, &[0xFF; 26], MaskPattern::Pattern1);
        for r in 0..21 {
            for c in 0..21 {
                assert!(grid.is_set(r, c), "({r}, {c}) left unset");
            }
        }
    }

    #[test]
    fn test_first_bits_at_bottom_right() {
        // Bits 1,0,1,0 land on (20,20), (20,19), (19,20), (19,19);
        // pattern 1 inverts even rows only
        let mut grid = base_grid();
        map_data(&mut grid, &[0b1010_0000], MaskPattern::Pattern1);
        assert!(!grid.is_dark(20, 20));
        assert!(grid.is_dark(20, 19));
        assert!(grid.is_dark(19, 20));
        assert!(!grid.is_dark(19, 19));
    }

    #[test]
    fn test_function_modules_untouched() {
        let base = base_grid();
        let mut grid = base.clone();
        map_data(&mut grid, &[0xAA; 26], MaskPattern::Pattern3);
        for r in 0..21 {
            for c in 0..21 {
                if base.is_set(r, c) {
                    assert_eq!(grid.get(r, c), base.get(r, c));
                }
            }
        }
    }

    #[test]
    fn test_missing_codewords_map_to_light_before_mask() {
        let mut grid = base_grid();
        map_data(&mut grid, &[], MaskPattern::Pattern0);
        // With all-zero data, every data module equals its mask bit
        let base = base_grid();
        for r in 0..21 {
            for c in 0..21 {
                if !base.is_set(r, c) {
                    assert_eq!(grid.is_dark(r, c), MaskPattern::Pattern0.is_masked(r, c));
                }
            }
        }
    }
}
