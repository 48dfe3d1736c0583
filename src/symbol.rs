//! QR symbol orchestration
//!
//! A [`Symbol`] collects segments, then `make` resolves the version, packs
//! the codewords, tries all eight masks and commits the best one.

use crate::encoder::assembler::{create_codewords, select_version};
use crate::encoder::config;
use crate::encoder::function_patterns::build_function_patterns;
use crate::encoder::mask::{penalty_score, select_best_mask};
use crate::encoder::modes::{Mode, Segment};
use crate::encoder::placement::map_data;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, ModuleGrid, Version};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Lifecycle of a [`Symbol`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    /// No data added and nothing made
    Empty,
    /// Segments changed since the last successful `make`
    Pending,
    /// Module grid finalized and queryable
    Made,
}

#[derive(Debug, Clone)]
struct Finalized {
    version: Version,
    mask: MaskPattern,
    codewords: Vec<u8>,
    grid: ModuleGrid,
}

/// A QR Code under construction
#[derive(Debug, Clone)]
pub struct Symbol {
    requested_version: Option<Version>,
    level: ECLevel,
    fixed_mask: Option<MaskPattern>,
    segments: Vec<Segment>,
    finalized: Option<Finalized>,
}

impl Symbol {
    /// New symbol; `None` picks the smallest fitting version at `make`
    pub fn new(version: Option<Version>, level: ECLevel) -> Self {
        Self {
            requested_version: version,
            level,
            fixed_mask: None,
            segments: Vec::new(),
            finalized: None,
        }
    }

    /// Always use `mask` instead of searching for the lowest penalty
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.fixed_mask = Some(mask);
        self.finalized = None;
        self
    }

    /// Append `text` in `mode` (byte mode when `None`)
    ///
    /// ```
    /// use rust_qr_gen::{ECLevel, Mode, Symbol};
    ///
    /// let mut symbol = Symbol::new(None, ECLevel::M);
    /// symbol.add_data("0123456789", Some("Numeric".parse::<Mode>()?))?;
    /// symbol.make()?;
    /// assert_eq!(symbol.module_count(), Some(21));
    /// # Ok::<(), rust_qr_gen::QrError>(())
    /// ```
    pub fn add_data(&mut self, text: &str, mode: Option<Mode>) -> Result<()> {
        let segment = Segment::new(text, mode.unwrap_or(Mode::Byte))?;
        self.add_segment(segment);
        Ok(())
    }

    /// Append `text` in the most compact mode that can hold it
    pub fn add_data_auto(&mut self, text: &str) -> Result<()> {
        self.add_segment(Segment::auto(text)?);
        Ok(())
    }

    /// Append an already validated segment
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
        self.finalized = None;
    }

    /// Segments in insertion order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Requested error correction level
    pub fn level(&self) -> ECLevel {
        self.level
    }

    /// Current lifecycle state
    pub fn state(&self) -> SymbolState {
        if self.finalized.is_some() {
            SymbolState::Made
        } else if self.segments.is_empty() {
            SymbolState::Empty
        } else {
            SymbolState::Pending
        }
    }

    /// Finalize the module grid
    ///
    /// A no-op when nothing changed since the last successful call. On
    /// failure the symbol stays pending and can be retried.
    #[tracing::instrument(level = "debug", skip_all, fields(level = ?self.level, segments = self.segments.len()))]
    pub fn make(&mut self) -> Result<()> {
        if self.finalized.is_some() {
            return Ok(());
        }

        let version = match self.requested_version {
            Some(version) => version,
            None => select_version(self.level, &self.segments)?,
        };
        let codewords = create_codewords(version, self.level, &self.segments)?;
        let mask = match self.fixed_mask {
            Some(mask) => mask,
            None => best_mask(version, self.level, &codewords),
        };
        let grid = render(version, self.level, &codewords, mask, false);
        debug!(
            version = version.number(),
            mask = mask.index(),
            "symbol made"
        );

        self.finalized = Some(Finalized {
            version,
            mask,
            codewords,
            grid,
        });
        Ok(())
    }

    /// Whether the module at (row, col) is dark
    pub fn is_dark(&self, row: i32, col: i32) -> Result<bool> {
        let finalized = self.finalized.as_ref().ok_or(QrError::NotMade)?;
        let size = finalized.grid.size();
        let in_bounds = |v: i32| v >= 0 && (v as usize) < size;
        if !in_bounds(row) || !in_bounds(col) {
            return Err(QrError::OutOfBounds { row, col, size });
        }
        Ok(finalized.grid.is_dark(row as usize, col as usize))
    }

    /// Side length in modules, once made
    pub fn module_count(&self) -> Option<usize> {
        self.finalized.as_ref().map(|f| f.grid.size())
    }

    /// Version actually used, once made
    pub fn version(&self) -> Option<Version> {
        self.finalized.as_ref().map(|f| f.version)
    }

    /// Mask applied to the data modules, once made
    pub fn mask_pattern(&self) -> Option<MaskPattern> {
        self.finalized.as_ref().map(|f| f.mask)
    }

    /// Final interleaved data + EC codewords, once made
    pub fn codewords(&self) -> Option<&[u8]> {
        self.finalized.as_ref().map(|f| f.codewords.as_slice())
    }

    /// Finalized module grid, once made
    pub fn grid(&self) -> Option<&ModuleGrid> {
        self.finalized.as_ref().map(|f| &f.grid)
    }
}

fn render(
    version: Version,
    level: ECLevel,
    codewords: &[u8],
    mask: MaskPattern,
    placeholder: bool,
) -> ModuleGrid {
    let mut grid = build_function_patterns(version, level, mask, placeholder);
    map_data(&mut grid, codewords, mask);
    grid
}

/// Score all eight masks on placeholder renders and keep the lowest
fn best_mask(version: Version, level: ECLevel, codewords: &[u8]) -> MaskPattern {
    let trial = |mask: MaskPattern| {
        let grid = render(version, level, codewords, mask, true);
        (mask, penalty_score(&grid).total())
    };

    let scores: Vec<(MaskPattern, f64)> =
        if config::parallel_masks() && version.number() >= config::parallel_min_version() {
            MaskPattern::ALL.as_slice().par_iter().map(|&m| trial(m)).collect()
        } else {
            MaskPattern::ALL.iter().map(|&m| trial(m)).collect()
        };

    for (mask, score) in &scores {
        trace!(mask = mask.index(), score, "mask penalty");
    }
    select_best_mask(&scores)
        .map(|(mask, _)| mask)
        .unwrap_or(MaskPattern::Pattern0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut symbol = Symbol::new(None, ECLevel::M);
        assert_eq!(symbol.state(), SymbolState::Empty);

        symbol.add_data("hello", None).unwrap();
        assert_eq!(symbol.state(), SymbolState::Pending);
        assert_eq!(symbol.is_dark(0, 0), Err(QrError::NotMade));

        symbol.make().unwrap();
        assert_eq!(symbol.state(), SymbolState::Made);
        assert_eq!(symbol.is_dark(0, 0), Ok(true));

        symbol.add_data("world", None).unwrap();
        assert_eq!(symbol.state(), SymbolState::Pending);
        assert_eq!(symbol.module_count(), None);
    }

    #[test]
    fn test_is_dark_bounds() {
        let mut symbol = Symbol::new(Some(Version::new(1).unwrap()), ECLevel::L);
        symbol.add_data("A", None).unwrap();
        symbol.make().unwrap();
        assert_eq!(
            symbol.is_dark(21, 0),
            Err(QrError::OutOfBounds {
                row: 21,
                col: 0,
                size: 21
            })
        );
        assert!(symbol.is_dark(0, -1).is_err());
        assert!(symbol.is_dark(20, 20).is_ok());
    }

    #[test]
    fn test_failed_make_stays_pending() {
        let mut symbol = Symbol::new(Some(Version::new(1).unwrap()), ECLevel::H);
        symbol.add_data("this text is far too long for version 1", None).unwrap();
        assert!(matches!(
            symbol.make(),
            Err(QrError::CapacityExceeded { .. })
        ));
        assert_eq!(symbol.state(), SymbolState::Pending);
    }

    #[test]
    fn test_illegal_character_leaves_symbol_unchanged() {
        let mut symbol = Symbol::new(None, ECLevel::M);
        symbol.add_data("123", Some(Mode::Numeric)).unwrap();
        symbol.make().unwrap();
        assert!(symbol.add_data("12a", Some(Mode::Numeric)).is_err());
        assert_eq!(symbol.state(), SymbolState::Made);
        assert_eq!(symbol.segments().len(), 1);
    }

    #[test]
    fn test_add_segment_takes_validated_segments() {
        let mut symbol = Symbol::new(None, ECLevel::M);
        assert!(Segment::new("ab", Mode::Alphanumeric).is_err());
        assert!(Segment::new("A", Mode::Kanji).is_err());

        symbol.add_segment(Segment::new("点茗", Mode::Kanji).unwrap());
        symbol.add_segment(Segment::new("AB", Mode::Alphanumeric).unwrap());
        symbol.make().unwrap();
        assert_eq!(symbol.segments()[0].mode(), Mode::Kanji);
        assert_eq!(symbol.segments()[1].text(), "AB");
    }

    #[test]
    fn test_fixed_mask() {
        let mut symbol = Symbol::new(None, ECLevel::M).with_mask(MaskPattern::Pattern3);
        symbol.add_data("Hello world", None).unwrap();
        symbol.make().unwrap();
        assert_eq!(symbol.mask_pattern(), Some(MaskPattern::Pattern3));
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let codewords =
            create_codewords(Version::new(8).unwrap(), ECLevel::Q, &[Segment::auto("QR").unwrap()])
                .unwrap();
        let version = Version::new(8).unwrap();
        let sequential: Vec<f64> = MaskPattern::ALL
            .iter()
            .map(|&m| penalty_score(&render(version, ECLevel::Q, &codewords, m, true)).total())
            .collect();
        let best = best_mask(version, ECLevel::Q, &codewords);
        let min = sequential.iter().cloned().fold(f64::INFINITY, f64::min);
        let first_min = sequential.iter().position(|&s| s == min).unwrap();
        assert_eq!(best.index() as usize, first_min);
    }

    #[test]
    fn test_empty_symbol_can_be_made() {
        let mut symbol = Symbol::new(None, ECLevel::L);
        symbol.make().unwrap();
        assert_eq!(symbol.version(), Version::new(1).ok());
        assert_eq!(symbol.codewords().map(|c| c.len()), Some(26));
    }
}
