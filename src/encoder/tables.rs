use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};
use std::sync::OnceLock;

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// One Reed-Solomon block: total codewords and how many of them carry data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlock {
    /// Data plus EC codewords
    pub total_codewords: usize,
    /// Data codewords
    pub data_codewords: usize,
}

impl EcBlock {
    /// EC codewords in this block
    pub fn ecc_codewords(&self) -> usize {
        self.total_codewords - self.data_codewords
    }
}

/// Block layout for one (version, level) pair
///
/// Blocks are listed group 1 first. Group 2 blocks, when present, carry one
/// more data codeword than group 1 blocks; both groups share the EC length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPlan {
    /// Group 1 blocks followed by group 2 blocks
    pub blocks: Vec<EcBlock>,
    /// Longest data run across blocks
    pub max_data_codewords: usize,
    /// EC codewords per block
    pub max_ecc_codewords: usize,
    /// Sum of data codewords
    pub total_data_codewords: usize,
    /// Sum of EC codewords
    pub total_ecc_codewords: usize,
}

impl BlockPlan {
    fn build(version: Version, level: ECLevel) -> Self {
        let v = version.number() as usize;
        let lvl = level.ordinal();
        let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[lvl][v] as usize;
        let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[lvl][v] as usize;

        let raw = total_codewords(version);
        let num_short = num_blocks - raw % num_blocks;
        let short_len = raw / num_blocks;

        let blocks: Vec<EcBlock> = (0..num_blocks)
            .map(|i| {
                let total = if i < num_short { short_len } else { short_len + 1 };
                EcBlock {
                    total_codewords: total,
                    data_codewords: total - ecc_per_block,
                }
            })
            .collect();

        let max_data_codewords = blocks.iter().map(|b| b.data_codewords).max().unwrap_or(0);
        let total_data_codewords = blocks.iter().map(|b| b.data_codewords).sum();
        Self {
            max_data_codewords,
            max_ecc_codewords: ecc_per_block,
            total_data_codewords,
            total_ecc_codewords: ecc_per_block * num_blocks,
            blocks,
        }
    }

    /// Number of blocks in (group 1, group 2)
    pub fn group_counts(&self) -> (usize, usize) {
        let short = self
            .blocks
            .iter()
            .filter(|b| b.data_codewords < self.max_data_codewords)
            .count();
        if short == 0 {
            (self.blocks.len(), 0)
        } else {
            (short, self.blocks.len() - short)
        }
    }

    /// Data capacity in bits
    pub fn data_capacity_bits(&self) -> usize {
        self.total_data_codewords * 8
    }
}

static BLOCK_PLANS: [OnceLock<BlockPlan>; 160] = [const { OnceLock::new() }; 160];

/// Memoized block layout; each slot is computed once per process
pub fn block_plan(version: Version, level: ECLevel) -> &'static BlockPlan {
    let index = (version.number() as usize - 1) * 4 + level.ordinal();
    BLOCK_PLANS[index].get_or_init(|| BlockPlan::build(version, level))
}

/// Block layout from raw numbers, validating both
pub fn block_plan_for(version: u32, level: usize) -> Result<&'static BlockPlan> {
    let version = Version::new(version)?;
    let level =
        ECLevel::from_ordinal(level).ok_or_else(|| QrError::InvalidLevel(level.to_string()))?;
    Ok(block_plan(version, level))
}

/// Modules available for data and EC codewords, remainder bits included
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let size = version.size();

    // Finder patterns with separators, timing lines, format info and dark module
    let mut result = size * size - 3 * 64 - 2 * (size - 16) - 31;
    if v >= 2 {
        let num_align = v / 7 + 2;
        // Alignment patterns, minus the ones sitting on finders; those on the
        // timing lines overlap modules already counted there
        result -= (num_align * num_align - 3) * 25;
        result += 2 * (num_align - 2) * 5;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + EC) for a version
pub fn total_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Data capacity in bits for (version, level)
pub fn data_capacity_bits(version: Version, level: ECLevel) -> usize {
    block_plan(version, level).data_capacity_bits()
}

static ALIGNMENT_POSITIONS: OnceLock<Vec<Vec<usize>>> = OnceLock::new();

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    let table = ALIGNMENT_POSITIONS.get_or_init(|| Version::all().map(compute_alignment).collect());
    &table[version.number() as usize - 1]
}

fn compute_alignment(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let last = version.size() - 7;
    let mut positions = Vec::with_capacity(num_align);
    positions.push(6);
    positions.extend((1..num_align).map(|i| last - (num_align - 1 - i) * step));
    positions
}
