//! Font size from text length.
//!
//! Both tables are pure step functions. Thresholds are checked with `<=` in
//! ascending order, so a length sitting exactly on a threshold lands in the
//! earlier bucket.

use serde::{Deserialize, Serialize};

/// Sizing strategy, one per observed display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    /// 60px base stepping down to a 20px floor.
    #[default]
    Compact,
    /// 300px hero text stepping down to a 50px floor.
    Expanded,
}

const COMPACT_TABLE: &[(usize, u16)] = &[
    (5, 60),
    (10, 55),
    (20, 50),
    (30, 45),
    (50, 40),
    (100, 35),
];

const EXPANDED_TABLE: &[(usize, u16)] = &[
    (3, 300),
    (6, 250),
    (10, 200),
    (20, 150),
    (30, 125),
    (40, 100),
    (45, 90),
    (50, 80),
    (60, 70),
    (70, 60),
];

impl SizePolicy {
    /// Font size in pixels for a text of `len` characters.
    pub fn size_for_len(self, len: usize) -> u16 {
        let table = match self {
            Self::Compact => COMPACT_TABLE,
            Self::Expanded => EXPANDED_TABLE,
        };
        table
            .iter()
            .find(|&&(max, _)| len <= max)
            .map_or(self.min_size(), |&(_, px)| px)
    }

    /// The floor this policy never goes below.
    pub fn min_size(self) -> u16 {
        match self {
            Self::Compact => 20,
            Self::Expanded => 50,
        }
    }
}
