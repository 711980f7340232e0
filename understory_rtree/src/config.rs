// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction parameters.

use crate::error::Error;
use crate::types::Measure;

/// Construction parameters for an [`RTree`](crate::RTree), fixed for the lifetime of the tree.
///
/// ```
/// use understory_rtree::{Config, Measure};
///
/// let config = Config::new(16).with_measure(Measure::Margin);
/// assert_eq!(config.min_fill(), 8);
/// assert!(config.validate().is_ok());
///
/// assert!(Config::new(1).validate().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    branch_factor: usize,
    min_fill: usize,
    measure: Measure,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Config {
    /// Parameters for the given branch factor, with a minimum fill of half of it.
    pub const fn new(branch_factor: usize) -> Self {
        let half = branch_factor / 2;
        Self {
            branch_factor,
            min_fill: if half == 0 { 1 } else { half },
            measure: Measure::Area,
        }
    }

    /// Override the minimum number of entries each half of a split receives.
    pub const fn with_min_fill(mut self, min_fill: usize) -> Self {
        self.min_fill = min_fill;
        self
    }

    /// Override the extent measure used for best-fit descent and splitting.
    pub const fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Maximum number of entries (items or children) a node holds after an operation.
    pub const fn branch_factor(&self) -> usize {
        self.branch_factor
    }

    /// Minimum number of entries each node receives when an overflowing node splits.
    pub const fn min_fill(&self) -> usize {
        self.min_fill
    }

    /// Extent measure used to compare rectangles.
    pub const fn measure(&self) -> Measure {
        self.measure
    }

    /// Check that a node of `branch_factor + 1` entries can always be split in two
    /// halves of at least `min_fill` entries.
    pub fn validate(&self) -> Result<(), Error> {
        if self.branch_factor < 2 {
            return Err(Error::BranchFactorTooSmall {
                branch_factor: self.branch_factor,
            });
        }
        let max = (self.branch_factor + 1) / 2;
        if self.min_fill == 0 || self.min_fill > max {
            return Err(Error::MinFillOutOfRange {
                min_fill: self.min_fill,
                max,
                branch_factor: self.branch_factor,
            });
        }
        Ok(())
    }
}
