// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Errors reported when a tree or node cannot be constructed as requested.
///
/// Mutating operations on an existing tree never fail; removing an absent datum is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A node must be able to hold at least two entries to split.
    #[error("branch factor must be at least 2, got {branch_factor}")]
    BranchFactorTooSmall {
        /// The rejected branch factor.
        branch_factor: usize,
    },
    /// Both halves of a split must be able to reach the minimum fill.
    #[error("minimum fill {min_fill} must be in 1..={max} for branch factor {branch_factor}")]
    MinFillOutOfRange {
        /// The rejected minimum fill.
        min_fill: usize,
        /// Largest accepted minimum fill, `(branch_factor + 1) / 2`.
        max: usize,
        /// The branch factor it was paired with.
        branch_factor: usize,
    },
    /// More initial entries than a node may hold.
    #[error("cannot build a node with {len} entries; branch factor is {branch_factor}")]
    Overfull {
        /// Number of entries supplied.
        len: usize,
        /// Maximum entries per node.
        branch_factor: usize,
    },
}
