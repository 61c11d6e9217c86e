//! Squares dropped one after another onto a line, each landing on whatever
//! is already below it.
//!
//! A square with left edge `left` and side `side` covers the integer cells
//! `left..=left + side - 1`. It falls until its bottom touches the tallest
//! cell it covers and then raises every covered cell to its own top.
//! [`tallest_stacks`] reports the tallest point after each drop.
//!
//! ```
//! use falling_squares::{tallest_stacks, Square};
//!
//! let squares = [Square::new(1, 2), Square::new(2, 3), Square::new(6, 1)];
//! assert_eq!(tallest_stacks(&squares).unwrap(), vec![2, 5, 5]);
//! ```

use interval_tree::{MaxTree, TreeError};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub left: i64,
    pub side: i64,
}

impl Square {
    pub fn new(left: i64, side: i64) -> Self {
        Self { left, side }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FallingSquaresError {
    #[error("square {index} has side {side}, sides must be positive")]
    InvalidSide { index: usize, side: i64 },
    #[error("square {index} reaches past the largest coordinate or height")]
    Overflow { index: usize },
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Height of the tallest stack after each square in `squares` has landed.
pub fn tallest_stacks(squares: &[Square]) -> Result<Vec<i64>, FallingSquaresError> {
    let cells = covered_cells(squares)?;
    if cells.is_empty() {
        return Ok(vec![]);
    }
    let ranks = compress(&cells);
    log::debug!(
        "compressed {} squares onto {} coordinates",
        squares.len(),
        ranks.len()
    );
    let mut heights = MaxTree::with_leaf_count(ranks.len())?;
    let mut tallest = 0;
    let mut stacks = Vec::with_capacity(squares.len());
    for (index, (square, (first, last))) in squares.iter().zip(cells).enumerate() {
        let (left, right) = (ranks[&first], ranks[&last]);
        let height = heights
            .query(left, right)?
            .checked_add(square.side)
            .ok_or(FallingSquaresError::Overflow { index })?;
        tallest = tallest.max(height);
        stacks.push(tallest);
        heights.assign(left, right, height)?;
    }
    Ok(stacks)
}

// first and last cell covered by each square
fn covered_cells(squares: &[Square]) -> Result<Vec<(i64, i64)>, FallingSquaresError> {
    squares
        .iter()
        .enumerate()
        .map(|(index, square)| {
            if square.side <= 0 {
                return Err(FallingSquaresError::InvalidSide {
                    index,
                    side: square.side,
                });
            }
            let last = square
                .left
                .checked_add(square.side - 1)
                .ok_or(FallingSquaresError::Overflow { index })?;
            Ok((square.left, last))
        })
        .collect()
}

// numbers the distinct cell coordinates 1..=n in increasing order
fn compress(cells: &[(i64, i64)]) -> HashMap<i64, usize> {
    let coordinates: BTreeSet<i64> = cells
        .iter()
        .flat_map(|&(first, last)| [first, last])
        .collect();
    coordinates
        .into_iter()
        .zip(1..)
        .collect()
}
