//! Packed boolean grids.
//!
//! An `N×N` grid of flags stored in a single unsigned integer `T`. Used for
//! the placement buffer, attacked-cell tracking and the targeting bots'
//! exclusion masks. All coordinate access is bounds-checked.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::common::GridError;
use crate::grid::Coord;

/// An N×N flag grid packed into the unsigned integer `T`.
///
/// The cell `(x, y)` maps to bit `x * N + y`, matching the integer action
/// encoding used at the environment boundary.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitGrid<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn valid_bits() -> T {
        if Self::CELLS == core::mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty grid, all flags cleared.
    #[inline]
    pub fn new() -> Self {
        BitGrid { bits: T::zero() }
    }

    /// Number of set flags.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True if no flag is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Flag at `coord`.
    pub fn get(&self, coord: Coord) -> Result<bool, GridError> {
        let idx = Self::index(coord)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Set the flag at `coord`.
    pub fn set(&mut self, coord: Coord) -> Result<(), GridError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    /// Clear the flag at `coord`.
    pub fn clear(&mut self, coord: Coord) -> Result<(), GridError> {
        let idx = Self::index(coord)?;
        self.bits = self.bits & !(T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(coord: Coord) -> Result<usize, GridError> {
        if coord.x >= N || coord.y >= N {
            Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
        } else {
            Ok(coord.x * N + coord.y)
        }
    }

    /// Iterator over set cells, in bit order.
    pub fn iter_set(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..Self::CELLS)
            .filter(move |&idx| ((self.bits >> idx) & T::one()) != T::zero())
            .map(|idx| Coord {
                x: idx / N,
                y: idx % N,
            })
    }
}

impl<T, const N: usize> Default for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitGrid {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> Not for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        BitGrid {
            bits: !self.bits & Self::valid_bits(),
        }
    }
}

impl<T, const N: usize> fmt::Debug for BitGrid<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid<{}>:", N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if ((self.bits >> (x * N + y)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
