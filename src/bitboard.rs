//! Square bit grids packed into a single unsigned integer.
//!
//! Used for the 5×5 ability stencils, for occupancy snapshots of a board
//! cell state and for remembering which cells a shooter has already fired at.
//! Row-major: bit `row * N + col` holds cell `(row, col)`.

use core::ops::BitOr;
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// `N*N` does not fit into the bits of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Row or column outside `[0, N)`.
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "grid of {}x{} does not fit in {} bits", n, n, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
        }
    }
}

/// A fixed-size N×N bit grid stored in `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const GRID_BITS: usize = N * N;

    /// Empty grid. Does not check capacity; see [`BitBoard::try_new`].
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Empty grid, or `SizeTooLarge` when `N*N` exceeds the bits of `T`.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::GRID_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// Number of marked cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `(row, col)` is marked.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(((self.bits >> (row * N + col)) & T::one()) != T::zero())
    }

    /// Mark `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.bits = self.bits | (T::one() << (row * N + col));
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= N || col >= N {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    /// Build a grid with every listed `(row, col)` marked.
    pub fn from_iter<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::try_new()?;
        for (r, c) in iter {
            grid.set(r, c)?;
        }
        Ok(grid)
    }

    /// Marked cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}x{}>:", N, N)?;
        writeln!(f, "{}", self)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let marked = ((self.bits >> (r * N + c)) & T::one()) != T::zero();
                write!(f, "{} ", if marked { '■' } else { '□' })?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the marked cells of a [`BitBoard`].
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.grid.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}
