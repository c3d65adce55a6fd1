//! Occupancy masks over an `N`×`N` grid, packed row-major into one unsigned
//! integer. Used for ocean occupancy and for pruning placement anchors.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned};

use crate::geometry::Coord;

/// Unsigned integers usable as bitboard storage.
pub trait Bits: PrimInt + Unsigned {}

impl<T: PrimInt + Unsigned> Bits for T {}

/// Set of cells on an `N`×`N` grid stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T: Bits, const N: usize> {
    bits: T,
}

/// Occupancy mask wide enough for boards up to 11×11.
pub type Mask<const N: usize> = BitBoard<u128, N>;

impl<T: Bits, const N: usize> BitBoard<T, N> {
    const CELLS: usize = N * N;

    // Rejects grids that do not fit in `T` when `new` is monomorphised.
    const FITS: () = assert!(
        N * N <= mem::size_of::<T>() * 8,
        "grid does not fit in the bitboard storage type"
    );

    fn board_mask() -> T {
        let width = mem::size_of::<T>() * 8;
        if Self::CELLS >= width {
            T::max_value()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    fn bit(coord: Coord) -> Option<T> {
        (coord.row < N && coord.col < N).then(|| T::one() << (coord.row * N + coord.col))
    }

    pub fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    /// Whether `coord` is in the set. Off-board cells never are.
    pub fn get(&self, coord: Coord) -> bool {
        Self::bit(coord).is_some_and(|b| self.bits & b != T::zero())
    }

    /// Add `coord` to the set; `false` if it lies off the board.
    pub fn set(&mut self, coord: Coord) -> bool {
        match Self::bit(coord) {
            Some(b) => {
                self.bits = self.bits | b;
                true
            }
            None => false,
        }
    }

    /// `None` if any coordinate is off the board.
    pub fn from_coords<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut mask = Self::new();
        coords.into_iter().all(|c| mask.set(c)).then_some(mask)
    }

    /// Members in row-major order.
    pub fn coords(&self) -> SetBits<T, N> {
        SetBits { rest: self.bits }
    }

    fn with_bits(bits: T) -> Self {
        BitBoard {
            bits: bits & Self::board_mask(),
        }
    }
}

impl<T: Bits, const N: usize> Default for BitBoard<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Bits, const N: usize> fmt::Display for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..N {
                let mark = if self.get(Coord::new(row, col)) { '■' } else { '□' };
                write!(f, "{} ", mark)?;
            }
        }
        Ok(())
    }
}

impl<T: Bits, const N: usize> fmt::Debug for BitBoard<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}> ({} set)", N, self.count_ones())?;
        fmt::Display::fmt(self, f)
    }
}

/// Iterator over the members of a [`BitBoard`], lowest index first.
#[derive(Clone, Copy)]
pub struct SetBits<T: Bits, const N: usize> {
    rest: T,
}

impl<T: Bits, const N: usize> Iterator for SetBits<T, N> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.rest == T::zero() {
            return None;
        }
        let idx = self.rest.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.rest = self.rest & (self.rest - T::one());
        Some(Coord::new(idx / N, idx % N))
    }
}

macro_rules! bitboard_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $sym:tt) => {
        impl<T: Bits, const N: usize> $op for BitBoard<T, N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::with_bits(self.bits $sym rhs.bits)
            }
        }

        impl<T: Bits, const N: usize> $assign for BitBoard<T, N> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $sym rhs;
            }
        }
    };
}

bitboard_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
bitboard_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);

/// Complement within the board; bits past `N * N` stay clear.
impl<T: Bits, const N: usize> Not for BitBoard<T, N> {
    type Output = Self;

    fn not(self) -> Self {
        Self::with_bits(!self.bits)
    }
}
