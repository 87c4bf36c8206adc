//! [`State`], the per-index cells stateful combinators keep between pulls.
use std::ops::{Index, IndexMut};

/// One independently mutable cell per stream of a bundle.
///
/// Owned by a single combinator instance. Cells never observe each other, so a combinator may interleave work on
/// different indices in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State<T> {
    cells: Vec<T>,
}

impl<T> State<T> {
    /// Creates `arity` cells, each holding a clone of `init`.
    pub fn new(arity: usize, init: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![init; arity],
        }
    }

    /// Creates `arity` cells, initializing cell `i` with `func(i)`.
    pub fn from_fn(arity: usize, func: impl FnMut(usize) -> T) -> Self {
        Self {
            cells: (0..arity).map(func).collect(),
        }
    }

    /// The number of cells.
    pub fn arity(&self) -> usize {
        self.cells.len()
    }

    /// Reads cell `index`.
    pub fn get(&self, index: usize) -> &T {
        &self.cells[index]
    }

    /// Mutably borrows cell `index`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }

    /// Overwrites cell `index` with `value`.
    pub fn set(&mut self, index: usize, value: T) {
        self.cells[index] = value;
    }

    /// Overwrites cell `index` with `value`, returning the previous value.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.cells[index], value)
    }

    /// Takes the value out of cell `index`, leaving the default behind.
    pub fn take(&mut self, index: usize) -> T
    where
        T: Default,
    {
        std::mem::take(&mut self.cells[index])
    }

    /// Iterates over the cells in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Returns the cells in index order.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T> From<Vec<T>> for State<T> {
    fn from(cells: Vec<T>) -> Self {
        Self { cells }
    }
}

impl<T> Index<usize> for State<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for State<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<'a, T> IntoIterator for &'a State<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
