//! [`Repeat`] and [`Replicate`] constructors.
use crate::{Sources, State};

/// Infinite source where stream `i` always yields `func(i)`.
#[must_use = "sources do nothing unless pulled"]
pub struct Repeat<Func> {
    arity: usize,
    func: Func,
}

impl<Func> Repeat<Func> {
    /// Creates with the given `arity` and item function.
    pub fn new<Item>(arity: usize, func: Func) -> Self
    where
        Func: FnMut(usize) -> Item,
    {
        Self { arity, func }
    }
}

impl<Func, Item> Sources for Repeat<Func>
where
    Func: FnMut(usize) -> Item,
{
    type Item = Item;

    fn arity(&self) -> usize {
        self.arity
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        Some((self.func)(index))
    }
}

/// Bounded source where stream `i` yields `func(i)` exactly `length` times.
///
/// Each instance counts its own pulls, so two replicates built from the same arguments are independent.
#[must_use = "sources do nothing unless pulled"]
pub struct Replicate<Func> {
    length: usize,
    counts: State<usize>,
    func: Func,
}

impl<Func> Replicate<Func> {
    /// Creates with the given `arity`, per-stream `length`, and item function.
    pub fn new<Item>(arity: usize, length: usize, func: Func) -> Self
    where
        Func: FnMut(usize) -> Item,
    {
        Self {
            length,
            counts: State::new(arity, 0),
            func,
        }
    }
}

impl<Func, Item> Sources for Replicate<Func>
where
    Func: FnMut(usize) -> Item,
{
    type Item = Item;

    fn arity(&self) -> usize {
        self.counts.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        let count = self.counts.get_mut(index);
        if *count < self.length {
            *count += 1;
            Some((self.func)(index))
        } else {
            None
        }
    }
}
