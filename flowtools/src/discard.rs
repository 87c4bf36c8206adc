//! [`Discard`] and [`Ignore`], sinks which drop everything pushed to them.
use crate::Sinks;

/// Drops each pushed item before `push` returns.
///
/// Any work tied to releasing an item (its [`Drop`] impl, and anything that drops in turn) has finished by the time
/// `push` returns.
#[derive(Debug, Clone, Copy)]
#[must_use = "sinks do nothing unless pushed to"]
pub struct Discard {
    arity: usize,
}

impl Discard {
    /// Creates with the given `arity`.
    pub fn new(arity: usize) -> Self {
        Self { arity }
    }
}

impl<Item> Sinks<Item> for Discard {
    fn arity(&self) -> usize {
        self.arity
    }

    fn push(&mut self, _index: usize, item: Item) {
        drop(item);
    }

    fn eject(&mut self, _index: usize) {}
}

/// Accepts each pushed item without looking at it.
///
/// Makes no promise about when pushed items are released.
#[derive(Debug, Clone, Copy)]
#[must_use = "sinks do nothing unless pushed to"]
pub struct Ignore {
    arity: usize,
}

impl Ignore {
    /// Creates with the given `arity`.
    pub fn new(arity: usize) -> Self {
        Self { arity }
    }
}

impl<Item> Sinks<Item> for Ignore {
    fn arity(&self) -> usize {
        self.arity
    }

    fn push(&mut self, _index: usize, _item: Item) {}

    fn eject(&mut self, _index: usize) {}
}
