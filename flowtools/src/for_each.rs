//! [`ForEach`] consuming sink.
use crate::Sinks;

/// Same as [`Iterator::for_each`] but as a [`Sinks`] bundle.
///
/// Consumes each pushed item with `func`. Ejects are ignored.
#[must_use = "sinks do nothing unless pushed to"]
pub struct ForEach<Func> {
    arity: usize,
    func: Func,
}

impl<Func> ForEach<Func> {
    /// Create with the given `arity` and consuming `func`.
    pub fn new<Item>(arity: usize, func: Func) -> Self
    where
        Self: Sinks<Item>,
    {
        Self { arity, func }
    }
}

impl<Func, Item> Sinks<Item> for ForEach<Func>
where
    Func: FnMut(usize, Item),
{
    fn arity(&self) -> usize {
        self.arity
    }

    fn push(&mut self, index: usize, item: Item) {
        (self.func)(index, item)
    }

    fn eject(&mut self, _index: usize) {}
}
