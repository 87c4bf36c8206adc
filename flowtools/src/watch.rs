//! [`WatchSources`] and [`WatchSinks`], side-effecting observers.
use crate::{Sinks, Sources};

/// Same as [`Iterator::inspect`] but over every stream of a [`Sources`] bundle.
///
/// `func` sees each item, along with its stream index, before the caller does.
#[must_use = "sources do nothing unless pulled"]
pub struct WatchSources<S, Func> {
    source: S,
    func: Func,
}

impl<S, Func> WatchSources<S, Func>
where
    S: Sources,
    Func: FnMut(usize, &S::Item),
{
    /// Creates with watching `func` and wrapped `source`.
    pub fn new(func: Func, source: S) -> Self {
        Self { source, func }
    }
}

impl<S, Func> Sources for WatchSources<S, Func>
where
    S: Sources,
    Func: FnMut(usize, &S::Item),
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        self.source.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        let item = self.source.pull(index)?;
        (self.func)(index, &item);
        Some(item)
    }
}

/// Calls `func` on each pushed item before sending it to the following sink.
#[must_use = "sinks do nothing unless pushed to"]
pub struct WatchSinks<Si, Func> {
    sink: Si,
    func: Func,
}

impl<Si, Func> WatchSinks<Si, Func> {
    /// Creates with watching `func` and next `sink`.
    pub fn new<Item>(func: Func, sink: Si) -> Self
    where
        Self: Sinks<Item>,
    {
        Self { sink, func }
    }
}

impl<Si, Func, Item> Sinks<Item> for WatchSinks<Si, Func>
where
    Si: Sinks<Item>,
    Func: FnMut(usize, &Item),
{
    fn arity(&self) -> usize {
        self.sink.arity()
    }

    fn push(&mut self, index: usize, item: Item) {
        (self.func)(index, &item);
        self.sink.push(index, item)
    }

    fn eject(&mut self, index: usize) {
        self.sink.eject(index)
    }
}
