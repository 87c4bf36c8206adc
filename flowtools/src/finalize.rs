//! Finalizer hooks, for releasing resources tied to individual streams.
//!
//! A finalizer runs at most once per stream: for [`FinalizeSources`], the first time that stream is pulled and found
//! exhausted; for [`FinalizeSinks`], the first time that stream is ejected. Attaching several finalizers nests the
//! wrappers, so they run oldest first.
use crate::{Sinks, Sources, State};

/// Calls `func` with the index the first time each stream is exhausted.
#[must_use = "sources do nothing unless pulled"]
pub struct FinalizeSources<S, Func> {
    source: S,
    func: Func,
    fired: State<bool>,
}

impl<S, Func> FinalizeSources<S, Func>
where
    S: Sources,
    Func: FnMut(usize),
{
    /// Creates with finalizer `func` and wrapped `source`.
    pub fn new(func: Func, source: S) -> Self {
        let fired = State::new(source.arity(), false);
        Self {
            source,
            func,
            fired,
        }
    }
}

impl<S, Func> Sources for FinalizeSources<S, Func>
where
    S: Sources,
    Func: FnMut(usize),
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        self.source.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        let item = self.source.pull(index);
        if item.is_none() && !self.fired.replace(index, true) {
            tracing::debug!(index, "Source stream exhausted, running finalizer.");
            (self.func)(index);
        }
        item
    }
}

/// Calls `func` with the index the first time each stream is ejected, after forwarding the eject.
#[must_use = "sinks do nothing unless pushed to"]
pub struct FinalizeSinks<Si, Func> {
    sink: Si,
    func: Func,
    fired: State<bool>,
}

impl<Si, Func> FinalizeSinks<Si, Func>
where
    Func: FnMut(usize),
{
    /// Creates with finalizer `func` and next `sink`.
    pub fn new<Item>(func: Func, sink: Si) -> Self
    where
        Si: Sinks<Item>,
    {
        let fired = State::new(sink.arity(), false);
        Self { sink, func, fired }
    }
}

impl<Si, Func, Item> Sinks<Item> for FinalizeSinks<Si, Func>
where
    Si: Sinks<Item>,
    Func: FnMut(usize),
{
    fn arity(&self) -> usize {
        self.sink.arity()
    }

    fn push(&mut self, index: usize, item: Item) {
        self.sink.push(index, item)
    }

    fn eject(&mut self, index: usize) {
        self.sink.eject(index);
        if !self.fired.replace(index, true) {
            tracing::debug!(index, "Sink stream ejected, running finalizer.");
            (self.func)(index);
        }
    }
}
