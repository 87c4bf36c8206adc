//! [`DupSinks`] and [`DupSourceSink`], which copy items to a second consumer.
use crate::{Sinks, Sources};

/// Pushes a clone of each item to `sink0` and then the item to `sink1`, and forwards ejects to both.
///
/// Its arity is the smaller of the two wrapped arities.
#[must_use = "sinks do nothing unless pushed to"]
pub struct DupSinks<Si0, Si1> {
    sink0: Si0,
    sink1: Si1,
}

impl<Si0, Si1> DupSinks<Si0, Si1> {
    /// Creates with the two sinks to copy into.
    pub fn new<Item>(sink0: Si0, sink1: Si1) -> Self
    where
        Self: Sinks<Item>,
    {
        Self { sink0, sink1 }
    }

    /// Returns the two wrapped sinks.
    pub fn into_inner(self) -> (Si0, Si1) {
        (self.sink0, self.sink1)
    }
}

impl<Si0, Si1, Item> Sinks<Item> for DupSinks<Si0, Si1>
where
    Si0: Sinks<Item>,
    Si1: Sinks<Item>,
    Item: Clone,
{
    fn arity(&self) -> usize {
        self.sink0.arity().min(self.sink1.arity())
    }

    fn push(&mut self, index: usize, item: Item) {
        self.sink0.push(index, item.clone());
        self.sink1.push(index, item);
    }

    fn eject(&mut self, index: usize) {
        self.sink0.eject(index);
        self.sink1.eject(index);
    }
}

/// A source which copies each item it yields into a sink.
///
/// The sink sees exactly the items the caller pulls, one push per successful pull, and is ejected when the caller
/// pulls an exhausted stream.
#[must_use = "sources do nothing unless pulled"]
pub struct DupSourceSink<S, Si> {
    source: S,
    sink: Si,
}

impl<S, Si> DupSourceSink<S, Si>
where
    S: Sources,
    S::Item: Clone,
    Si: Sinks<S::Item>,
{
    /// Creates with the wrapped `source` and the `sink` receiving copies.
    pub fn new(source: S, sink: Si) -> Self {
        Self { source, sink }
    }

    /// Returns the wrapped source and sink.
    pub fn into_inner(self) -> (S, Si) {
        (self.source, self.sink)
    }
}

impl<S, Si> Sources for DupSourceSink<S, Si>
where
    S: Sources,
    S::Item: Clone,
    Si: Sinks<S::Item>,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        self.source.arity().min(self.sink.arity())
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        match self.source.pull(index) {
            Some(item) => {
                self.sink.push(index, item.clone());
                Some(item)
            }
            None => {
                self.sink.eject(index);
                None
            }
        }
    }
}
