//! [`MapSources`] and [`MapSinks`].
use crate::{Sinks, Sources};

/// Same as [`Iterator::map`] but over every stream of a [`Sources`] bundle.
///
/// `func` also receives the index of the stream the item was pulled from.
#[must_use = "sources do nothing unless pulled"]
pub struct MapSources<S, Func> {
    source: S,
    func: Func,
}

impl<S, Func> MapSources<S, Func> {
    /// Creates with mapping `func` and wrapped `source`.
    pub fn new<Out>(func: Func, source: S) -> Self
    where
        Self: Sources<Item = Out>,
    {
        Self { source, func }
    }
}

impl<S, Func, Out> Sources for MapSources<S, Func>
where
    S: Sources,
    Func: FnMut(usize, S::Item) -> Out,
{
    type Item = Out;

    fn arity(&self) -> usize {
        self.source.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        let item = self.source.pull(index)?;
        Some((self.func)(index, item))
    }
}

/// Maps each pushed item with `func` before sending it to the following sink.
#[must_use = "sinks do nothing unless pushed to"]
pub struct MapSinks<Si, Func> {
    sink: Si,
    func: Func,
}

impl<Si, Func> MapSinks<Si, Func> {
    /// Creates with mapping `func` and next `sink`.
    pub fn new<Item>(func: Func, sink: Si) -> Self
    where
        Self: Sinks<Item>,
    {
        Self { sink, func }
    }
}

impl<Si, Func, Item, ItemOut> Sinks<Item> for MapSinks<Si, Func>
where
    Si: Sinks<ItemOut>,
    Func: FnMut(usize, Item) -> ItemOut,
{
    fn arity(&self) -> usize {
        self.sink.arity()
    }

    fn push(&mut self, index: usize, item: Item) {
        let item = (self.func)(index, item);
        self.sink.push(index, item)
    }

    fn eject(&mut self, index: usize) {
        self.sink.eject(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capture, from_lists, to_list};

    #[test]
    fn test_map_sources() {
        let mut source = MapSources::new(
            |i: usize, x: i32| x * 10 + i as i32,
            from_lists([vec![1, 2], vec![3]]),
        );
        assert_eq!(vec![10, 20], to_list(0, &mut source));
        assert_eq!(vec![31], to_list(1, &mut source));
        assert_eq!(None, source.pull(1));
    }

    #[test]
    fn test_map_sinks() {
        let mut capture = Capture::new(2);
        let mut sink = MapSinks::new(|_: usize, s: &str| s.len(), &mut capture);
        sink.push(1, "abc");
        sink.push(0, "");
        Sinks::<&str>::eject(&mut sink, 1);

        assert!(capture.is_ejected(1));
        assert_eq!(vec![vec![0], vec![3]], capture.into_lists());
    }
}
