//! Bridges from one stream of a bundle into [`Iterator`] and, with the `futures` feature, `Stream`.
use crate::Sources;
use crate::error::assert_index;

/// An [`Iterator`] over stream `index` of a [`Sources`] bundle.
///
/// Fused: once the stream is exhausted the source is not pulled again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct SourceIter<S> {
    source: S,
    index: usize,
    done: bool,
}

impl<S> SourceIter<S>
where
    S: Sources,
{
    /// Creates over stream `index` of `source`. Panics if `index` is out of range.
    #[track_caller]
    pub fn new(index: usize, source: S) -> Self {
        assert_index(index, source.arity());
        Self {
            source,
            index,
            done: false,
        }
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> Iterator for SourceIter<S>
where
    S: Sources,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.source.pull(self.index);
        self.done = item.is_none();
        item
    }
}

impl<S> std::iter::FusedIterator for SourceIter<S> where S: Sources {}

/// Adapts stream `index` of `source` into an always-ready [`Stream`](futures_util::Stream).
///
/// Panics if `index` is out of range.
#[cfg(feature = "futures")]
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
#[track_caller]
pub fn into_stream<S>(index: usize, source: S) -> futures_util::stream::Iter<SourceIter<S>>
where
    S: Sources,
{
    futures_util::stream::iter(SourceIter::new(index, source))
}
