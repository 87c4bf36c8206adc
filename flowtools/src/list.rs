//! In-memory bundles: [`ListSources`] built from fixed sequences, [`Capture`] collecting into vectors, and the
//! [`to_list`] family of drains.
use std::collections::VecDeque;

use crate::error::{BundleError, assert_index, check_index};
use crate::{Sinks, Sources, State};

/// A bundle whose streams yield fixed in-memory sequences, then are exhausted.
#[derive(Debug, Clone)]
#[must_use = "sources do nothing unless pulled"]
pub struct ListSources<T> {
    lists: State<VecDeque<T>>,
}

impl<T> ListSources<T> {
    /// Creates with one sequence per stream; the arity is the number of sequences.
    pub fn new<L, I>(lists: L) -> Self
    where
        L: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let lists: Vec<VecDeque<T>> = lists
            .into_iter()
            .map(|list| list.into_iter().collect())
            .collect();
        Self {
            lists: lists.into(),
        }
    }

    /// Creates with `arity` streams, each yielding its own copy of `values`.
    pub fn repeated<I>(arity: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        Self {
            lists: State::new(arity, values.into_iter().collect()),
        }
    }

    /// The number of items left in stream `index`.
    pub fn remaining(&self, index: usize) -> usize {
        self.lists[index].len()
    }
}

impl<T> Sources for ListSources<T> {
    type Item = T;

    fn arity(&self) -> usize {
        self.lists.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        self.lists.get_mut(index).pop_front()
    }
}

/// Creates a [`ListSources`] with `arity` streams, each yielding `values` in order.
pub fn from_list<I, T>(arity: usize, values: I) -> ListSources<T>
where
    I: IntoIterator<Item = T>,
    T: Clone,
{
    ListSources::repeated(arity, values)
}

/// Creates a [`ListSources`] with one stream per sequence in `lists`.
pub fn from_lists<L, I, T>(lists: L) -> ListSources<T>
where
    L: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    ListSources::new(lists)
}

/// Pulls stream `index` of `source` until it is exhausted, returning the items in order.
///
/// Panics if `index` is out of range.
#[track_caller]
pub fn to_list<S>(index: usize, source: S) -> Vec<S::Item>
where
    S: Sources,
{
    assert_index(index, source.arity());
    collect(usize::MAX, index, source)
}

/// Same as [`to_list`] but returns an error instead of panicking if `index` is out of range.
pub fn try_to_list<S>(index: usize, source: S) -> Result<Vec<S::Item>, BundleError>
where
    S: Sources,
{
    check_index(index, source.arity())?;
    Ok(collect(usize::MAX, index, source))
}

/// Pulls at most `limit` items from stream `index` of `source`, leaving the rest unpulled.
///
/// Panics if `index` is out of range.
#[track_caller]
pub fn take_list<S>(limit: usize, index: usize, source: S) -> Vec<S::Item>
where
    S: Sources,
{
    assert_index(index, source.arity());
    collect(limit, index, source)
}

fn collect<S>(limit: usize, index: usize, mut source: S) -> Vec<S::Item>
where
    S: Sources,
{
    let mut items = Vec::new();
    while items.len() < limit {
        let Some(item) = source.pull(index) else {
            tracing::trace!(index, count = items.len(), "Collected stream to exhaustion.");
            break;
        };
        items.push(item);
    }
    items
}

/// A bundle of sinks recording every pushed item, per stream, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "sinks do nothing unless pushed to"]
pub struct Capture<T> {
    pushed: State<Vec<T>>,
    ejected: State<bool>,
}

impl<T> Capture<T> {
    /// Creates with `arity` empty streams.
    pub fn new(arity: usize) -> Self {
        Self {
            pushed: State::from_fn(arity, |_| Vec::new()),
            ejected: State::new(arity, false),
        }
    }

    /// The items pushed to stream `index` so far.
    pub fn get(&self, index: usize) -> &[T] {
        &self.pushed[index]
    }

    /// Whether stream `index` has been ejected.
    pub fn is_ejected(&self, index: usize) -> bool {
        self.ejected[index]
    }

    /// Returns the items pushed to each stream, in index order.
    pub fn into_lists(self) -> Vec<Vec<T>> {
        self.pushed.into_vec()
    }
}

impl<T> Sinks<T> for Capture<T> {
    fn arity(&self) -> usize {
        self.pushed.arity()
    }

    fn push(&mut self, index: usize, item: T) {
        self.pushed.get_mut(index).push(item);
    }

    fn eject(&mut self, index: usize) {
        self.ejected.set(index, true);
    }
}
