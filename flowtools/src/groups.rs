//! [`GroupsBy`] and [`Groups`], run-length grouping.
use crate::{Sources, State};

/// [`GroupsBy`] using [`PartialEq`] to compare items.
pub type Groups<S> = GroupsBy<S, fn(&<S as Sources>::Item, &<S as Sources>::Item) -> bool>;

/// Yields the length of each run of consecutive items for which `eq(prev, next)` holds.
///
/// Each pull keeps pulling the wrapped stream until the current run ends. The item that ended it starts the next run,
/// so it is held in a per-stream cell until the following pull. Pulling an exhausted stream with no run in progress
/// yields `None`; no empty group is ever emitted. The lengths of a stream's groups always sum to the number of items in
/// that stream.
#[must_use = "sources do nothing unless pulled"]
pub struct GroupsBy<S, Func>
where
    S: Sources,
{
    source: S,
    eq: Func,
    // First item of the next run, if the previous pull already took it.
    pending: State<Option<S::Item>>,
}

impl<S, Func> GroupsBy<S, Func>
where
    S: Sources,
    Func: FnMut(&S::Item, &S::Item) -> bool,
{
    /// Creates with the run relation `eq` and wrapped `source`.
    pub fn new(eq: Func, source: S) -> Self {
        let pending = State::from_fn(source.arity(), |_| None);
        Self {
            source,
            eq,
            pending,
        }
    }
}

impl<S> Groups<S>
where
    S: Sources,
    S::Item: PartialEq,
{
    /// Creates, grouping runs of equal items of `source`.
    pub fn by_eq(source: S) -> Self {
        Self::new(PartialEq::eq, source)
    }
}

impl<S, Func> Sources for GroupsBy<S, Func>
where
    S: Sources,
    Func: FnMut(&S::Item, &S::Item) -> bool,
{
    type Item = usize;

    fn arity(&self) -> usize {
        self.source.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        let mut prev = match self.pending.take(index) {
            Some(item) => item,
            None => self.source.pull(index)?,
        };
        let mut count = 1;
        while let Some(next) = self.source.pull(index) {
            if !(self.eq)(&prev, &next) {
                self.pending.set(index, Some(next));
                return Some(count);
            }
            prev = next;
            count += 1;
        }
        Some(count)
    }
}
