//! [`Prepend`], which yields a fixed backlog before the wrapped streams.
use std::collections::VecDeque;

use crate::{Sources, State};

/// Yields each stream's backlog before handing that stream over to the wrapped source.
///
/// Built by [`prepend`](crate::prepend) (every stream gets the same backlog) or [`prepend_on`](crate::prepend_on)
/// (only the streams selected by a predicate do). Once a stream's backlog is empty, pulls go straight to the wrapped
/// source, including its exhaustion.
#[must_use = "sources do nothing unless pulled"]
pub struct Prepend<S>
where
    S: Sources,
{
    source: S,
    backlog: State<VecDeque<S::Item>>,
}

impl<S> Prepend<S>
where
    S: Sources,
    S::Item: Clone,
{
    /// Creates with the same `values` prepended to every stream of `source`.
    pub fn new<I>(values: I, source: S) -> Self
    where
        I: IntoIterator<Item = S::Item>,
    {
        Self::new_on(|_| true, values, source)
    }

    /// Creates with `values` prepended to the streams of `source` whose index satisfies `pred`.
    pub fn new_on<Pred, I>(mut pred: Pred, values: I, source: S) -> Self
    where
        Pred: FnMut(usize) -> bool,
        I: IntoIterator<Item = S::Item>,
    {
        let values: VecDeque<S::Item> = values.into_iter().collect();
        let backlog = State::from_fn(source.arity(), |index| {
            if pred(index) {
                values.clone()
            } else {
                VecDeque::new()
            }
        });
        Self { source, backlog }
    }
}

impl<S> Sources for Prepend<S>
where
    S: Sources,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        self.source.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        self.backlog
            .get_mut(index)
            .pop_front()
            .or_else(|| self.source.pull(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourcesExt, from_lists, to_list};

    #[test]
    fn test_prepend() {
        let mut source = Prepend::new([0, 1], from_lists([vec![7], vec![]]));
        assert_eq!(vec![0, 1, 7], to_list(0, &mut source));
        assert_eq!(vec![0, 1], to_list(1, &mut source));
    }

    #[test]
    fn test_prepend_on() {
        let mut source = Prepend::new_on(
            |i| i % 2 == 1,
            [9],
            from_lists([vec![1], vec![2], vec![3]]),
        );
        assert_eq!(vec![1], to_list(0, &mut source));
        assert_eq!(vec![9, 2], to_list(1, &mut source));
        assert_eq!(vec![3], to_list(2, &mut source));
    }

    #[test]
    fn test_prepend_does_not_pull_early() {
        let mut pulls = 0;
        let inner = from_lists([vec![5]]).watch(|_, _| pulls += 1);
        let mut source = Prepend::new([1, 2], inner);
        assert_eq!(Some(1), source.pull(0));
        assert_eq!(Some(2), source.pull(0));
        drop(source);
        assert_eq!(0, pulls);
    }
}
