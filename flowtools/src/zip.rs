//! [`ZipWith`], pointwise combination of two bundles.
use crate::{Sources, State};

/// Pulls `source0` and then `source1` at the same index and yields `func(index, item0, item1)`.
///
/// Exhausted as soon as either side is. If `source0` yields an item but `source1` is exhausted, that item is dropped,
/// and neither side is pulled again for that stream.
#[must_use = "sources do nothing unless pulled"]
pub struct ZipWith<S0, S1, Func> {
    source0: S0,
    source1: S1,
    func: Func,
    done: State<bool>,
}

impl<S0, S1, Func, Out> ZipWith<S0, S1, Func>
where
    S0: Sources,
    S1: Sources,
    Func: FnMut(usize, S0::Item, S1::Item) -> Out,
{
    /// Creates with combining `func` and the two sources.
    pub fn new(func: Func, source0: S0, source1: S1) -> Self {
        let done = State::new(source0.arity().min(source1.arity()), false);
        Self {
            source0,
            source1,
            func,
            done,
        }
    }
}

impl<S0, S1, Func, Out> Sources for ZipWith<S0, S1, Func>
where
    S0: Sources,
    S1: Sources,
    Func: FnMut(usize, S0::Item, S1::Item) -> Out,
{
    type Item = Out;

    fn arity(&self) -> usize {
        self.done.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        if self.done[index] {
            return None;
        }
        let pair = self
            .source0
            .pull(index)
            .and_then(|item0| Some((item0, self.source1.pull(index)?)));
        match pair {
            Some((item0, item1)) => Some((self.func)(index, item0, item1)),
            None => {
                self.done.set(index, true);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourcesExt, from_lists, to_list};

    #[test]
    fn test_zip_with() {
        let mut source = ZipWith::new(
            |i: usize, a: i32, b: &str| format!("{i}:{a}{b}"),
            from_lists([vec![1, 2, 3], vec![4]]),
            from_lists([vec!["a", "b"], vec!["c", "d"]]),
        );
        assert_eq!(vec!["0:1a", "0:2b"], to_list(0, &mut source));
        assert_eq!(vec!["1:4c"], to_list(1, &mut source));
    }

    #[test]
    fn test_zip_with_stops_pulling() {
        let mut pulls0 = 0;
        let left = from_lists([vec![1, 2, 3]]).watch(|_, _| pulls0 += 1);
        let mut source = left.zip_with(from_lists([vec![10]]), |_, a, b| a + b);
        assert_eq!(Some(11), source.pull(0));
        assert_eq!(None, source.pull(0));
        assert_eq!(None, source.pull(0));
        drop(source);

        assert_eq!(2, pulls0);
    }
}
