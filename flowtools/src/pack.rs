//! [`Pack`], selection of items by a stream of flags.
use crate::{Sources, State};

/// Yields the items of `values` at the positions where `flags` is `true`.
///
/// Each pull consumes flags until it finds a `true` one, then pulls exactly one value. A run of `n` `false` flags
/// costs `n` flag pulls and no value pulls. If either stream is exhausted along the way, the result stream is
/// exhausted from then on.
#[must_use = "sources do nothing unless pulled"]
pub struct Pack<Flags, Values> {
    flags: Flags,
    values: Values,
    done: State<bool>,
}

impl<Flags, Values> Pack<Flags, Values>
where
    Flags: Sources<Item = bool>,
    Values: Sources,
{
    /// Creates with the `flags` selecting from `values`.
    pub fn new(flags: Flags, values: Values) -> Self {
        let done = State::new(flags.arity().min(values.arity()), false);
        Self {
            flags,
            values,
            done,
        }
    }

    fn select(&mut self, index: usize) -> Option<Values::Item> {
        loop {
            if self.flags.pull(index)? {
                return self.values.pull(index);
            }
        }
    }
}

impl<Flags, Values> Sources for Pack<Flags, Values>
where
    Flags: Sources<Item = bool>,
    Values: Sources,
{
    type Item = Values::Item;

    fn arity(&self) -> usize {
        self.done.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        if self.done[index] {
            return None;
        }
        let item = self.select(index);
        if item.is_none() {
            self.done.set(index, true);
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourcesExt, from_list, from_lists, to_list};

    #[test]
    fn test_pack() {
        let flags = from_list(1, [true, false, false, true, true, false]);
        let values = from_list(1, ['a', 'b', 'c', 'd']);
        let mut source = Pack::new(flags, values);
        assert_eq!(vec!['a', 'b', 'c'], to_list(0, &mut source));
    }

    #[test]
    fn test_pack_pull_counts() {
        let mut flag_pulls = 0;
        let mut value_pulls = 0;
        let flags = from_list(1, [false, false, false, true]).watch(|_, _| flag_pulls += 1);
        let values = from_list(1, [10, 20]).watch(|_, _| value_pulls += 1);
        let mut source = Pack::new(flags, values);
        assert_eq!(Some(10), source.pull(0));
        drop(source);

        assert_eq!(4, flag_pulls);
        assert_eq!(1, value_pulls);
    }

    #[test]
    fn test_pack_values_exhausted() {
        let flags = from_lists([vec![true, true, true], vec![false, true]]);
        let values = from_lists([vec![1], vec![2, 3]]);
        let mut source = Pack::new(flags, values);
        assert_eq!(vec![1], to_list(0, &mut source));
        assert_eq!(None, source.pull(0));
        assert_eq!(vec![2], to_list(1, &mut source));
    }
}
