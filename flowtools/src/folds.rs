//! [`Folds`], segmented folding.
use crate::{Sources, State};

/// Folds consecutive segments of `values`, with segment lengths given by `lengths`.
///
/// Each pull takes one length `n`, then folds exactly `n` values left to right with `combine`, starting from a clone
/// of `initial`. A length of zero yields `initial` without pulling any values.
///
/// If `values` runs out in the middle of a segment, the partial result is dropped and the result stream is exhausted
/// from then on. Later segments, including empty ones, are never yielded.
#[must_use = "sources do nothing unless pulled"]
pub struct Folds<Lengths, Values, Accum, Func> {
    lengths: Lengths,
    values: Values,
    initial: Accum,
    combine: Func,
    done: State<bool>,
}

impl<Lengths, Values, Accum, Func> Folds<Lengths, Values, Accum, Func>
where
    Lengths: Sources<Item = usize>,
    Values: Sources,
    Accum: Clone,
    Func: FnMut(Accum, Values::Item) -> Accum,
{
    /// Creates with the fold function and initial accumulator, the segment `lengths`, and the `values` to fold.
    pub fn new(combine: Func, initial: Accum, lengths: Lengths, values: Values) -> Self {
        let done = State::new(lengths.arity().min(values.arity()), false);
        Self {
            lengths,
            values,
            initial,
            combine,
            done,
        }
    }

    fn fold_segment(&mut self, index: usize) -> Option<Accum> {
        let length = self.lengths.pull(index)?;
        let mut accum = self.initial.clone();
        for consumed in 0..length {
            let Some(item) = self.values.pull(index) else {
                tracing::debug!(
                    index,
                    length,
                    consumed,
                    "Values exhausted mid-segment, dropping partial fold."
                );
                return None;
            };
            accum = (self.combine)(accum, item);
        }
        Some(accum)
    }
}

impl<Lengths, Values, Accum, Func> Sources for Folds<Lengths, Values, Accum, Func>
where
    Lengths: Sources<Item = usize>,
    Values: Sources,
    Accum: Clone,
    Func: FnMut(Accum, Values::Item) -> Accum,
{
    type Item = Accum;

    fn arity(&self) -> usize {
        self.done.arity()
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        if self.done[index] {
            return None;
        }
        let accum = self.fold_segment(index);
        if accum.is_none() {
            self.done.set(index, true);
        }
        accum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourcesExt, from_list, from_lists, to_list};

    #[test]
    fn test_folds() {
        let lengths = from_list(1, [1, 2, 4, 0, 1, 5]);
        let values = from_list(1, [10, 20, 30, 40, 50, 60, 70, 80, 90]);
        let mut source = Folds::new(|acc: i32, x: i32| acc + x, 0, lengths, values);
        assert_eq!(vec![10, 50, 220, 0, 80], to_list(0, &mut source));
    }

    #[test]
    fn test_folds_trailing_empty_segment_unreachable() {
        let lengths = from_list(1, [2, 0, 0]);
        let values = from_list(1, [1]);
        let mut source = Folds::new(|acc: i32, x: i32| acc + x, 100, lengths, values);
        assert_eq!(None, source.pull(0));
        assert_eq!(None, source.pull(0));
    }

    #[test]
    fn test_folds_empty_segment_pulls_nothing() {
        let mut value_pulls = 0;
        let lengths = from_list(1, [0, 0]);
        let values = from_list(1, ["x"]).watch(|_, _| value_pulls += 1);
        let mut source = Folds::new(
            |acc: String, x: &str| acc + x,
            String::from("-"),
            lengths,
            values,
        );
        assert_eq!(vec!["-", "-"], to_list(0, &mut source));
        drop(source);

        assert_eq!(0, value_pulls);
    }

    #[test]
    fn test_folds_per_stream() {
        let lengths = from_lists([vec![2, 1], vec![3]]);
        let values = from_lists([vec!["a", "b", "c"], vec!["d", "e", "f"]]);
        let mut source = Folds::new(|acc: String, x: &str| acc + x, String::new(), lengths, values);
        assert_eq!(vec!["def"], to_list(1, &mut source));
        assert_eq!(vec!["ab", "c"], to_list(0, &mut source));
    }
}
