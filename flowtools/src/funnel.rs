//! [`Funnel`], concatenation of all streams of a bundle.
use crate::Sources;

/// A single-stream bundle yielding all of stream 0, then all of stream 1, and so on.
///
/// Moving past a stream costs one extra pull of that stream, which returns `None`.
#[must_use = "sources do nothing unless pulled"]
pub struct Funnel<S> {
    source: S,
    cursor: usize,
}

impl<S> Funnel<S>
where
    S: Sources,
{
    /// Creates with the wrapped `source`.
    pub fn new(source: S) -> Self {
        Self { source, cursor: 0 }
    }
}

impl<S> Sources for Funnel<S>
where
    S: Sources,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        1
    }

    fn pull(&mut self, _index: usize) -> Option<Self::Item> {
        while self.cursor < self.source.arity() {
            if let Some(item) = self.source.pull(self.cursor) {
                return Some(item);
            }
            self.cursor += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_lists, to_list};

    #[test]
    fn test_funnel() {
        let mut source = Funnel::new(from_lists([vec![1, 2], vec![], vec![3]]));
        assert_eq!(vec![1, 2, 3], to_list(0, &mut source));
        assert_eq!(None, source.pull(0));
    }

    #[test]
    fn test_funnel_empty_bundle() {
        let mut source = Funnel::new(from_lists(Vec::<Vec<u8>>::new()));
        assert_eq!(1, source.arity());
        assert_eq!(None, source.pull(0));
    }
}
