//! [`ProjectSources`] and [`ProjectSinks`], single-stream views of a bundle.
use crate::error::{BundleError, assert_index, check_index};
use crate::{Sinks, Sources};

/// A single-stream bundle whose only stream is stream `index` of the wrapped source.
#[must_use = "sources do nothing unless pulled"]
pub struct ProjectSources<S> {
    source: S,
    index: usize,
}

impl<S> ProjectSources<S>
where
    S: Sources,
{
    /// Projects stream `index` of `source`. Panics if `index` is out of range.
    #[track_caller]
    pub fn new(index: usize, source: S) -> Self {
        assert_index(index, source.arity());
        Self { source, index }
    }

    /// Projects stream `index` of `source`, or returns an error if `index` is out of range.
    pub fn try_new(index: usize, source: S) -> Result<Self, BundleError> {
        check_index(index, source.arity())?;
        Ok(Self { source, index })
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S> Sources for ProjectSources<S>
where
    S: Sources,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        1
    }

    fn pull(&mut self, _index: usize) -> Option<Self::Item> {
        self.source.pull(self.index)
    }
}

/// A single-stream bundle whose only stream forwards to stream `index` of the wrapped sink.
#[must_use = "sinks do nothing unless pushed to"]
pub struct ProjectSinks<Si> {
    sink: Si,
    index: usize,
}

impl<Si> ProjectSinks<Si> {
    /// Projects stream `index` of `sink`. Panics if `index` is out of range.
    #[track_caller]
    pub fn new<Item>(index: usize, sink: Si) -> Self
    where
        Si: Sinks<Item>,
    {
        assert_index(index, sink.arity());
        Self { sink, index }
    }

    /// Projects stream `index` of `sink`, or returns an error if `index` is out of range.
    pub fn try_new<Item>(index: usize, sink: Si) -> Result<Self, BundleError>
    where
        Si: Sinks<Item>,
    {
        check_index(index, sink.arity())?;
        Ok(Self { sink, index })
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> Si {
        self.sink
    }
}

impl<Si, Item> Sinks<Item> for ProjectSinks<Si>
where
    Si: Sinks<Item>,
{
    fn arity(&self) -> usize {
        1
    }

    fn push(&mut self, _index: usize, item: Item) {
        self.sink.push(self.index, item)
    }

    fn eject(&mut self, _index: usize) {
        self.sink.eject(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capture, from_lists, to_list};

    #[test]
    fn test_project_sources() {
        let source = from_lists([vec![1, 2], vec![3, 4, 5]]);
        let mut projected = ProjectSources::new(1, source);
        assert_eq!(1, projected.arity());
        assert_eq!(vec![3, 4, 5], to_list(0, &mut projected));
        assert_eq!(vec![1, 2], to_list(0, &mut projected.into_inner()));
    }

    #[test]
    fn test_project_sinks() {
        let mut capture = Capture::new(3);
        let mut projected = ProjectSinks::new(2, &mut capture);
        projected.push(0, 'a');
        projected.push(0, 'b');
        Sinks::<char>::eject(&mut projected, 0);

        assert_eq!(vec![vec![], vec![], vec!['a', 'b']], capture.clone().into_lists());
        assert!(capture.is_ejected(2));
        assert!(!capture.is_ejected(0));
    }

    #[test]
    fn test_try_new_out_of_range() {
        let source = from_lists([vec![1]]);
        assert_eq!(
            Some(BundleError::IndexOutOfRange { index: 1, arity: 1 }),
            ProjectSources::try_new(1, source).err()
        );
        let capture = Capture::<u8>::new(0);
        assert!(ProjectSinks::try_new::<u8>(0, capture).is_err());
    }

    #[test]
    #[should_panic(expected = "stream index 5 is out of range")]
    fn test_new_out_of_range_panics() {
        let _ = ProjectSources::new(5, from_lists([vec![0_u8]]));
    }
}
