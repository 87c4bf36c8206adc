//! [`head`], splitting the front off one stream.
use crate::Sources;
use crate::connect::{Connected, connect};
use crate::error::assert_index;
use crate::list::take_list;

/// Pulls up to `length` items from stream `index` of `source`, returning them with the rest of the bundle.
///
/// Fewer than `length` items are returned if the stream runs out first. The returned bundle continues right after the
/// last item taken; other streams are untouched. Panics if `index` is out of range.
#[track_caller]
pub fn head<S>(length: usize, source: S, index: usize) -> (Vec<S::Item>, Connected<S>)
where
    S: Sources,
{
    assert_index(index, source.arity());
    let (mut front, rest) = connect(source);
    let items = take_list(length, index, &mut front);
    (items, rest)
}
