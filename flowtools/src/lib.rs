#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod connect;
pub mod discard;
pub mod dup;
pub mod error;
pub mod eval;
pub mod finalize;
pub mod folds;
pub mod for_each;
pub mod funnel;
pub mod groups;
pub mod head;
pub mod iter;
pub mod list;
pub mod map;
pub mod pack;
pub mod prepend;
pub mod project;
pub mod repeat;
pub mod state;
pub mod watch;
pub mod zip;

pub use connect::{Connected, connect};
use discard::{Discard, Ignore};
use dup::{DupSinks, DupSourceSink};
pub use error::{BundleError, check_index};
pub use eval::drain;
use finalize::{FinalizeSinks, FinalizeSources};
use folds::Folds;
use for_each::ForEach;
use funnel::Funnel;
use groups::{Groups, GroupsBy};
pub use head::head;
#[cfg(feature = "futures")]
#[cfg_attr(docsrs, doc(cfg(feature = "futures")))]
pub use iter::into_stream;
use iter::SourceIter;
pub use list::{Capture, ListSources, from_list, from_lists, take_list, to_list, try_to_list};
use map::{MapSinks, MapSources};
use pack::Pack;
use prepend::Prepend;
use project::{ProjectSinks, ProjectSources};
use repeat::{Repeat, Replicate};
pub use state::State;
use watch::{WatchSinks, WatchSources};
use zip::ZipWith;

/// A bundle of `arity` independent pull-based streams sharing one item type.
///
/// Each call to [`Sources::pull`] has exactly one outcome: `Some(item)` delivers the next item of the stream at
/// `index`, `None` signals that the stream is exhausted. Implementations must be fused: once a stream has returned
/// `None` it keeps returning `None`.
///
/// Streams are addressed by an index in `0..arity`. Combinators do not check indices; the outer-facing entry points
/// ([`to_list`], [`head`], [`ProjectSources::new`], ...) do, and panic on misuse.
pub trait Sources {
    /// The item type shared by every stream of the bundle.
    type Item;

    /// The number of streams in the bundle.
    fn arity(&self) -> usize;

    /// Pulls the next item of stream `index`, or `None` if that stream is exhausted.
    fn pull(&mut self, index: usize) -> Option<Self::Item>;
}

impl<S> Sources for &mut S
where
    S: Sources + ?Sized,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        (**self).arity()
    }
    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        (**self).pull(index)
    }
}

impl<S> Sources for Box<S>
where
    S: Sources + ?Sized,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        (**self).arity()
    }
    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        (**self).pull(index)
    }
}

/// A bundle of `arity` independent push-based consumers.
///
/// [`Sinks::eject`] signals that no more items will be pushed to the stream at `index`. Combinators forward ejects to
/// every wrapped sink, so implementations must tolerate receiving more than one.
pub trait Sinks<Item> {
    /// The number of streams in the bundle.
    fn arity(&self) -> usize;

    /// Pushes `item` to stream `index`.
    fn push(&mut self, index: usize, item: Item);

    /// Signals that stream `index` will receive no more items.
    fn eject(&mut self, index: usize);
}

impl<Si, Item> Sinks<Item> for &mut Si
where
    Si: Sinks<Item> + ?Sized,
{
    fn arity(&self) -> usize {
        (**self).arity()
    }
    fn push(&mut self, index: usize, item: Item) {
        (**self).push(index, item)
    }
    fn eject(&mut self, index: usize) {
        (**self).eject(index)
    }
}

impl<Si, Item> Sinks<Item> for Box<Si>
where
    Si: Sinks<Item> + ?Sized,
{
    fn arity(&self) -> usize {
        (**self).arity()
    }
    fn push(&mut self, index: usize, item: Item) {
        (**self).push(index, item)
    }
    fn eject(&mut self, index: usize) {
        (**self).eject(index)
    }
}

/// Method-chaining forms of the [`Sources`] combinators.
///
/// Every method wraps `self` and returns a new bundle; no work happens until the result is pulled.
pub trait SourcesExt: Sources {
    /// Selects stream `index` as a single-stream bundle. Panics if `index` is out of range.
    fn project(self, index: usize) -> ProjectSources<Self>
    where
        Self: Sized,
    {
        ProjectSources::new(index, self)
    }

    /// Applies `func` to each item along with the index of its stream.
    fn map<Func, Out>(self, func: Func) -> MapSources<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize, Self::Item) -> Out,
    {
        MapSources::new(func, self)
    }

    /// Calls `func` on each item before passing it along.
    fn watch<Func>(self, func: Func) -> WatchSources<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize, &Self::Item),
    {
        WatchSources::new(func, self)
    }

    /// Yields `values` at the start of every stream.
    fn prepend<I>(self, values: I) -> Prepend<Self>
    where
        Self: Sized,
        Self::Item: Clone,
        I: IntoIterator<Item = Self::Item>,
    {
        Prepend::new(values, self)
    }

    /// Yields `values` at the start of every stream whose index satisfies `pred`.
    fn prepend_on<Pred, I>(self, pred: Pred, values: I) -> Prepend<Self>
    where
        Self: Sized,
        Self::Item: Clone,
        Pred: FnMut(usize) -> bool,
        I: IntoIterator<Item = Self::Item>,
    {
        Prepend::new_on(pred, values, self)
    }

    /// Yields the lengths of runs of equal consecutive items.
    fn groups(self) -> Groups<Self>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Groups::by_eq(self)
    }

    /// Yields the lengths of runs of consecutive items related by `eq`.
    fn groups_by<Func>(self, eq: Func) -> GroupsBy<Self, Func>
    where
        Self: Sized,
        Func: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        GroupsBy::new(eq, self)
    }

    /// Treats `self` as flags and yields the items of `values` at `true` flag positions.
    fn pack<Values>(self, values: Values) -> Pack<Self, Values>
    where
        Self: Sized + Sources<Item = bool>,
        Values: Sources,
    {
        Pack::new(self, values)
    }

    /// Treats `self` as segment lengths and folds each segment of `values`.
    fn folds<Values, Accum, Func>(
        self,
        values: Values,
        initial: Accum,
        combine: Func,
    ) -> Folds<Self, Values, Accum, Func>
    where
        Self: Sized + Sources<Item = usize>,
        Values: Sources,
        Accum: Clone,
        Func: FnMut(Accum, Values::Item) -> Accum,
    {
        Folds::new(combine, initial, self, values)
    }

    /// Combines the items of `self` and `other` pointwise.
    fn zip_with<Other, Func, Out>(self, other: Other, func: Func) -> ZipWith<Self, Other, Func>
    where
        Self: Sized,
        Other: Sources,
        Func: FnMut(usize, Self::Item, Other::Item) -> Out,
    {
        ZipWith::new(func, self, other)
    }

    /// Concatenates all streams, in index order, into a single stream.
    fn funnel(self) -> Funnel<Self>
    where
        Self: Sized,
    {
        Funnel::new(self)
    }

    /// Sends a copy of each pulled item to `sink`, and ejects `sink` when a stream is exhausted.
    fn dup_to<Si>(self, sink: Si) -> DupSourceSink<Self, Si>
    where
        Self: Sized,
        Self::Item: Clone,
        Si: Sinks<Self::Item>,
    {
        DupSourceSink::new(self, sink)
    }

    /// Calls `func` with the index the first time each stream is exhausted.
    fn finalize<Func>(self, func: Func) -> FinalizeSources<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize),
    {
        FinalizeSources::new(func, self)
    }

    /// Splits into two bundles that share the underlying streams. See [`connect`].
    fn connect(self) -> (Connected<Self>, Connected<Self>)
    where
        Self: Sized,
    {
        connect(self)
    }

    /// Adapts stream `index` into an [`Iterator`]. Panics if `index` is out of range.
    fn into_iter_at(self, index: usize) -> SourceIter<Self>
    where
        Self: Sized,
    {
        SourceIter::new(index, self)
    }

    /// Pulls every item of every stream into the matching stream of `sink`. See [`drain`].
    fn drain_into<Si>(self, sink: Si)
    where
        Self: Sized,
        Si: Sinks<Self::Item>,
    {
        drain(self, sink)
    }
}
impl<S> SourcesExt for S where S: Sources + ?Sized {}

/// Method-chaining forms of the [`Sinks`] combinators.
pub trait SinksExt<Item>: Sinks<Item> {
    /// Selects stream `index` as a single-stream bundle. Panics if `index` is out of range.
    fn project(self, index: usize) -> ProjectSinks<Self>
    where
        Self: Sized,
    {
        ProjectSinks::new::<Item>(index, self)
    }

    /// Applies `func` to each pushed item before passing it along.
    fn map<Func, In>(self, func: Func) -> MapSinks<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize, In) -> Item,
    {
        MapSinks::new::<In>(func, self)
    }

    /// Calls `func` on each pushed item before passing it along.
    fn watch<Func>(self, func: Func) -> WatchSinks<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize, &Item),
    {
        WatchSinks::new::<Item>(func, self)
    }

    /// Sends each pushed item to both `self` and `other`.
    fn dup<Other>(self, other: Other) -> DupSinks<Self, Other>
    where
        Self: Sized,
        Item: Clone,
        Other: Sinks<Item>,
    {
        DupSinks::new::<Item>(self, other)
    }

    /// Calls `func` with the index the first time each stream is ejected.
    fn finalize<Func>(self, func: Func) -> FinalizeSinks<Self, Func>
    where
        Self: Sized,
        Func: FnMut(usize),
    {
        FinalizeSinks::new::<Item>(func, self)
    }
}
impl<Si, Item> SinksExt<Item> for Si where Si: Sinks<Item> + ?Sized {}

/// Creates a single-stream [`ProjectSources`] forwarding to stream `index` of `source`.
pub fn project_sources<S>(index: usize, source: S) -> ProjectSources<S>
where
    S: Sources,
{
    ProjectSources::new(index, source)
}

/// Creates a single-stream [`ProjectSinks`] forwarding to stream `index` of `sink`.
pub fn project_sinks<Si, Item>(index: usize, sink: Si) -> ProjectSinks<Si>
where
    Si: Sinks<Item>,
{
    ProjectSinks::new::<Item>(index, sink)
}

/// Creates an infinite [`Repeat`] source where stream `i` always yields `func(i)`.
pub fn repeat<Func, Item>(arity: usize, func: Func) -> Repeat<Func>
where
    Func: FnMut(usize) -> Item,
{
    Repeat::new(arity, func)
}

/// Creates a [`Replicate`] source where stream `i` yields `func(i)` exactly `length` times.
pub fn replicate<Func, Item>(arity: usize, length: usize, func: Func) -> Replicate<Func>
where
    Func: FnMut(usize) -> Item,
{
    Replicate::new(arity, length, func)
}

/// Creates a [`Prepend`] source which yields `values` at the start of every stream of `source`.
pub fn prepend<I, S>(values: I, source: S) -> Prepend<S>
where
    I: IntoIterator<Item = S::Item>,
    S: Sources,
    S::Item: Clone,
{
    Prepend::new(values, source)
}

/// Creates a [`Prepend`] source which yields `values` at the start of the streams whose index satisfies `pred`.
pub fn prepend_on<Pred, I, S>(pred: Pred, values: I, source: S) -> Prepend<S>
where
    Pred: FnMut(usize) -> bool,
    I: IntoIterator<Item = S::Item>,
    S: Sources,
    S::Item: Clone,
{
    Prepend::new_on(pred, values, source)
}

/// Creates a [`MapSources`] that applies `func` to each pulled item.
pub fn map_sources<Func, S, Out>(func: Func, source: S) -> MapSources<S, Func>
where
    Func: FnMut(usize, S::Item) -> Out,
    S: Sources,
{
    MapSources::new(func, source)
}

/// Creates a [`MapSinks`] that applies `func` to each pushed item.
pub fn map_sinks<Func, In, Out, Si>(func: Func, sink: Si) -> MapSinks<Si, Func>
where
    Func: FnMut(usize, In) -> Out,
    Si: Sinks<Out>,
{
    MapSinks::new::<In>(func, sink)
}

/// Creates a [`DupSinks`] that pushes each item to `sink0` and then to `sink1`.
pub fn dup_sinks<Si0, Si1, Item>(sink0: Si0, sink1: Si1) -> DupSinks<Si0, Si1>
where
    Si0: Sinks<Item>,
    Si1: Sinks<Item>,
    Item: Clone,
{
    DupSinks::new::<Item>(sink0, sink1)
}

/// Creates a [`DupSourceSink`] that copies each item pulled from `source` into `sink`.
pub fn dup_source_sink<S, Si>(source: S, sink: Si) -> DupSourceSink<S, Si>
where
    S: Sources,
    S::Item: Clone,
    Si: Sinks<S::Item>,
{
    DupSourceSink::new(source, sink)
}

/// Same as [`dup_source_sink`] with the arguments flipped.
pub fn dup_sink_source<Si, S>(sink: Si, source: S) -> DupSourceSink<S, Si>
where
    S: Sources,
    S::Item: Clone,
    Si: Sinks<S::Item>,
{
    DupSourceSink::new(source, sink)
}

/// Creates a [`Groups`] source yielding the lengths of runs of equal consecutive items.
pub fn groups<S>(source: S) -> Groups<S>
where
    S: Sources,
    S::Item: PartialEq,
{
    Groups::by_eq(source)
}

/// Creates a [`GroupsBy`] source yielding the lengths of runs of consecutive items related by `eq`.
pub fn groups_by<Func, S>(eq: Func, source: S) -> GroupsBy<S, Func>
where
    Func: FnMut(&S::Item, &S::Item) -> bool,
    S: Sources,
{
    GroupsBy::new(eq, source)
}

/// Creates a [`Pack`] source yielding the items of `values` at the positions where `flags` is `true`.
pub fn pack<Flags, Values>(flags: Flags, values: Values) -> Pack<Flags, Values>
where
    Flags: Sources<Item = bool>,
    Values: Sources,
{
    Pack::new(flags, values)
}

/// Creates a [`Folds`] source folding each segment of `values` whose length is given by `lengths`.
pub fn folds<Func, Accum, Lengths, Values>(
    combine: Func,
    initial: Accum,
    lengths: Lengths,
    values: Values,
) -> Folds<Lengths, Values, Accum, Func>
where
    Func: FnMut(Accum, Values::Item) -> Accum,
    Accum: Clone,
    Lengths: Sources<Item = usize>,
    Values: Sources,
{
    Folds::new(combine, initial, lengths, values)
}

/// Creates a [`ZipWith`] source combining the items of `source0` and `source1` pointwise.
pub fn zip_with<Func, S0, S1, Out>(func: Func, source0: S0, source1: S1) -> ZipWith<S0, S1, Func>
where
    Func: FnMut(usize, S0::Item, S1::Item) -> Out,
    S0: Sources,
    S1: Sources,
{
    ZipWith::new(func, source0, source1)
}

/// Creates a single-stream [`Funnel`] concatenating every stream of `source` in index order.
pub fn funnel<S>(source: S) -> Funnel<S>
where
    S: Sources,
{
    Funnel::new(source)
}

/// Creates a [`WatchSources`] that calls `func` on each pulled item.
pub fn watch_sources<Func, S>(func: Func, source: S) -> WatchSources<S, Func>
where
    Func: FnMut(usize, &S::Item),
    S: Sources,
{
    WatchSources::new(func, source)
}

/// Creates a [`WatchSinks`] that calls `func` on each pushed item.
pub fn watch_sinks<Func, Item, Si>(func: Func, sink: Si) -> WatchSinks<Si, Func>
where
    Func: FnMut(usize, &Item),
    Si: Sinks<Item>,
{
    WatchSinks::new::<Item>(func, sink)
}

/// Creates a sink of the given arity which calls `func` on each pushed item and then drops it.
pub fn trigger<Func, Item>(arity: usize, func: Func) -> WatchSinks<Discard, Func>
where
    Func: FnMut(usize, &Item),
{
    WatchSinks::new::<Item>(func, Discard::new(arity))
}

/// Creates a [`Discard`] sink which drops each pushed item before returning.
pub fn discard(arity: usize) -> Discard {
    Discard::new(arity)
}

/// Creates an [`Ignore`] sink which accepts every item without looking at it.
pub fn ignore(arity: usize) -> Ignore {
    Ignore::new(arity)
}

/// Creates a [`ForEach`] sink that consumes each pushed item with `func`.
pub fn for_each<Func, Item>(arity: usize, func: Func) -> ForEach<Func>
where
    Func: FnMut(usize, Item),
{
    ForEach::new::<Item>(arity, func)
}

/// Creates a [`FinalizeSources`] which calls `func` the first time each stream is exhausted.
pub fn finalize_sources<Func, S>(func: Func, source: S) -> FinalizeSources<S, Func>
where
    Func: FnMut(usize),
    S: Sources,
{
    FinalizeSources::new(func, source)
}

/// Creates a [`FinalizeSinks`] which calls `func` the first time each stream is ejected.
pub fn finalize_sinks<Func, Item, Si>(func: Func, sink: Si) -> FinalizeSinks<Si, Func>
where
    Func: FnMut(usize),
    Si: Sinks<Item>,
{
    FinalizeSinks::new::<Item>(func, sink)
}
