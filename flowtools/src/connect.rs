//! [`connect`], which splits one bundle into two that share the underlying streams.
use std::cell::RefCell;
use std::rc::Rc;

use crate::{Sources, State};

/// One side of a [`connect`]ed pair.
///
/// Both sides pull through the same pump, so an item belongs to whichever side pulled it: items pulled through one
/// side are never seen by the other.
#[must_use = "sources do nothing unless pulled"]
pub struct Connected<S>
where
    S: Sources,
{
    arity: usize,
    pump: Rc<RefCell<Pump<S>>>,
}

/// Splits `source` into two bundles of the same arity which take turns consuming its streams.
///
/// Pulling `n` items from one side and `m` from the other consumes exactly `n + m` items of the underlying stream, in
/// the order the pulls were issued. The underlying source lives until both sides are dropped.
pub fn connect<S>(source: S) -> (Connected<S>, Connected<S>)
where
    S: Sources,
{
    let arity = source.arity();
    let pump = Rc::new(RefCell::new(Pump {
        slot: State::from_fn(arity, |_| None),
        source,
    }));
    (
        Connected {
            arity,
            pump: pump.clone(),
        },
        Connected { arity, pump },
    )
}

impl<S> Sources for Connected<S>
where
    S: Sources,
{
    type Item = S::Item;

    fn arity(&self) -> usize {
        self.arity
    }

    fn pull(&mut self, index: usize) -> Option<Self::Item> {
        self.pump.borrow_mut().pump(index)
    }
}

/// State shared by both sides of a [`connect`]: the source and a one-item slot per stream.
struct Pump<S>
where
    S: Sources,
{
    source: S,
    slot: State<Option<S::Item>>,
}

impl<S> Pump<S>
where
    S: Sources,
{
    /// Fills the slot from the source if it is empty, then hands its contents to the caller.
    fn pump(&mut self, index: usize) -> Option<S::Item> {
        if self.slot[index].is_none() {
            let item = self.source.pull(index);
            if item.is_none() {
                tracing::trace!(index, "Connected stream exhausted.");
            }
            self.slot.set(index, item);
        }
        self.slot.take(index)
    }
}
