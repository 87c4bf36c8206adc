//! [`drain`], which runs a source bundle into a sink bundle.
use crate::{Sinks, Sources};

/// Moves every item of every stream of `source` into the same stream of `sink`, ejecting each stream when done.
///
/// Covers streams `0..min(source.arity(), sink.arity())`. Each stream is drained to exhaustion and ejected before the
/// next one is started.
pub fn drain<S, Si>(mut source: S, mut sink: Si)
where
    S: Sources,
    Si: Sinks<S::Item>,
{
    let arity = source.arity().min(sink.arity());
    for index in 0..arity {
        let mut count = 0_usize;
        while let Some(item) = source.pull(index) {
            sink.push(index, item);
            count += 1;
        }
        sink.eject(index);
        tracing::trace!(index, count, "Drained stream.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capture, from_lists};

    #[test]
    fn test_drain() {
        let mut capture = Capture::new(2);
        drain(from_lists([vec![1, 2], vec![], vec![9]]), &mut capture);
        assert!(capture.is_ejected(0));
        assert!(capture.is_ejected(1));
        assert_eq!(vec![vec![1, 2], vec![]], capture.into_lists());
    }

    #[test]
    fn test_drain_into_wider_sink() {
        let mut capture = Capture::new(3);
        drain(from_lists([vec!['a']]), &mut capture);
        assert!(capture.is_ejected(0));
        assert!(!capture.is_ejected(1));
        assert_eq!(&['a'], capture.get(0));
    }
}
