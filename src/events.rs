//! Observer contracts invoked by the command surface (§6.2): one for
//! bookkeeping notifications (a key was created, modified, or deleted) and
//! one for command propagation (replicating a command's effect verbatim to
//! a downstream consumer).
//!
//! Kept as traits, not concrete types, so the hard-core algorithms and the
//! command surface are testable without a running server around them — the
//! reference `VecEventSink`/`VecPropagationSink` pair below is what the
//! test suite uses as a double.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::elem::Elem;

/// What kind of observable change a [`KeySpace`](crate::keyspace::KeySpace)
/// binding underwent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A binding was created where none existed.
    Created,
    /// An existing binding's value changed without being created or
    /// removed.
    Modified,
    /// A binding was removed (the set it held emptied out).
    Deleted,
}

/// A single propagated operation, mirroring the command it equates to.
///
/// Only `Remove` exists today: `POP-COUNT` is the sole producer of
/// propagation, and every emitted element propagates as an equivalent
/// single-element `REMOVE` (§4.4, §6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagatedOp {
    Remove,
}

/// Notified once per observable mutation a command makes.
pub trait EventSink {
    fn notify(&mut self, kind: EventKind, name: &str);
}

/// Notified once per element a destructive sampling command emits, so a
/// downstream replica can apply the same removal without re-running the
/// random draw.
pub trait PropagationSink {
    fn propagate(&mut self, op: PropagatedOp, name: &str, args: &[Elem<'_>]);
}

/// A [`EventSink`] that records every notification, for test assertions.
#[derive(Debug, Default)]
pub struct VecEventSink {
    pub events: Vec<(EventKind, Box<str>)>,
}

impl EventSink for VecEventSink {
    fn notify(&mut self, kind: EventKind, name: &str) {
        self.events.push((kind, name.into()));
    }
}

/// A [`PropagationSink`] that records every propagated operation as owned
/// data, for test assertions.
#[derive(Debug, Default)]
pub struct VecPropagationSink {
    pub ops: Vec<(PropagatedOp, Box<str>, Vec<Box<[u8]>>)>,
}

impl PropagationSink for VecPropagationSink {
    fn propagate(&mut self, op: PropagatedOp, name: &str, args: &[Elem<'_>]) {
        let args = args.iter().map(|elem| elem.to_owned_bytes()).collect();
        self.ops.push((op, name.into(), args));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_event_sink_records_in_order() {
        let mut sink = VecEventSink::default();
        sink.notify(EventKind::Created, "s");
        sink.notify(EventKind::Deleted, "s");
        assert_eq!(
            sink.events,
            alloc::vec![
                (EventKind::Created, Box::from("s")),
                (EventKind::Deleted, Box::from("s")),
            ]
        );
    }

    #[test]
    fn vec_propagation_sink_records_args_as_owned_bytes() {
        let mut sink = VecPropagationSink::default();
        sink.propagate(PropagatedOp::Remove, "s", &[Elem::Int(1), Elem::Bytes(b"x")]);
        assert_eq!(sink.ops.len(), 1);
        let (op, name, args) = &sink.ops[0];
        assert_eq!(*op, PropagatedOp::Remove);
        assert_eq!(&**name, "s");
        assert_eq!(&*args[0], b"1".as_slice());
        assert_eq!(&*args[1], b"x".as_slice());
    }
}
