use crate::compare::{CompareOp, ComparePath};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for comparisons and condition evaluation.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: OpCounters,
    pub(crate) paths: PathCounters,
    pub(crate) conditions: ConditionCounters,
}

///
/// OpCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpCounters {
    pub eq: u64,
    pub ne: u64,
    pub lt: u64,
    pub lte: u64,
    pub gte: u64,
    pub gt: u64,
}

impl OpCounters {
    #[must_use]
    pub const fn get(&self, op: CompareOp) -> u64 {
        match op {
            CompareOp::Eq => self.eq,
            CompareOp::Ne => self.ne,
            CompareOp::Lt => self.lt,
            CompareOp::Lte => self.lte,
            CompareOp::Gte => self.gte,
            CompareOp::Gt => self.gt,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.eq
            .saturating_add(self.ne)
            .saturating_add(self.lt)
            .saturating_add(self.lte)
            .saturating_add(self.gte)
            .saturating_add(self.gt)
    }

    pub(crate) const fn bump(&mut self, op: CompareOp) {
        let slot = match op {
            CompareOp::Eq => &mut self.eq,
            CompareOp::Ne => &mut self.ne,
            CompareOp::Lt => &mut self.lt,
            CompareOp::Lte => &mut self.lte,
            CompareOp::Gte => &mut self.gte,
            CompareOp::Gt => &mut self.gt,
        };
        *slot = slot.saturating_add(1);
    }
}

///
/// PathCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PathCounters {
    pub absent: u64,
    pub numeric: u64,
    pub same_kind: u64,
    pub opaque: u64,
    pub incomparable: u64,
}

impl PathCounters {
    #[must_use]
    pub const fn get(&self, path: ComparePath) -> u64 {
        match path {
            ComparePath::Absent => self.absent,
            ComparePath::Numeric => self.numeric,
            ComparePath::SameKind => self.same_kind,
            ComparePath::Opaque => self.opaque,
            ComparePath::Incomparable => self.incomparable,
        }
    }

    pub(crate) const fn bump(&mut self, path: ComparePath) {
        let slot = match path {
            ComparePath::Absent => &mut self.absent,
            ComparePath::Numeric => &mut self.numeric,
            ComparePath::SameKind => &mut self.same_kind,
            ComparePath::Opaque => &mut self.opaque,
            ComparePath::Incomparable => &mut self.incomparable,
        };
        *slot = slot.saturating_add(1);
    }
}

///
/// ConditionCounters
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConditionCounters {
    pub evaluations: u64,
    pub matches: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: OpCounters,
    pub paths: PathCounters,
    pub conditions: ConditionCounters,
}

impl EventReport {
    /// Total comparisons recorded across all operators.
    #[must_use]
    pub const fn compare_calls(&self) -> u64 {
        self.ops.total()
    }
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Snapshot the current thread's counters.
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        paths: m.paths.clone(),
        conditions: m.conditions.clone(),
    })
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}
