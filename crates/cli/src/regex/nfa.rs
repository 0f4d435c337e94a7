// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The NFA data model.
//!
//! States live in an arena (`Vec<State>`) and reference each other by index,
//! so the quantifier back-edges that make the graph cyclic never create
//! ownership cycles. State identity is index equality, which also gives the
//! simulator a cheap deduplication key.

/// Index of a state in the arena.
pub type StateId = usize;

/// What a state does when the simulator reaches it.
///
/// `Split` is the only epsilon producer; every other kind consumes exactly
/// one input byte on traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    /// Matches exactly this byte.
    Literal(u8),
    /// `.` — matches any byte.
    AnyByte,
    /// `\d` — matches `0..=9`.
    Digit,
    /// `\w` — matches alphanumerics and `_`.
    Word,
    /// `[...]` — matches any byte in the set.
    ClassIn(Vec<u8>),
    /// `[^...]` — matches any byte not in the set.
    ClassNotIn(Vec<u8>),
    /// `^`
    AnchorStart,
    /// `$`
    AnchorEnd,
    /// `\1`..`\9` — matches the text captured by an earlier group.
    Backref(usize),
    /// Epsilon transition with up to two successors.
    Split,
    /// Terminal state; reaching it means the pattern matched.
    Accept,
}

/// A node in the NFA.
///
/// Group open/close markers ride on `Split` states interposed at group
/// boundaries; entering such a state mutates the path's capture snapshot.
#[derive(Clone, Debug)]
pub struct State {
    pub kind: StateKind,
    pub out: Option<StateId>,
    pub out_alt: Option<StateId>,
    pub group_open: Option<usize>,
    pub group_close: Option<usize>,
}

impl State {
    fn new(kind: StateKind) -> Self {
        Self { kind, out: None, out_alt: None, group_open: None, group_close: None }
    }
}

/// A compiled, immutable NFA.
pub struct Nfa {
    states: Vec<State>,
    start: StateId,
    group_count: usize,
}

impl Nfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of capture groups, assigned in parse order of `(` from 1.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Whether the pattern is anchored to position 0 (starts with `^`).
    pub fn starts_anchored(&self) -> bool {
        matches!(self.state(self.start).kind, StateKind::AnchorStart)
    }
}

/// An unassigned successor pointer in a state under construction.
#[derive(Clone, Copy, Debug)]
pub(crate) enum OutSlot {
    Primary(StateId),
    Alt(StateId),
}

/// A partially assembled subgraph: a start state plus the dangling output
/// slots that still need to be patched to whatever comes next.
pub(crate) struct Fragment {
    pub start: StateId,
    pub outs: Vec<OutSlot>,
}

impl Fragment {
    /// Fragment consisting of a single state with its primary output dangling.
    pub fn leaf(id: StateId) -> Self {
        Self { start: id, outs: vec![OutSlot::Primary(id)] }
    }
}

/// Mutable arena used during compilation; `finish` freezes it into an [`Nfa`].
pub(crate) struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn push(&mut self, kind: StateKind) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(kind));
        id
    }

    /// A `Split` carrying a group-open marker.
    pub fn push_group_open(&mut self, group: usize) -> StateId {
        let id = self.push(StateKind::Split);
        self.states[id].group_open = Some(group);
        id
    }

    /// A `Split` carrying a group-close marker.
    pub fn push_group_close(&mut self, group: usize) -> StateId {
        let id = self.push(StateKind::Split);
        self.states[id].group_close = Some(group);
        id
    }

    pub fn set_out(&mut self, id: StateId, to: StateId) {
        self.states[id].out = Some(to);
    }

    pub fn set_out_alt(&mut self, id: StateId, to: StateId) {
        self.states[id].out_alt = Some(to);
    }

    pub fn patch(&mut self, slot: OutSlot, to: StateId) {
        match slot {
            OutSlot::Primary(id) => self.set_out(id, to),
            OutSlot::Alt(id) => self.set_out_alt(id, to),
        }
    }

    /// Patch every dangling output of `frag` to `to`.
    pub fn patch_all(&mut self, frag: &Fragment, to: StateId) {
        for slot in &frag.outs {
            self.patch(*slot, to);
        }
    }

    pub fn finish(self, start: StateId, group_count: usize) -> Nfa {
        Nfa { states: self.states, start, group_count }
    }
}

#[cfg(test)]
#[path = "nfa_tests.rs"]
mod tests;
