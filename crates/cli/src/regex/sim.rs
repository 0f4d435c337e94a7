// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The NFA simulator.
//!
//! Runs the compiled graph over a text, tracking a set of live
//! *configurations*: (state, capture snapshot, start index) triples. Epsilon
//! closure expands `Split` states with the consume path first, which makes
//! quantifiers greedy. Unanchored search seeds a fresh configuration bundle
//! at every text position until a match is pending; bundles seeded later
//! than the pending start are discarded, so the leftmost match wins and is
//! extended greedily while its bundle survives.

use super::nfa::{Nfa, StateId, StateKind};

/// A matched span within the searched text. `end` is the index just past the
/// last consumed byte, so an empty match has `start == end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
}

/// Engine counters, reported by `--profile`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Texts matched (one per input line).
    pub lines: u64,
    /// Byte steps executed across all texts.
    pub steps: u64,
    /// Configurations iterated across all steps.
    pub configs_visited: u64,
    /// Largest configuration set seen at any single step.
    pub max_live: usize,
}

/// Per-path capture state.
///
/// Dense arrays indexed by group id (1-based ids map to slot `id - 1`), so a
/// snapshot compares as a single composite value; configurations are
/// deduplicated on (state, snapshot) equality.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CaptureSnapshot {
    text: Vec<Vec<u8>>,
    active: Vec<bool>,
    backref_pos: Vec<usize>,
}

impl CaptureSnapshot {
    fn new(groups: usize) -> Self {
        Self {
            text: vec![Vec::new(); groups],
            active: vec![false; groups],
            backref_pos: vec![0; groups],
        }
    }

    /// Entering a group-open marker: restart the group's capture.
    fn open(&mut self, group: usize) {
        self.text[group - 1].clear();
        self.active[group - 1] = true;
    }

    fn close(&mut self, group: usize) {
        self.active[group - 1] = false;
    }

    /// Append a consumed byte to every group that is currently open.
    fn record(&mut self, byte: u8) {
        for (slot, active) in self.active.iter().enumerate() {
            if *active {
                self.text[slot].push(byte);
            }
        }
    }

    fn captured(&self, group: usize) -> &[u8] {
        &self.text[group - 1]
    }

    fn backref_offset(&self, group: usize) -> usize {
        self.backref_pos[group - 1]
    }

    fn set_backref_offset(&mut self, group: usize, offset: usize) {
        self.backref_pos[group - 1] = offset;
    }
}

/// One live computation path.
#[derive(Clone, Debug)]
struct Config {
    state: StateId,
    /// Text index where this path's bundle was seeded.
    start: usize,
    caps: CaptureSnapshot,
}

/// Epsilon closure from `id`, emitting consuming/terminal configurations
/// into `list`. Group markers mutate the carried snapshot on the way; the
/// generation-stamped `visited` array bounds the recursion, so `(a*)*`-style
/// split cycles terminate. Duplicate (state, snapshot) entries are coalesced,
/// keeping the earliest-seeded one.
fn close_into(
    nfa: &Nfa,
    id: StateId,
    start: usize,
    mut caps: CaptureSnapshot,
    list: &mut Vec<Config>,
    visited: &mut [u64],
    generation: u64,
) {
    if visited[id] == generation {
        return;
    }
    visited[id] = generation;

    let state = nfa.state(id);
    if let Some(group) = state.group_open {
        caps.open(group);
    }
    if let Some(group) = state.group_close {
        caps.close(group);
    }

    if state.kind == StateKind::Split {
        if let Some(out) = state.out {
            close_into(nfa, out, start, caps.clone(), list, visited, generation);
        }
        if let Some(alt) = state.out_alt {
            close_into(nfa, alt, start, caps, list, visited, generation);
        }
        return;
    }

    if list.iter().any(|c| c.state == id && c.caps == caps) {
        return;
    }
    list.push(Config { state: id, start, caps });
}

/// Runs a compiled NFA over texts, accumulating [`SimStats`] across calls so
/// one matcher can profile a whole run.
pub struct Matcher<'n> {
    nfa: &'n Nfa,
    current: Vec<Config>,
    next: Vec<Config>,
    visited: Vec<u64>,
    generation: u64,
    stats: SimStats,
}

impl<'n> Matcher<'n> {
    pub fn new(nfa: &'n Nfa) -> Self {
        Self {
            nfa,
            current: Vec::new(),
            next: Vec::new(),
            visited: vec![0; nfa.state_count()],
            generation: 0,
            stats: SimStats::default(),
        }
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Leftmost span of a match in `text`, if any.
    pub fn find(&mut self, text: &[u8]) -> Option<Match> {
        self.stats.lines += 1;
        self.current.clear();

        let anchored = self.nfa.starts_anchored();
        let mut pending: Option<Match> = None;

        if anchored {
            self.seed_at(0);
        }

        for position in 0..=text.len() {
            if !anchored && pending.is_none() {
                self.seed_at(position);
            }
            if position == text.len() {
                self.terminal_closure();
            }

            if let Some(start) = self.leftmost_accept() {
                match pending {
                    Some(ref mut m) if start <= m.start => {
                        m.start = start;
                        m.end = position;
                    }
                    None => pending = Some(Match { start, end: position }),
                    _ => {}
                }
                // Later-seeded bundles can only produce worse (more
                // rightward) matches; drop them.
                let cutoff = pending.map(|m| m.start).unwrap_or(usize::MAX);
                self.current.retain(|c| c.start <= cutoff);
            }

            if position == text.len() || self.current.is_empty() {
                break;
            }
            self.step(text[position]);
        }

        pending
    }

    pub fn is_match(&mut self, text: &[u8]) -> bool {
        self.find(text).is_some()
    }

    /// Seed a fresh bundle at `position` from the compiled start. An
    /// `AnchorStart` start state is consumed here: seeding continues from
    /// its successor, and the caller only seeds position 0.
    fn seed_at(&mut self, position: usize) {
        let start_state = self.nfa.start();
        let seed = if self.nfa.starts_anchored() {
            match self.nfa.state(start_state).out {
                Some(next) => next,
                None => return,
            }
        } else {
            start_state
        };
        self.generation += 1;
        let caps = CaptureSnapshot::new(self.nfa.group_count());
        close_into(
            self.nfa,
            seed,
            position,
            caps,
            &mut self.current,
            &mut self.visited,
            self.generation,
        );
    }

    /// Advance every configuration over `byte`, building the next set.
    fn step(&mut self, byte: u8) {
        let nfa = self.nfa;
        self.stats.steps += 1;
        self.stats.configs_visited += self.current.len() as u64;
        self.stats.max_live = self.stats.max_live.max(self.current.len());

        let mut next = std::mem::take(&mut self.next);
        next.clear();

        for cfg in &self.current {
            let state = nfa.state(cfg.state);

            if let StateKind::Backref(group) = state.kind {
                // A reference to a group the pattern never opens can never
                // match; neither can a reference to an empty capture.
                if group == 0 || group > nfa.group_count() {
                    continue;
                }
                let captured_len = cfg.caps.captured(group).len();
                if captured_len == 0 {
                    continue;
                }
                let offset = cfg.caps.backref_offset(group);
                // The referenced group can be reopened mid-reference; the
                // recorded offset then no longer fits and the path dies.
                if offset >= captured_len || cfg.caps.captured(group)[offset] != byte {
                    continue;
                }
                let mut caps = cfg.caps.clone();
                if offset + 1 == captured_len {
                    caps.set_backref_offset(group, 0);
                    caps.record(byte);
                    if let Some(out) = state.out {
                        self.generation += 1;
                        close_into(nfa, out, cfg.start, caps, &mut next, &mut self.visited, self.generation);
                    }
                } else {
                    caps.set_backref_offset(group, offset + 1);
                    caps.record(byte);
                    // Mid-reference: the same state consumes the next byte.
                    if !next.iter().any(|c| c.state == cfg.state && c.caps == caps) {
                        next.push(Config { state: cfg.state, start: cfg.start, caps });
                    }
                }
                continue;
            }

            let advances = match &state.kind {
                StateKind::AnyByte => true,
                StateKind::Digit => byte.is_ascii_digit(),
                StateKind::Word => byte.is_ascii_alphanumeric() || byte == b'_',
                StateKind::ClassIn(set) => set.contains(&byte),
                StateKind::ClassNotIn(set) => !set.contains(&byte),
                StateKind::Literal(expected) => byte == *expected,
                // Anchors, splits and accept never consume input.
                _ => false,
            };

            if advances {
                let mut caps = cfg.caps.clone();
                caps.record(byte);
                if let Some(out) = state.out {
                    self.generation += 1;
                    close_into(nfa, out, cfg.start, caps, &mut next, &mut self.visited, self.generation);
                }
            }
        }

        self.next = std::mem::replace(&mut self.current, next);
    }

    /// End-of-text closure: expand `AnchorEnd` configurations along their
    /// successor, keep everything else as-is.
    fn terminal_closure(&mut self) {
        let nfa = self.nfa;
        let mut terminal = std::mem::take(&mut self.next);
        terminal.clear();

        for cfg in &self.current {
            let state = nfa.state(cfg.state);
            if state.kind == StateKind::AnchorEnd {
                if let Some(out) = state.out {
                    self.generation += 1;
                    close_into(
                        nfa,
                        out,
                        cfg.start,
                        cfg.caps.clone(),
                        &mut terminal,
                        &mut self.visited,
                        self.generation,
                    );
                }
            } else if !terminal.iter().any(|c| c.state == cfg.state && c.caps == cfg.caps) {
                terminal.push(cfg.clone());
            }
        }

        self.next = std::mem::replace(&mut self.current, terminal);
    }

    fn leftmost_accept(&self) -> Option<usize> {
        self.current
            .iter()
            .filter(|c| self.nfa.state(c.state).kind == StateKind::Accept)
            .map(|c| c.start)
            .min()
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
