//! The event record and its priority queue.
//!
//! Grounded in `kimberlite-sim`'s `adapters::scheduler::EventQueue`: a flat
//! tagged-variant `EventKind` sitting in a `BinaryHeap`, ordered first by
//! virtual timestamp and, for ties, by insertion order (FIFO) so the event
//! sequence is reproducible under a fixed seed (§3, §5).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::entities::{PatientId, RoomId, TeamId};

/// Discriminates what happened and what it happened to (§3).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum EventKind {
    Arrival {
        patient: PatientId,
    },
    BeginOp {
        room: RoomId,
        patient: PatientId,
        team: TeamId,
    },
    EndOp {
        room: RoomId,
    },
    CleaningDone {
        room: RoomId,
    },
    RecoveryEnter {
        patient: PatientId,
    },
    RecoveryExit {
        patient: PatientId,
    },
    SimEnd,
}

/// Monotonically increasing identifier used only to break ties FIFO; it
/// carries no other meaning.
pub type EventSeq = u64;

/// A scheduled state change, ordered by `virtual_ts` then by `seq` (§3).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    pub kind: EventKind,
    pub virtual_ts: u64,
    pub seq: EventSeq,
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so a max-heap (BinaryHeap's only mode) behaves as a
        // min-heap over (virtual_ts, seq).
        other
            .virtual_ts
            .cmp(&self.virtual_ts)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending events, FIFO among ties at the same `virtual_ts`.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Event>,
    next_seq: EventSeq,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedules `kind` to fire at `virtual_ts`, returning the sequence
    /// number assigned for tie-breaking.
    pub fn schedule(&mut self, virtual_ts: u64, kind: EventKind) -> EventSeq {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Event {
            kind,
            virtual_ts,
            seq,
        });
        seq
    }

    /// Removes and returns the earliest-scheduled event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop()
    }

    pub fn peek_time(&self) -> Option<u64> {
        self.heap.peek().map(|e| e.virtual_ts)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
