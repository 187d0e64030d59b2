//! Plain-data entities and their invariants (§3).
//!
//! These carry state but no scheduling behaviour; the engine is the only
//! thing that mutates them; everything outside the engine gets borrowed
//! lookups by id (arena+index style, per §3 "Ownership" and §9's
//! raw-pointer-graph-to-arena redesign note).

use std::collections::VecDeque;

pub type PatientId = u32;
pub type TeamId = u32;
pub type RoomId = u32;
pub type MemberId = u32;

/// Urgency class. Lower numeric value is more urgent (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[repr(u8)]
pub enum Priority {
    Emergency = 1,
    Elective = 2,
    Ambulatory = 3,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Emergency, Priority::Elective, Priority::Ambulatory];
}

/// The kind of surgery, each with its own duration distribution (§4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum OperationType {
    Cardiac,
    Orthopaedic,
    Neuro,
    Digestive,
    Thoracic,
    Vascular,
    Urologic,
    Ent,
    Ophthalmic,
    Gynaecologic,
}

impl OperationType {
    pub const ALL: [OperationType; 10] = [
        OperationType::Cardiac,
        OperationType::Orthopaedic,
        OperationType::Neuro,
        OperationType::Digestive,
        OperationType::Thoracic,
        OperationType::Vascular,
        OperationType::Urologic,
        OperationType::Ent,
        OperationType::Ophthalmic,
        OperationType::Gynaecologic,
    ];

    /// `(mean_minutes, dispersion_minutes)` for this type's duration
    /// distribution (§4.3 table).
    pub fn mean_and_dispersion(self) -> (f64, f64) {
        match self {
            OperationType::Cardiac => (240.0, 60.0),
            OperationType::Neuro => (300.0, 90.0),
            OperationType::Orthopaedic => (120.0, 30.0),
            OperationType::Digestive => (180.0, 45.0),
            OperationType::Thoracic => (210.0, 60.0),
            OperationType::Vascular => (150.0, 40.0),
            OperationType::Urologic => (90.0, 20.0),
            OperationType::Ent => (60.0, 15.0),
            OperationType::Ophthalmic => (45.0, 10.0),
            OperationType::Gynaecologic => (120.0, 30.0),
        }
    }
}

/// A patient moving through arrival → operation → recovery → discharge.
///
/// Invariants (§3): if `op_started > 0` then `op_started >= arrived`; if
/// `op_ended > 0` then `op_ended >= op_started > 0`; if `discharged_ts > 0`
/// then `discharged_ts >= op_ended > 0`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Patient {
    pub id: PatientId,
    pub given_name: String,
    pub family_name: String,
    pub priority: Priority,
    pub operation_type: OperationType,
    pub estimated_minutes: u32,
    pub arrived: u64,
    pub op_started: u64,
    pub op_ended: u64,
    pub discharged_ts: u64,
}

impl Patient {
    /// Wait time so far: time already spent in the queue if not yet
    /// started, else the actual wait endured before the operation began.
    pub fn wait(&self, now: u64) -> u64 {
        if self.op_started > 0 {
            self.op_started.saturating_sub(self.arrived)
        } else {
            now.saturating_sub(self.arrived)
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.op_started == 0
    }

    pub fn is_operating(&self) -> bool {
        self.op_started > 0 && self.op_ended == 0
    }

    pub fn is_recovering(&self) -> bool {
        self.op_ended > 0 && self.discharged_ts == 0
    }

    pub fn is_discharged(&self) -> bool {
        self.discharged_ts > 0
    }
}

/// Role of a single staff member within a surgical team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Role {
    Surgeon,
    Anaesthetist,
    Nurse,
}

/// Pure data; a staff member has no behaviour of its own.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub role: Role,
    pub speciality: String,
}

/// A surgical team: one surgeon, one anaesthetist, one or more nurses.
///
/// A team is *complete* iff all three slots are filled; only complete teams
/// are allocatable (§3). The baseline treats all complete teams as generic
/// (Open Question, resolved "unconstrained" in DESIGN.md).
#[derive(Debug, Clone, serde::Serialize)]
pub struct Team {
    pub id: TeamId,
    pub surgeon: Option<TeamMember>,
    pub anaesthetist: Option<TeamMember>,
    pub nurses: Vec<TeamMember>,
    pub available: bool,
}

impl Team {
    pub fn is_complete(&self) -> bool {
        self.surgeon.is_some() && self.anaesthetist.is_some() && !self.nurses.is_empty()
    }

    pub fn is_allocatable(&self) -> bool {
        self.available && self.is_complete()
    }
}

/// Lifecycle state of an operating room (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum RoomState {
    Free,
    Busy,
    Cleaning,
    Maintenance,
}

/// An operating room. Invariant: `patient` and `team` are both `Some` iff
/// `state` is `Busy` or `Cleaning`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OperatingRoom {
    pub id: RoomId,
    pub state: RoomState,
    pub patient: Option<PatientId>,
    pub team: Option<TeamId>,
    pub op_start_ts: u64,
    pub op_end_ts: u64,
    pub cleaning_minutes: u32,
}

impl OperatingRoom {
    pub fn new(id: RoomId, cleaning_minutes: u32) -> Self {
        Self {
            id,
            state: RoomState::Free,
            patient: None,
            team: None,
            op_start_ts: 0,
            op_end_ts: 0,
            cleaning_minutes,
        }
    }

    pub fn is_free(&self) -> bool {
        self.state == RoomState::Free
    }

    /// FREE → BUSY. Returns `false` (no-op) if the room was not FREE (§7).
    pub fn begin_operation(&mut self, patient: PatientId, team: TeamId, now: u64) -> bool {
        if self.state != RoomState::Free {
            return false;
        }
        self.state = RoomState::Busy;
        self.patient = Some(patient);
        self.team = Some(team);
        self.op_start_ts = now;
        self.op_end_ts = 0;
        true
    }

    /// BUSY → CLEANING. Returns `false` (no-op) if the room was not BUSY (§7).
    pub fn end_operation(&mut self, now: u64) -> bool {
        if self.state != RoomState::Busy {
            return false;
        }
        self.state = RoomState::Cleaning;
        self.op_end_ts = now;
        true
    }

    /// CLEANING → FREE, releasing patient/team pointers. Returns `false`
    /// (no-op) if the room was not CLEANING.
    pub fn cleaning_complete(&mut self) -> bool {
        if self.state != RoomState::Cleaning {
            return false;
        }
        self.state = RoomState::Free;
        self.patient = None;
        self.team = None;
        true
    }
}

/// FIFO insertion-ordered queue of patients awaiting an operating room.
///
/// Invariant: `len() <= capacity`; every patient held here has
/// `op_started == 0`.
#[derive(Debug)]
pub struct WaitingQueue {
    patients: VecDeque<PatientId>,
    capacity: usize,
}

impl WaitingQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            patients: VecDeque::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.patients.len() >= self.capacity
    }

    /// Appends to the tail. Returns `false` if the queue is at capacity.
    pub fn push_back(&mut self, patient: PatientId) -> bool {
        if self.is_full() {
            return false;
        }
        self.patients.push_back(patient);
        true
    }

    /// Re-inserts at the head, bypassing the capacity check — used by the
    /// allocator to put a patient back after a failed team match (§4.1.2
    /// step 4), which must never fail or drop the patient.
    pub fn push_front(&mut self, patient: PatientId) {
        self.patients.push_front(patient);
    }

    pub fn pop_front(&mut self) -> Option<PatientId> {
        self.patients.pop_front()
    }

    /// Removes and returns the patient at `index`, for the PRIORITY and SJF
    /// disciplines which may select from the middle of the queue.
    pub fn remove(&mut self, index: usize) -> Option<PatientId> {
        self.patients.remove(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatientId> {
        self.patients.iter()
    }
}

/// A patient currently recovering, with its entry time and required
/// recovery duration (§3).
#[derive(Debug, Clone, Copy)]
pub struct RecoveryEntry {
    pub patient: PatientId,
    pub entry_ts: u64,
    pub recovery_minutes: u32,
}

impl RecoveryEntry {
    pub fn is_ready(&self, now: u64) -> bool {
        now.saturating_sub(self.entry_ts) >= u64::from(self.recovery_minutes) * 60
    }
}

/// Capacity-bounded collection of recovering patients.
#[derive(Debug, Default)]
pub struct RecoveryRoom {
    entries: Vec<RecoveryEntry>,
    capacity: usize,
}

impl RecoveryRoom {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn push(&mut self, entry: RecoveryEntry) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Removes and returns the entry for `patient`, if present (§7: absent
    /// removal is a no-op returning `None`).
    pub fn remove(&mut self, patient: PatientId) -> Option<RecoveryEntry> {
        let idx = self.entries.iter().position(|e| e.patient == patient)?;
        Some(self.entries.remove(idx))
    }
}
