//! Scheduling policies and resource allocation (§4.1.2, §4.2).
//!
//! Grounded in the original's `Scheduler::assignationPossible` /
//! `trouverBlocDisponible` / `trouverEquipeDisponible` static-method split:
//! selection (which patient goes next) is kept separate from matching
//! (which room and team serve them), exactly as those two concerns were
//! separated there.

use crate::config::Policy;
use crate::entities::{OperatingRoom, Patient, PatientId, RoomId, Team, TeamId, WaitingQueue};

/// Picks the index within `patients` (one entry per patient currently in
/// `queue`, same order) of the next patient to serve under `policy`.
/// Returns `None` if the queue is empty.
///
/// - FCFS: the head of the queue (earliest arrival).
/// - PRIORITY: lowest numeric priority; ties broken by earliest arrival,
///   then lowest id.
/// - SJF: shortest estimated duration; ties broken by priority, then
///   arrival.
pub fn select_index_with(policy: Policy, queue: &WaitingQueue, patients: &[&Patient]) -> Option<usize> {
    if queue.is_empty() {
        return None;
    }
    match policy {
        Policy::Fcfs => Some(0),
        Policy::Priority => {
            let mut best = 0usize;
            for (idx, p) in patients.iter().enumerate().skip(1) {
                let current = patients[best];
                if (p.priority, p.arrived, p.id) < (current.priority, current.arrived, current.id) {
                    best = idx;
                }
            }
            Some(best)
        }
        Policy::Sjf => {
            let mut best = 0usize;
            for (idx, p) in patients.iter().enumerate().skip(1) {
                let current = patients[best];
                let key = (p.estimated_minutes, p.priority, p.arrived);
                let best_key = (current.estimated_minutes, current.priority, current.arrived);
                if key < best_key {
                    best = idx;
                }
            }
            Some(best)
        }
    }
}

/// Finds the id of the first FREE room, in ascending id order (§4.1.2 step
/// 2).
pub fn find_available_room(rooms: &[OperatingRoom]) -> Option<RoomId> {
    rooms.iter().find(|r| r.is_free()).map(|r| r.id)
}

/// Finds the id of the first complete, available team, in ascending id
/// order (§4.1.2 step 3).
///
/// The baseline places no constraint between team and operation type
/// (Open Question, resolved "unconstrained" — see the project's design
/// notes); any allocatable team may serve any patient.
pub fn find_available_team(teams: &[Team]) -> Option<TeamId> {
    teams.iter().find(|t| t.is_allocatable()).map(|t| t.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{OperationType, Priority, Role, TeamMember};

    fn patient(id: PatientId, priority: Priority, arrived: u64, minutes: u32) -> Patient {
        Patient {
            id,
            given_name: "G".into(),
            family_name: "F".into(),
            priority,
            operation_type: OperationType::Ent,
            estimated_minutes: minutes,
            arrived,
            op_started: 0,
            op_ended: 0,
            discharged_ts: 0,
        }
    }

    #[test]
    fn fcfs_always_picks_head() {
        let mut q = WaitingQueue::new(10);
        q.push_back(1);
        q.push_back(2);
        let p1 = patient(1, Priority::Elective, 0, 60);
        let p2 = patient(2, Priority::Emergency, 1, 30);
        let refs = [&p1, &p2];
        assert_eq!(select_index_with(Policy::Fcfs, &q, &refs), Some(0));
    }

    #[test]
    fn priority_picks_most_urgent_regardless_of_queue_position() {
        let mut q = WaitingQueue::new(10);
        q.push_back(1);
        q.push_back(2);
        let p1 = patient(1, Priority::Ambulatory, 0, 60);
        let p2 = patient(2, Priority::Emergency, 1, 30);
        let refs = [&p1, &p2];
        assert_eq!(select_index_with(Policy::Priority, &q, &refs), Some(1));
    }

    #[test]
    fn priority_ties_break_by_arrival_then_id() {
        let p1 = patient(5, Priority::Elective, 10, 60);
        let p2 = patient(2, Priority::Elective, 10, 30);
        let refs = [&p1, &p2];
        let q = WaitingQueue::new(10);
        assert_eq!(select_index_with(Policy::Priority, &q, &refs), Some(1));
    }

    #[test]
    fn sjf_picks_shortest_duration() {
        let p1 = patient(1, Priority::Elective, 0, 120);
        let p2 = patient(2, Priority::Elective, 0, 30);
        let refs = [&p1, &p2];
        let q = WaitingQueue::new(10);
        assert_eq!(select_index_with(Policy::Sjf, &q, &refs), Some(1));
    }

    #[test]
    fn sjf_ties_break_by_priority_then_arrival() {
        let p1 = patient(1, Priority::Ambulatory, 0, 60);
        let p2 = patient(2, Priority::Emergency, 5, 60);
        let refs = [&p1, &p2];
        let q = WaitingQueue::new(10);
        assert_eq!(select_index_with(Policy::Sjf, &q, &refs), Some(1));
    }

    #[test]
    fn find_available_room_skips_busy() {
        let mut rooms = vec![
            OperatingRoom::new(1, 15),
            OperatingRoom::new(2, 15),
        ];
        rooms[0].begin_operation(1, 1, 0);
        assert_eq!(find_available_room(&rooms), Some(2));
    }

    #[test]
    fn find_available_team_requires_complete_and_available() {
        let incomplete = Team {
            id: 1,
            surgeon: Some(TeamMember {
                id: 1,
                role: Role::Surgeon,
                speciality: "General".into(),
            }),
            anaesthetist: None,
            nurses: vec![],
            available: true,
        };
        let complete_but_busy = Team {
            id: 2,
            surgeon: Some(TeamMember {
                id: 2,
                role: Role::Surgeon,
                speciality: "General".into(),
            }),
            anaesthetist: Some(TeamMember {
                id: 3,
                role: Role::Anaesthetist,
                speciality: "General".into(),
            }),
            nurses: vec![TeamMember {
                id: 4,
                role: Role::Nurse,
                speciality: "General".into(),
            }],
            available: false,
        };
        let complete_and_free = Team {
            id: 3,
            surgeon: Some(TeamMember {
                id: 5,
                role: Role::Surgeon,
                speciality: "General".into(),
            }),
            anaesthetist: Some(TeamMember {
                id: 6,
                role: Role::Anaesthetist,
                speciality: "General".into(),
            }),
            nurses: vec![TeamMember {
                id: 7,
                role: Role::Nurse,
                speciality: "General".into(),
            }],
            available: true,
        };
        let teams = vec![incomplete, complete_but_busy, complete_and_free];
        assert_eq!(find_available_team(&teams), Some(3));
    }
}
