//! Synthetic patient arrivals (§4.3).
//!
//! Elective patients are generated once, up front, as a fixed-size batch;
//! emergencies trickle in afterwards at exponentially-distributed intervals.
//! Grounded in the original's `GenerateurPatients`, re-expressed against
//! [`crate::rng::SimRng`] so the whole arrival stream is reproducible under a
//! fixed seed.

use crate::entities::{OperationType, Patient, PatientId, Priority};
use crate::rng::SimRng;

const GIVEN_NAMES: [&str; 18] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
];

/// Produces the initial elective batch and, thereafter, one emergency
/// arrival at a time with its inter-arrival delay.
pub struct PatientGenerator {
    next_id: PatientId,
}

impl PatientGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    fn next_id(&mut self) -> PatientId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Family name is always `"Patient_<id>"`; given name is drawn from a
    /// fixed pool. Neither carries clinical meaning — they exist only to
    /// make simulation traces legible.
    fn name_for(&self, rng: &mut SimRng, id: PatientId) -> (String, String) {
        let given = GIVEN_NAMES[rng.next_usize(GIVEN_NAMES.len())].to_string();
        (given, format!("Patient_{id}"))
    }

    fn draw_operation_type(&self, rng: &mut SimRng) -> OperationType {
        let idx = rng.next_usize(OperationType::ALL.len());
        OperationType::ALL[idx]
    }

    /// Samples `mean ± dispersion * U(-1, 1)`, floored at one minute so a
    /// pathological draw never yields a non-positive duration (§3: duration
    /// must be `> 0`).
    fn draw_duration_minutes(&self, rng: &mut SimRng, op: OperationType) -> u32 {
        let (mean, dispersion) = op.mean_and_dispersion();
        let sampled = mean + dispersion * rng.next_signed_unit();
        sampled.round().max(1.0) as u32
    }

    fn build_patient(
        &mut self,
        rng: &mut SimRng,
        arrived: u64,
        priority: Priority,
    ) -> Patient {
        let id = self.next_id();
        let (given_name, family_name) = self.name_for(rng, id);
        let operation_type = self.draw_operation_type(rng);
        let estimated_minutes = self.draw_duration_minutes(rng, operation_type);
        Patient {
            id,
            given_name,
            family_name,
            priority,
            operation_type,
            estimated_minutes,
            arrived,
            op_started: 0,
            op_ended: 0,
            discharged_ts: 0,
        }
    }

    /// Generates the fixed-size elective batch: `count` patients, all
    /// `Priority::Elective`, with arrivals spaced uniformly across
    /// `duration_minutes` — `arrival_i = t0 + i * (duration_minutes / count)
    /// * 60` — rather than all arriving at once (§4.3).
    pub fn generate_elective_batch(
        &mut self,
        rng: &mut SimRng,
        count: u32,
        duration_minutes: u32,
    ) -> Vec<Patient> {
        if count == 0 {
            return Vec::new();
        }
        let spacing_minutes = f64::from(duration_minutes) / f64::from(count);
        (0..count)
            .map(|i| {
                let arrived = (f64::from(i) * spacing_minutes * 60.0).round() as u64;
                self.build_patient(rng, arrived, Priority::Elective)
            })
            .collect()
    }

    /// Generates the next emergency and the delay in seconds after which it
    /// should arrive, drawn from an exponential distribution with the
    /// configured hourly rate (§4.3). The delay is floored at one second so
    /// a draw that rounds to zero can never produce a simultaneous-arrival
    /// pathology.
    pub fn next_emergency(&mut self, rng: &mut SimRng, rate_per_hour: f64, now: u64) -> (Patient, u64) {
        let rate_per_second = rate_per_hour / 3600.0;
        let delay_seconds = (rng.next_exponential(rate_per_second).round() as u64).max(1);
        let arrival = now + delay_seconds;
        let patient = self.build_patient(rng, arrival, Priority::Emergency);
        (patient, delay_seconds)
    }
}

impl Default for PatientGenerator {
    fn default() -> Self {
        Self::new()
    }
}
