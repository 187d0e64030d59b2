//! Online statistics accumulation and reporting (§4.4).
//!
//! Grounded in the original's `Statistics` accumulator, which updates
//! running sums as events occur rather than re-scanning patient history at
//! report time. Extended with a room-utilization metric mirroring the
//! original's `calculerTauxOccupationBlocs`, which the distilled textual
//! spec does not spell out but the source computes.

use std::collections::HashMap;

use crate::entities::Priority;

#[derive(Debug, Clone, Copy, Default)]
struct PriorityAccumulator {
    arrivals: u64,
    discharged: u64,
    wait_sum_seconds: u64,
    wait_max_seconds: u64,
}

/// Running totals updated as the engine processes events; never
/// re-derived by re-scanning patient history.
#[derive(Debug, Default)]
pub struct Statistics {
    by_priority: HashMap<Priority, PriorityAccumulator>,
    rejected_arrivals: u64,
    op_duration_sum_seconds: u64,
    op_duration_count: u64,
    stay_sum_seconds: u64,
    stay_count: u64,
    busy_seconds_total: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_arrival(&mut self, priority: Priority) {
        self.by_priority.entry(priority).or_default().arrivals += 1;
    }

    /// An arrival that could not be admitted because the waiting queue was
    /// full; these count as "untreated" in the policy comparator (§4.5).
    pub fn record_rejected_arrival(&mut self) {
        self.rejected_arrivals += 1;
    }

    pub fn record_op_start(&mut self, priority: Priority, wait_seconds: u64) {
        let acc = self.by_priority.entry(priority).or_default();
        acc.wait_sum_seconds += wait_seconds;
        acc.wait_max_seconds = acc.wait_max_seconds.max(wait_seconds);
    }

    pub fn record_op_end(&mut self, duration_seconds: u64) {
        self.op_duration_sum_seconds += duration_seconds;
        self.op_duration_count += 1;
    }

    pub fn record_discharge(&mut self, priority: Priority, stay_seconds: u64) {
        self.by_priority.entry(priority).or_default().discharged += 1;
        self.stay_sum_seconds += stay_seconds;
        self.stay_count += 1;
    }

    /// Accumulates busy time for the room utilization metric; called once
    /// per completed operation with the number of seconds that room spent
    /// in the BUSY state.
    pub fn record_room_busy_seconds(&mut self, seconds: u64) {
        self.busy_seconds_total += seconds;
    }

    pub fn rejected_arrivals(&self) -> u64 {
        self.rejected_arrivals
    }

    pub fn total_discharged(&self) -> u64 {
        self.by_priority.values().map(|a| a.discharged).sum()
    }

    pub fn total_arrivals(&self) -> u64 {
        self.by_priority.values().map(|a| a.arrivals).sum::<u64>() + self.rejected_arrivals
    }

    pub fn max_wait_seconds(&self, priority: Priority) -> u64 {
        self.by_priority
            .get(&priority)
            .map(|a| a.wait_max_seconds)
            .unwrap_or(0)
    }

    pub fn wait_sum_seconds(&self, priority: Priority) -> u64 {
        self.by_priority
            .get(&priority)
            .map(|a| a.wait_sum_seconds)
            .unwrap_or(0)
    }

    pub fn mean_op_duration_seconds(&self) -> f64 {
        if self.op_duration_count == 0 {
            0.0
        } else {
            self.op_duration_sum_seconds as f64 / self.op_duration_count as f64
        }
    }

    pub fn mean_stay_seconds(&self) -> f64 {
        if self.stay_count == 0 {
            0.0
        } else {
            self.stay_sum_seconds as f64 / self.stay_count as f64
        }
    }

    pub fn busy_seconds_total(&self) -> u64 {
        self.busy_seconds_total
    }
}

/// A fully-assembled, point-in-time statistics snapshot, suitable for
/// external consumption (§6).
#[derive(Debug, Clone, serde::Serialize)]
pub struct StatsReport {
    pub elapsed_seconds: u64,
    pub total_arrivals: u64,
    pub total_discharged: u64,
    pub rejected_arrivals: u64,
    pub wait_mean_seconds: HashMap<String, f64>,
    pub wait_max_seconds: HashMap<String, u64>,
    pub mean_op_duration_seconds: f64,
    pub mean_stay_seconds: f64,
    /// Throughput in discharges per hour of elapsed virtual time.
    pub throughput_per_hour: f64,
    /// Fraction of total room-minutes spent BUSY, in `[0, 1]`.
    pub room_utilization: f64,
}

impl StatsReport {
    /// Builds a report from the raw accumulators. `op_start_samples` gives
    /// the count of patients of each priority who have begun an operation
    /// (tracked by the engine, which knows this directly from its patient
    /// table), since the accumulator above only tracks running sums.
    pub fn build(
        stats: &Statistics,
        op_start_samples: &HashMap<Priority, u64>,
        elapsed_seconds: u64,
        rooms: u32,
    ) -> Self {
        let mut wait_mean_seconds = HashMap::new();
        let mut wait_max_seconds = HashMap::new();
        for priority in Priority::ALL {
            let samples = op_start_samples.get(&priority).copied().unwrap_or(0);
            let mean = if samples == 0 {
                0.0
            } else {
                stats.wait_sum_seconds(priority) as f64 / samples as f64
            };
            wait_mean_seconds.insert(format!("{priority:?}"), mean);
            wait_max_seconds.insert(format!("{priority:?}"), stats.max_wait_seconds(priority));
        }

        let elapsed_hours = elapsed_seconds as f64 / 3600.0;
        let throughput_per_hour = if elapsed_hours > 0.0 {
            stats.total_discharged() as f64 / elapsed_hours
        } else {
            0.0
        };

        let total_room_seconds = rooms as f64 * elapsed_seconds as f64;
        let room_utilization = if total_room_seconds > 0.0 {
            (stats.busy_seconds_total() as f64 / total_room_seconds).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            elapsed_seconds,
            total_arrivals: stats.total_arrivals(),
            total_discharged: stats.total_discharged(),
            rejected_arrivals: stats.rejected_arrivals(),
            wait_mean_seconds,
            wait_max_seconds,
            mean_op_duration_seconds: stats.mean_op_duration_seconds(),
            mean_stay_seconds: stats.mean_stay_seconds(),
            throughput_per_hour,
            room_utilization,
        }
    }
}
