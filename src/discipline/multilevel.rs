use log::debug;

use super::{audit, Discipline, DisciplineKind, RoundRobin, SimError};
use crate::model::{ProcessDescriptor, Ticks};

/// Two-band multilevel queue: processes with `priority < split_threshold` form
/// the low band, the rest the high band, and each band rotates independently
/// under its own quantum. Clocks are band-local; results come back as the low
/// band followed by the high band, each preserving relative input order.
pub struct MultilevelQueue {
    low: RoundRobin,
    high: RoundRobin,
    split_threshold: i32,
}

impl MultilevelQueue {
    pub fn new(
        low_quantum: Ticks,
        high_quantum: Ticks,
        split_threshold: i32,
    ) -> Result<Self, SimError> {
        Ok(Self {
            low: RoundRobin::new(low_quantum)?,
            high: RoundRobin::new(high_quantum)?,
            split_threshold,
        })
    }
}

impl Discipline for MultilevelQueue {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::MultilevelQueue
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        let mut low_band = Vec::new();
        let mut high_band = Vec::new();
        for process in processes.drain(..) {
            if process.priority < self.split_threshold {
                low_band.push(process);
            } else {
                high_band.push(process);
            }
        }
        debug!(
            "mlq: {} low-band / {} high-band processes, threshold {}",
            low_band.len(),
            high_band.len(),
            self.split_threshold
        );

        self.low.rotate(&mut low_band);
        self.high.rotate(&mut high_band);

        processes.extend(low_band);
        processes.extend(high_band);
        audit(processes);
        Ok(())
    }
}
