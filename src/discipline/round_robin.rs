use std::collections::VecDeque;

use log::{debug, trace};
use slotmap::{new_key_type, SlotMap};

use super::{audit, Discipline, DisciplineKind, SimError};
use crate::model::{ProcessDescriptor, Ticks};

new_key_type! {
    /// Stable handle for one process in the rotation, assigned once at
    /// simulation start.
    struct SliceKey;
}

struct RunState {
    index: usize,
    remaining: Ticks,
}

/// Fixed-quantum preemptive rotation over a single ready queue.
///
/// The ready queue starts in input order. Each turn the head either finishes
/// (remaining time fits in the quantum) or is preempted and re-enqueued at the
/// tail. Zero-burst processes never enter rotation; they are scheduled last
/// and absorb the full elapsed time as waiting time.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Result<Self, SimError> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum { quantum });
        }
        Ok(Self { quantum })
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// Runs the rotation, returning the final clock value.
    pub(crate) fn rotate(&self, processes: &mut [ProcessDescriptor]) -> Ticks {
        let mut states: SlotMap<SliceKey, RunState> =
            SlotMap::with_capacity_and_key(processes.len());
        let mut ready: VecDeque<SliceKey> = VecDeque::with_capacity(processes.len());

        for (index, process) in processes.iter().enumerate() {
            if process.burst_time > 0 {
                ready.push_back(states.insert(RunState {
                    index,
                    remaining: process.burst_time,
                }));
            }
        }

        let mut clock: Ticks = 0;
        while let Some(key) = ready.pop_front() {
            let state = &mut states[key];
            if state.remaining <= self.quantum {
                clock += state.remaining;
                state.remaining = 0;
                let process = &mut processes[state.index];
                process.turnaround_time = clock;
                process.waiting_time = clock - process.burst_time;
                trace!("rr: {} completed at t={clock}", process.name);
            } else {
                clock += self.quantum;
                state.remaining -= self.quantum;
                ready.push_back(key);
            }
        }

        for process in processes.iter_mut() {
            if process.burst_time == 0 {
                process.waiting_time = clock;
                process.turnaround_time = clock;
            }
        }

        clock
    }
}

impl Discipline for RoundRobin {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::RoundRobin
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        debug!(
            "rr: scheduling {} processes, quantum {}",
            processes.len(),
            self.quantum
        );
        self.rotate(processes);
        audit(processes);
        Ok(())
    }
}
