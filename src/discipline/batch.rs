use keyed_priority_queue::KeyedPriorityQueue;
use log::debug;

use super::{accumulate, audit, Discipline, DisciplineKind, SimError};
use crate::model::{ProcessDescriptor, Ticks};

/// First-come-first-serve: the batch runs in input order.
pub struct Fcfs;

impl Discipline for Fcfs {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Fcfs
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        debug!("fcfs: scheduling {} processes", processes.len());
        accumulate(processes);
        audit(processes);
        Ok(())
    }
}

/// Shortest-job-first: ascending by (burst, priority).
pub struct Sjf;

impl Discipline for Sjf {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Sjf
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        debug!("sjf: scheduling {} processes", processes.len());
        processes.sort_by(|a, b| (a.burst_time, a.priority).cmp(&(b.burst_time, b.priority)));
        accumulate(processes);
        audit(processes);
        Ok(())
    }
}

/// Longest-job-first: the exact reverse-direction sort of SJF.
pub struct Ljf;

impl Discipline for Ljf {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Ljf
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        debug!("ljf: scheduling {} processes", processes.len());
        processes.sort_by(|a, b| (b.burst_time, b.priority).cmp(&(a.burst_time, a.priority)));
        accumulate(processes);
        audit(processes);
        Ok(())
    }
}

/// Run order for the priority discipline. `KeyedPriorityQueue` is a max-heap,
/// so `RunKey`'s `Ord` is flipped; `seq` keeps ties stable on input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RunKey {
    priority: i32,
    burst: Ticks,
    seq: usize,
}

impl PartialOrd for RunKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RunKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.priority, other.burst, other.seq).cmp(&(self.priority, self.burst, self.seq))
    }
}

/// Priority scheduling with externally supplied priority values: every process
/// takes its override, then the batch runs ascending by (priority, burst).
/// Lower priority number runs first.
pub struct Priority {
    overrides: Vec<i32>,
}

impl Priority {
    pub fn with_overrides(overrides: Vec<i32>) -> Self {
        Self { overrides }
    }
}

impl Discipline for Priority {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Priority
    }

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError> {
        if self.overrides.len() < processes.len() {
            return Err(SimError::PriorityOverrideMismatch {
                expected: processes.len(),
                supplied: self.overrides.len(),
            });
        }
        debug!("priority: scheduling {} processes", processes.len());

        let mut order: KeyedPriorityQueue<usize, RunKey> = KeyedPriorityQueue::new();
        for (seq, (process, &priority)) in processes.iter_mut().zip(&self.overrides).enumerate() {
            process.priority = priority;
            order.push(
                seq,
                RunKey {
                    priority,
                    burst: process.burst_time,
                    seq,
                },
            );
        }

        let mut slots: Vec<Option<ProcessDescriptor>> =
            processes.drain(..).map(Some).collect();
        while let Some((seq, _)) = order.pop() {
            if let Some(process) = slots[seq].take() {
                processes.push(process);
            }
        }

        accumulate(processes);
        audit(processes);
        Ok(())
    }
}
