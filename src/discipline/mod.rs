pub mod batch;
pub mod multilevel;
pub mod round_robin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ProcessDescriptor, Ticks};

pub use batch::{Fcfs, Ljf, Priority, Sjf};
pub use multilevel::MultilevelQueue;
pub use round_robin::RoundRobin;

/// Tag for a scheduling discipline, used by the advisor's ranking table and
/// for report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineKind {
    Fcfs,
    Sjf,
    Ljf,
    Priority,
    RoundRobin,
    MultilevelQueue,
}

impl DisciplineKind {
    /// Fixed advisory ordering: SJF > LJF > FCFS > RR, with the remaining
    /// disciplines trailing. Lower rank wins a tie.
    pub(crate) fn advisory_rank(self) -> u8 {
        match self {
            DisciplineKind::Sjf => 0,
            DisciplineKind::Ljf => 1,
            DisciplineKind::Fcfs => 2,
            DisciplineKind::RoundRobin => 3,
            DisciplineKind::Priority => 4,
            DisciplineKind::MultilevelQueue => 5,
        }
    }
}

impl fmt::Display for DisciplineKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisciplineKind::Fcfs => write!(f, "FCFS"),
            DisciplineKind::Sjf => write!(f, "SJF"),
            DisciplineKind::Ljf => write!(f, "LJF"),
            DisciplineKind::Priority => write!(f, "Priority"),
            DisciplineKind::RoundRobin => write!(f, "RR"),
            DisciplineKind::MultilevelQueue => write!(f, "MLQ"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Configuration rejected before any simulation state is touched.
    InvalidQuantum { quantum: Ticks },
    /// Priority overrides must cover every process in the batch.
    PriorityOverrideMismatch { expected: usize, supplied: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidQuantum { quantum } => {
                write!(f, "configuration error: time quantum must be positive, got {quantum}")
            }
            SimError::PriorityOverrideMismatch { expected, supplied } => {
                write!(
                    f,
                    "invalid argument: {expected} priority overrides required, {supplied} supplied"
                )
            }
        }
    }
}

impl std::error::Error for SimError {}

/// A scheduling discipline: consumes one batch of descriptors and populates
/// their waiting/turnaround times. May reorder the batch; never drops,
/// duplicates, or alters identity fields.
pub trait Discipline {
    fn kind(&self) -> DisciplineKind;

    fn run(&self, processes: &mut Vec<ProcessDescriptor>) -> Result<(), SimError>;
}

/// Single-server accumulation: the i-th process in the (already ordered)
/// batch waits for everything before it.
pub(crate) fn accumulate(processes: &mut [ProcessDescriptor]) {
    let mut elapsed: Ticks = 0;
    for process in processes.iter_mut() {
        process.waiting_time = elapsed;
        elapsed += process.burst_time;
        process.turnaround_time = process.waiting_time + process.burst_time;
    }
}

/// Post-run audit of the waiting/turnaround identity.
pub(crate) fn audit(processes: &[ProcessDescriptor]) {
    for process in processes {
        debug_assert_eq!(
            process.turnaround_time,
            process.waiting_time + process.burst_time,
            "process {} violates turnaround = waiting + burst",
            process.name
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_is_cumulative() {
        let mut batch = vec![
            ProcessDescriptor::new("a", 4, 0),
            ProcessDescriptor::new("b", 3, 0),
            ProcessDescriptor::new("c", 5, 0),
        ];
        accumulate(&mut batch);

        assert_eq!(batch[0].waiting_time, 0);
        assert_eq!(batch[0].turnaround_time, 4);
        assert_eq!(batch[1].waiting_time, 4);
        assert_eq!(batch[1].turnaround_time, 7);
        assert_eq!(batch[2].waiting_time, 7);
        assert_eq!(batch[2].turnaround_time, 12);
    }

    #[test]
    fn accumulate_handles_empty_batch() {
        let mut batch: Vec<ProcessDescriptor> = Vec::new();
        accumulate(&mut batch);
        assert!(batch.is_empty());
    }

    #[test]
    fn errors_render_their_context() {
        let err = SimError::InvalidQuantum { quantum: 0 };
        assert!(err.to_string().contains("quantum"));

        let err = SimError::PriorityOverrideMismatch {
            expected: 3,
            supplied: 1,
        };
        assert!(err.to_string().contains("3"));
        assert!(err.to_string().contains("1"));
    }
}
