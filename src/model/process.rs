use serde::{Deserialize, Serialize};

/// Fixed-point service time, in seconds.
pub type Ticks = u64;

/// One unit of work to be scheduled: a snapshot of a process at the moment
/// the simulation batch was built.
///
/// `waiting_time` and `turnaround_time` start at zero and are written exactly
/// once by the discipline that runs the descriptor. After any run,
/// `turnaround_time == waiting_time + burst_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub pid: Option<u32>,
    pub name: String,
    /// Total service time the process still needs.
    pub burst_time: Ticks,
    /// Lower value = more urgent.
    pub priority: i32,
    /// Telemetry carried through unchanged; never a scheduling input.
    pub cpu_usage: f64,
    /// Resident memory in bytes; telemetry only.
    pub memory_usage: u64,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessDescriptor {
    pub fn new(name: impl Into<String>, burst_time: Ticks, priority: i32) -> Self {
        Self {
            pid: None,
            name: name.into(),
            burst_time,
            priority,
            cpu_usage: 0.0,
            memory_usage: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }
}
