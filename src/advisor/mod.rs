//! Diagnostic heuristics over already-computed scheduling results. Advisory
//! only: nothing here feeds back into a discipline.

use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use crate::discipline::DisciplineKind;
use crate::model::{ProcessDescriptor, Ticks};

/// Bursts at most this long suggest SJF.
pub const SHORT_BURST_MAX: Ticks = 5;
/// Bursts longer than this suggest LJF.
pub const LONG_BURST_MIN: Ticks = 15;
/// Processes younger than this suggest FCFS.
pub const RECENT_ARRIVAL_MAX: Ticks = 60;

/// Composite cost of one discipline's results: mean over processes of
/// turnaround + waiting + cpu usage + resident memory. Lower is better.
fn composite_cost(processes: &[ProcessDescriptor]) -> f64 {
    if processes.is_empty() {
        return 0.0;
    }
    processes
        .iter()
        .map(|p| {
            (p.turnaround_time + p.waiting_time) as f64 + p.cpu_usage + p.memory_usage as f64
        })
        .collect::<Mean>()
        .estimate()
}

/// Ranks disciplines by composite cost, ascending. Cost ties break on the
/// fixed advisory ordering so the result is fully deterministic.
pub fn rank_disciplines(
    results: &[(DisciplineKind, &[ProcessDescriptor])],
) -> Vec<(DisciplineKind, f64)> {
    let mut costs: FxHashMap<DisciplineKind, f64> = FxHashMap::default();
    for (kind, processes) in results {
        costs.insert(*kind, composite_cost(processes));
    }

    let mut ranked: Vec<_> = costs.into_iter().collect();
    ranked.sort_by(|a, b| {
        a.1.total_cmp(&b.1)
            .then_with(|| a.0.advisory_rank().cmp(&b.0.advisory_rank()))
    });
    ranked
}

/// Best-effort discipline recommendation for a single process, from its burst
/// time and its age (time since arrival). When several rules fire, the fixed
/// ordering SJF > LJF > FCFS > RR decides.
pub fn suggest(process: &ProcessDescriptor, age: Ticks) -> DisciplineKind {
    let mut fired = Vec::new();
    if process.burst_time <= SHORT_BURST_MAX {
        fired.push(DisciplineKind::Sjf);
    }
    if process.burst_time > LONG_BURST_MIN {
        fired.push(DisciplineKind::Ljf);
    }
    if age < RECENT_ARRIVAL_MAX {
        fired.push(DisciplineKind::Fcfs);
    }

    fired
        .into_iter()
        .min_by_key(|kind| kind.advisory_rank())
        .unwrap_or(DisciplineKind::RoundRobin)
}
