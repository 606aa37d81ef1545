//! End-to-end run of every discipline over one fixed snapshot.

use sched_lab::advisor;
use sched_lab::discipline::{
    Discipline, DisciplineKind, Fcfs, Ljf, MultilevelQueue, Priority, RoundRobin, Sjf,
};
use sched_lab::{ProcessDescriptor, SimError, Ticks};

fn snapshot() -> Vec<ProcessDescriptor> {
    let specs: [(&str, Ticks, i32, f64, u64); 5] = [
        ("init", 12, 0, 1.5, 8 << 20),
        ("shell", 2, 2, 0.3, 4 << 20),
        ("browser", 25, 4, 37.0, 900 << 20),
        ("indexer", 7, 5, 12.0, 120 << 20),
        ("logger", 0, 1, 0.1, 2 << 20),
    ];

    specs
        .iter()
        .map(|&(name, burst, priority, cpu, mem)| {
            let mut process = ProcessDescriptor::new(name, burst, priority);
            process.cpu_usage = cpu;
            process.memory_usage = mem;
            process
        })
        .collect()
}

fn disciplines() -> Vec<Box<dyn Discipline>> {
    vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Ljf),
        Box::new(Priority::with_overrides(vec![3, 0, 4, 2, 1])),
        Box::new(RoundRobin::new(4).expect("positive quantum")),
        Box::new(MultilevelQueue::new(2, 5, 3).expect("positive quanta")),
    ]
}

#[test]
fn every_discipline_upholds_the_turnaround_identity() {
    for discipline in disciplines() {
        let mut processes = snapshot();
        discipline.run(&mut processes).unwrap();

        for process in &processes {
            assert_eq!(
                process.turnaround_time,
                process.waiting_time + process.burst_time,
                "{} under {}",
                process.name,
                discipline.kind()
            );
        }
    }
}

#[test]
fn every_discipline_preserves_the_process_set() {
    let mut expected: Vec<_> = snapshot()
        .into_iter()
        .map(|p| (p.name, p.burst_time, p.priority, p.memory_usage))
        .collect();
    expected.sort();

    for discipline in disciplines() {
        let mut processes = snapshot();
        discipline.run(&mut processes).unwrap();
        if discipline.kind() == DisciplineKind::Priority {
            // the priority discipline rewrites priorities by design
            continue;
        }

        let mut actual: Vec<_> = processes
            .into_iter()
            .map(|p| (p.name, p.burst_time, p.priority, p.memory_usage))
            .collect();
        actual.sort();
        assert_eq!(actual, expected, "under {}", discipline.kind());
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    for discipline in disciplines() {
        let mut first = snapshot();
        let mut second = snapshot();
        discipline.run(&mut first).unwrap();
        discipline.run(&mut second).unwrap();
        assert_eq!(first, second, "under {}", discipline.kind());
    }
}

#[test]
fn ranking_covers_every_discipline_once() {
    let mut results = Vec::new();
    for discipline in disciplines() {
        let mut processes = snapshot();
        discipline.run(&mut processes).unwrap();
        results.push((discipline.kind(), processes));
    }

    let borrowed: Vec<_> = results
        .iter()
        .map(|(kind, processes)| (*kind, processes.as_slice()))
        .collect();
    let ranked = advisor::rank_disciplines(&borrowed);

    assert_eq!(ranked.len(), results.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].1 <= pair[1].1, "ranking must be ascending");
    }
}

#[test]
fn invalid_configuration_surfaces_before_simulation() {
    assert!(matches!(
        RoundRobin::new(0),
        Err(SimError::InvalidQuantum { quantum: 0 })
    ));
    assert!(MultilevelQueue::new(0, 3, 2).is_err());

    let mut processes = snapshot();
    let untouched = processes.clone();
    let err = Priority::with_overrides(vec![1, 2]).run(&mut processes);
    assert!(matches!(
        err,
        Err(SimError::PriorityOverrideMismatch {
            expected: 5,
            supplied: 2,
        })
    ));
    assert_eq!(processes, untouched);
}
