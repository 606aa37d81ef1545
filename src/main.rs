use rand::prelude::*;
use sched_lab::advisor;
use sched_lab::discipline::{
    Discipline, Fcfs, Ljf, MultilevelQueue, Priority, RoundRobin, Sjf,
};
use sched_lab::{ProcessDescriptor, SimError, Ticks};

fn main() -> Result<(), SimError> {
    env_logger::init();

    let snapshot = synthetic_snapshot(8, 0);
    let priorities: Vec<i32> = snapshot.iter().map(|p| p.priority).rev().collect();

    let disciplines: Vec<Box<dyn Discipline>> = vec![
        Box::new(Fcfs),
        Box::new(Sjf),
        Box::new(Ljf),
        Box::new(Priority::with_overrides(priorities)),
        Box::new(RoundRobin::new(3)?),
        Box::new(MultilevelQueue::new(2, 4, 3)?),
    ];

    let mut results = Vec::with_capacity(disciplines.len());
    for discipline in &disciplines {
        let mut processes = snapshot.clone();
        discipline.run(&mut processes)?;

        println!("{} scheduling:", discipline.kind());
        for process in &processes {
            println!(
                "  {:<10} burst={:<3} wait={:<3} turnaround={:<3} prio={}",
                process.name,
                process.burst_time,
                process.waiting_time,
                process.turnaround_time,
                process.priority
            );
        }
        results.push((discipline.kind(), processes));
    }

    let borrowed: Vec<_> = results
        .iter()
        .map(|(kind, processes)| (*kind, processes.as_slice()))
        .collect();
    println!("\nDiscipline ranking (lower composite cost is better):");
    for (place, (kind, cost)) in advisor::rank_disciplines(&borrowed).iter().enumerate() {
        println!("  {}. {kind}: {cost:.2}", place + 1);
    }

    println!("\nPer-process suggestions:");
    for process in &snapshot {
        // the snapshot is an instant in time, so burst doubles as process age
        let pick = advisor::suggest(process, process.burst_time);
        println!("  {:<10} -> {pick}", process.name);
    }

    Ok(())
}

/// Seeded stand-in for a live process snapshot: a mix of short interactive
/// bursts and long batch bursts with randomized telemetry.
fn synthetic_snapshot(count: usize, seed: u64) -> Vec<ProcessDescriptor> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::with_capacity(count);

    for n in 0..count {
        let burst: Ticks = if rng.random::<f64>() < 0.4 {
            rng.random_range(1..=5)
        } else {
            rng.random_range(8..=30)
        };

        let mut process = ProcessDescriptor::new(format!("proc-{n}"), burst, rng.random_range(0..6));
        process.pid = Some(1000 + n as u32);
        process.cpu_usage = rng.random_range(0.0..100.0);
        process.memory_usage = rng.random_range(1..512) * 1024 * 1024;
        processes.push(process);
    }

    processes
}
