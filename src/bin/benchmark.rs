//! Generation throughput on random soups across grid sizes

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use torus_life::SimulationState;

fn benchmark_advance(size: usize, iterations: u32) -> Option<f64> {
    let mut state = SimulationState::new(size).ok()?;
    state.randomize_with(0.3, &mut StdRng::seed_from_u64(size as u64));

    let start = Instant::now();
    for _ in 0..iterations {
        if !state.advance_generation() {
            state.randomize_with(0.3, &mut StdRng::seed_from_u64(size as u64));
        }
    }
    Some(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() {
    env_logger::init();
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [20, 40, 60, 100, 200, 500];
    let iterations = 50;

    println!("{:>10} {:>14} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<42}", "");

    for size in sizes {
        let Some(ms) = benchmark_advance(size, iterations) else {
            continue;
        };
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>14.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
