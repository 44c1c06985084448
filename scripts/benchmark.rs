// scripts/benchmark.rs
//! Times path generation across step counts and compares the cost with a
//! 60 Hz frame budget, since generation runs on the host thread in one go.

use brownian_play::generator::PathGenerator;
use brownian_play::rng::{self, Distr, NormalSource};
use brownian_play::timing::Timer;
use brownian_play::SimulationParameters;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;

const FRAME_BUDGET_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "benchmark", about = "Time Euler-Maruyama path generation")]
struct Args {
    /// Step counts to time
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = vec![100, 1_000, 5_000, 50_000, 1_000_000]
    )]
    steps: Vec<usize>,

    /// Repetitions per step count
    #[arg(long, default_value_t = 20)]
    reps: usize,

    /// Seed for the reproducible sources
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

struct Row {
    source: &'static str,
    steps: usize,
    mean_ms: f64,
    min_ms: f64,
}

fn time_source<N: NormalSource>(
    source: &'static str,
    steps: usize,
    reps: usize,
    normals: &mut N,
) -> Row {
    let params = SimulationParameters {
        step_count: steps,
        ..SimulationParameters::default()
    };
    let generator = match PathGenerator::new(params) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("skipping {} steps: {}", steps, e);
            return Row {
                source,
                steps,
                mean_ms: f64::NAN,
                min_ms: f64::NAN,
            };
        }
    };

    let mut timer = Timer::new();
    let mut total = 0.0;
    let mut min_ms = f64::INFINITY;
    let mut checksum = 0.0;
    for _ in 0..reps.max(1) {
        timer.start();
        let path = generator.generate(normals);
        let ms = timer.elapsed_ms();
        checksum += path.last().map(|s| s.value).unwrap_or(0.0);
        total += ms;
        min_ms = min_ms.min(ms);
    }
    info!("{} {} steps checksum {:.6}", source, steps, checksum);

    Row {
        source,
        steps,
        mean_ms: total / reps.max(1) as f64,
        min_ms,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    println!("brownian-play generation benchmark");
    println!("==================================");
    println!(
        "os: {}  arch: {}  profile: {}",
        env::consts::OS,
        env::consts::ARCH,
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );
    println!();

    let mut rows = Vec::new();
    for &steps in &args.steps {
        rows.push(time_source(
            "box-muller/std",
            steps,
            args.reps,
            &mut rng::seeded(args.seed),
        ));
        rows.push(time_source(
            "ziggurat/std",
            steps,
            args.reps,
            &mut Distr::new(StdRng::seed_from_u64(args.seed)),
        ));
        rows.push(time_source("box-muller/thread", steps, args.reps, &mut rng::ambient()));
    }

    println!(
        "{:<20} {:>10} {:>12} {:>12} {:>10}",
        "source", "steps", "mean ms", "min ms", "frames"
    );
    for row in &rows {
        println!(
            "{:<20} {:>10} {:>12.4} {:>12.4} {:>10.2}",
            row.source,
            row.steps,
            row.mean_ms,
            row.min_ms,
            row.mean_ms / FRAME_BUDGET_MS
        );
    }

    if let Some(row) = rows
        .iter()
        .filter(|r| r.mean_ms.is_finite() && r.mean_ms > FRAME_BUDGET_MS)
        .min_by_key(|r| r.steps)
    {
        println!();
        println!(
            "generation exceeds one 60 Hz frame from {} steps ({})",
            row.steps, row.source
        );
    }
}
