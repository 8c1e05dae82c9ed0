//! Skyhop entry point
//!
//! Native builds run a headless autopilot session and print a summary; the
//! web build is driven from JavaScript through `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Parser, Debug)]
#[command(name = "skyhop")]
#[command(about = "Run a headless Skyhop session driven by the autopilot")]
struct Args {
    /// Seed for obstacle gaps and scenery
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of 60 fps frames to simulate
    #[arg(long, default_value_t = 3600)]
    frames: u32,
    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Best score file (defaults to the user data directory)
    #[arg(long)]
    store: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyhop::persistence::{JsonFileStore, load_best_score};
    use skyhop::platform::headless::HeadlessRunner;
    use skyhop::{Engine, Tuning};

    env_logger::init();
    let args = Args::parse();
    log::info!("Skyhop (native) starting with seed {}...", args.seed);

    let tuning = Tuning::load_or_default(args.tuning.as_deref());
    let mut store = args
        .store
        .map(JsonFileStore::new)
        .unwrap_or_else(JsonFileStore::in_data_dir);
    let best = load_best_score(&store);

    let mut engine = Engine::new(args.seed, tuning, best);
    let runner = HeadlessRunner {
        frames: args.frames,
        ..HeadlessRunner::default()
    };
    let report = runner.run(&mut engine, &mut store);

    println!(
        "seed {}: {} frames, {} runs, {} deaths, best run {}, best overall {}",
        args.seed,
        report.frames,
        report.runs,
        report.deaths,
        report.best_run_score,
        report.best_score
    );
    println!("best score stored at {}", store.path().display());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
