use std::path::{Path, PathBuf};
use std::process;

use glyphcast_bench::report;
use glyphcast_bench::runner::BenchmarkRunner;
use glyphcast_bench::scenes::{self, DEFAULT_SEED};
use glyphcast_core::config::{load_config_from_str, EngineConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut seed: Option<u32> = None;
    let mut width = 80usize;
    let mut height = 24usize;
    let mut frame_count = 30u32;
    let mut config_path: Option<PathBuf> = None;
    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut snapshot_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut print_frame = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(args[i].parse().expect("invalid --seed value"));
            }
            "--width" => {
                i += 1;
                width = args[i].parse().expect("invalid --width value");
            }
            "--height" => {
                i += 1;
                height = args[i].parse().expect("invalid --height value");
            }
            "--frames" => {
                i += 1;
                frame_count = args[i].parse().expect("invalid --frames value");
            }
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--baseline" => {
                i += 1;
                baseline_path = Some(PathBuf::from(&args[i]));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(&args[i]));
            }
            "--regression-threshold" => {
                i += 1;
                regression_threshold = args[i]
                    .parse()
                    .expect("invalid --regression-threshold value");
            }
            "--print" => print_frame = true,
            "--save" => {
                i += 1;
                snapshot_path = Some(PathBuf::from(&args[i]));
            }
            "--help" | "-h" => {
                eprintln!("Usage: glyphcast-bench [OPTIONS]");
                eprintln!("  --seed <n>                     World generation seed (default: config or 42)");
                eprintln!("  --width <cells>                Frame width (default: 80)");
                eprintln!("  --height <cells>               Frame height (default: 24)");
                eprintln!("  --frames <n>                   Frames per scene (default: 30)");
                eprintln!("  --config <path>                Engine config RON file");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                eprintln!("  --print                        Print the first scene as text");
                eprintln!("  --save <path>                  Write a world snapshot");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(ref path) => load_config(path),
        None => EngineConfig::default(),
    };
    let seed = seed.or(config.world.seed).unwrap_or(DEFAULT_SEED);

    log::info!(
        "Generating {}x{}x{} world (seed {seed})...",
        config.world.width,
        config.world.height,
        config.world.depth
    );
    let bench = match scenes::build_world(&config, seed) {
        Ok(bench) => bench,
        Err(e) => {
            log::error!("World creation failed: {e}");
            process::exit(1);
        }
    };

    if let Some(ref path) = snapshot_path {
        if let Err(e) = glyphcast_persist::save_to_path(&bench.world, path) {
            log::error!("Failed to save snapshot: {e}");
            process::exit(1);
        }
    }

    let runner = BenchmarkRunner::new(config, width, height, frame_count);
    let scene_configs = scenes::standard_scenes(&bench, config.view.eye_height);

    if print_frame {
        if let Some(first) = scene_configs.first() {
            println!("{}", runner.render_once(&bench.world, first).to_text());
        }
    }

    let mut results = Vec::new();
    for scene in &scene_configs {
        results.push(runner.run_scene(&bench.world, scene));
    }

    // Print markdown summary
    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: timestamp(),
            seed,
            results: results.clone(),
        };
        match report::save_baseline(path, &baseline) {
            Ok(()) => log::info!("Saved baseline to {}", path.display()),
            Err(e) => log::error!("Failed to save baseline: {e}"),
        }
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            if baseline.seed != seed {
                log::warn!(
                    "Baseline was recorded with seed {}, current run uses {seed}",
                    baseline.seed
                );
            }
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

fn load_config(path: &Path) -> EngineConfig {
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| load_config_from_str(&text).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::error!("Bad config {}: {e}", path.display());
            process::exit(1);
        }
    }
}

/// Seconds since the Unix epoch, without pulling in a date crate.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("unix-{secs}")
}
