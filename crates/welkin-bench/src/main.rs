use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use welkin_bench::report;
use welkin_bench::runner::BenchmarkRunner;
use welkin_bench::scenes;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut frame_count = 30u32;
    let mut size = 256u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
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
                regression_threshold = args[i].parse().unwrap_or(10.0);
            }
            "--frames" => {
                i += 1;
                frame_count = args[i].parse().unwrap_or(30);
            }
            "--size" => {
                i += 1;
                size = args[i].parse().unwrap_or(256);
            }
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!(
                    "usage: bench-runner [--baseline FILE] [--output FILE] \
                     [--regression-threshold PCT] [--frames N] [--size PIXELS]"
                );
                process::exit(2);
            }
        }
        i += 1;
    }

    let runner = BenchmarkRunner::new(size, size, frame_count);
    let results: Vec<_> = scenes::standard_scenes()
        .iter()
        .map(|scene| {
            let result = runner.run_scene(scene);
            log::info!(
                "{}: median {:.3} ms, p95 {:.3} ms",
                result.scene_name,
                result.timings.median_ms,
                result.timings.p95_ms
            );
            result
        })
        .collect();

    if let Some(path) = &output_path {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_default();
        let baseline = report::Baseline {
            timestamp,
            results: results.clone(),
        };
        match report::save_baseline(path, &baseline) {
            Ok(()) => log::info!("Baseline written to {}", path.display()),
            Err(e) => {
                eprintln!("failed to write baseline: {e}");
                process::exit(1);
            }
        }
    }

    if let Some(path) = &baseline_path {
        match report::load_baseline(path) {
            Some(baseline) => {
                let regressions = report::compare(&results, &baseline, regression_threshold);
                if regressions.is_empty() {
                    log::info!("No regressions above {regression_threshold}%");
                } else {
                    for (scene, pct) in &regressions {
                        eprintln!("regression: {scene} is {pct:.1}% slower than baseline");
                    }
                    process::exit(1);
                }
            }
            None => {
                eprintln!("could not load baseline from {}", path.display());
                process::exit(1);
            }
        }
    }
}
