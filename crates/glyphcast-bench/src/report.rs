use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub seed: u32,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file is missing or
/// unreadable.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(baseline) => Some(baseline),
        Err(e) => {
            log::warn!("Ignoring malformed baseline {}: {e}", path.display());
            None
        }
    }
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare current results against a baseline. Returns a list of regressions
/// (scene name, percent change) where the threshold is exceeded.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<(String, f64)> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        if base.timings.mean_ms <= 0.0 {
            continue;
        }
        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push((result.scene_name.clone(), pct_change));
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Size | Hits | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Min (ms) | Max (ms) | Rays/s |\n");
    out.push_str("|-------|------|------|-----------|-------------|----------|----------|----------|----------|--------|\n");

    for r in results {
        let rays = (r.width * r.height) as f64;
        let rays_per_sec = if r.timings.mean_ms > 0.0 {
            rays / (r.timings.mean_ms / 1000.0)
        } else {
            0.0
        };
        out.push_str(&format!(
            "| {} | {}x{} | {} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {:.0} |\n",
            r.scene_name,
            r.width,
            r.height,
            r.hit_cells,
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
            r.timings.min_ms,
            r.timings.max_ms,
            rays_per_sec,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[(String, f64)], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for (scene, pct) in regressions {
        out.push_str(&format!("  - {}: +{:.1}%\n", scene, pct));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::compute_timings;

    fn result(name: &str, mean: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            width: 80,
            height: 24,
            frame_count: 1,
            hit_cells: 1000,
            timings: compute_timings(&[mean]),
        }
    }

    #[test]
    fn test_compare_flags_slower_scenes() {
        let baseline = Baseline {
            timestamp: "t0".into(),
            seed: 42,
            results: vec![result("spawn", 2.0), result("overview", 4.0)],
        };
        let current = vec![
            result("spawn", 2.1),
            result("overview", 5.0),
            result("house", 9.0),
        ];

        let regressions = compare(&current, &baseline, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].0, "overview");
        assert!((regressions[0].1 - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_comparison() {
        assert!(format_comparison(&[], 10.0).contains("No regressions"));
        let text = format_comparison(&[("spawn".into(), 12.5)], 10.0);
        assert!(text.contains("spawn: +12.5%"));
    }

    #[test]
    fn test_markdown_has_row_per_scene() {
        let table = format_markdown(&[result("spawn", 2.0), result("house", 1.0)]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("| spawn | 80x24 | 1000 |"));
    }

    #[test]
    fn test_baseline_file_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "glyphcast-bench-{}/baseline.json",
            std::process::id()
        ));
        let baseline = Baseline {
            timestamp: "t1".into(),
            seed: 7,
            results: vec![result("spawn", 1.5)],
        };

        save_baseline(&path, &baseline).expect("save baseline");
        let loaded = load_baseline(&path);
        if let Some(parent) = path.parent() {
            let _ = std::fs::remove_dir_all(parent);
        }

        assert_eq!(loaded, Some(baseline));
    }

    #[test]
    fn test_missing_baseline_is_none() {
        let path = std::env::temp_dir().join("glyphcast-bench-missing/baseline.json");
        assert!(load_baseline(&path).is_none());
    }
}
