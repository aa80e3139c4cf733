//! Reconstruction demo on JSON inputs.
//!
//! Reads a run config naming the detector geometry, the event hits and the
//! reconstruction config, runs the full pipeline and prints a stage summary.
//! The report (xplets, selection, trace) and the xplets alone can be written
//! to JSON.

use std::env;
use std::path::Path;
use track_qubo::config::{load_config, load_run_config};
use track_qubo::io::{read_json_file, write_json_file};
use track_qubo::segments::DetectorGeometry;
use track_qubo::{Hit, ReconstructionReport, TrackReconstructor};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let run_config = load_run_config(Path::new(&config_path))?;

    let geometry: DetectorGeometry = read_json_file(&run_config.geometry)?;
    let hits: Vec<Hit> = read_json_file(&run_config.hits)?;
    let params = load_config(&run_config.config)
        .and_then(|config| config.validate())
        .map_err(|e| e.to_string())?;

    let reco = TrackReconstructor::new(&geometry, params).map_err(|e| e.to_string())?;
    let report = reco.process(&hits).map_err(|e| e.to_string())?;
    print_summary(&report);

    if let Some(path) = &run_config.output.report_json {
        write_json_file(path, &report)?;
        println!("Report written to {}", path.display());
    }
    if let Some(path) = &run_config.output.xplets_json {
        write_json_file(path, &report.xplets)?;
        println!("Xplets written to {}", path.display());
    }
    Ok(())
}

fn print_summary(report: &ReconstructionReport) {
    let trace = &report.trace;
    println!("Reconstruction summary");
    println!("  hits: {} on {} layers", trace.input.hits, trace.input.layers);
    if let Some(segments) = &trace.segments {
        println!(
            "  placed: {} (rejected {})",
            segments.hits_placed, segments.hits_rejected
        );
    }
    if let Some(candidates) = &trace.candidates {
        println!(
            "  doublets: {} triplets: {} (truth {})",
            candidates.stats.doublets, candidates.stats.triplets, candidates.stats.triplets_truth
        );
    }
    if let Some(graph) = &trace.graph {
        println!(
            "  edges: {} kept / {} candidates, locked in {} out {}",
            graph.summary.retained_edges,
            graph.summary.candidate_edges,
            graph.summary.locked_in,
            graph.summary.locked_out
        );
    }
    if let Some(solver) = &trace.solver {
        println!(
            "  selected: {} energy {:.4} -> {:.4} in {} sweeps",
            solver.selected,
            solver.outcome.initial_energy,
            solver.outcome.final_energy,
            solver.outcome.sweeps
        );
    }
    if let Some(xplets) = &trace.xplets {
        println!(
            "  xplets: {} (fitted {}, truth matched {})",
            xplets.xplets, xplets.fitted, xplets.truth_matched
        );
    }
    for stage in &trace.timings.stages {
        println!("  {:<14} {:>9.3} ms", stage.label, stage.elapsed_ms);
    }
    println!("  total          {:>9.3} ms", trace.timings.total_ms);
}

fn usage() -> String {
    "Usage: reco_demo <run_config.json>".to_string()
}
