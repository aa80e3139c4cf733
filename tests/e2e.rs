mod common;

use common::synthetic_event::{planar_geometry, single_track_event, three_per_layer_event};
use track_qubo::graph::{GraphOptions, SENTINEL_WEIGHT};
use track_qubo::qubo::QuboOptions;
use track_qubo::triplets::{LockState, TripletOptions};
use track_qubo::{HitId, ReconstructionParams, TrackReconstructor};

fn reconstructor() -> TrackReconstructor {
    let params = ReconstructionParams::new(
        TripletOptions::new(0.2, [-0.5, 0.5]),
        GraphOptions::new(0.8, 135, 3),
        QuboOptions::new(1.0),
    );
    TrackReconstructor::new(&planar_geometry(4, 10.0, 2), params).unwrap()
}

#[test]
fn straight_track_is_reconstructed() {
    let _ = env_logger::builder().is_test(true).try_init();
    let hits = single_track_event();
    let reco = reconstructor();

    let prepared = reco.prepare(&hits).unwrap();
    let ids: Vec<String> = prepared.triplets.iter().map(|t| t.id.to_string()).collect();
    assert_eq!(ids, vec!["0_1_2", "1_2_3", "1_2_6"]);

    let q = |k: usize| prepared.triplets[k].quality.unwrap();
    assert!((q(0) - 1.0).abs() < 1e-12);
    assert!((q(1) - 1.0).abs() < 1e-12);
    assert_eq!(prepared.triplets[0].lock, LockState::LockedIn);
    assert_eq!(prepared.triplets[1].lock, LockState::LockedIn);
    // The rival continues 0_1_2 but conflicts with the locked-in 1_2_3.
    assert_eq!(prepared.triplets[2].lock, LockState::LockedOut);
    assert_eq!(prepared.triplets[2].quality, Some(-1.0));

    let graph = &prepared.graph;
    assert!(graph.is_symmetric());
    assert!(graph.weight(0, 1).is_some_and(|w| (w + 1.0).abs() < 1e-12));
    assert_eq!(graph.weight(0, 2), Some(SENTINEL_WEIGHT));
    assert_eq!(graph.weight(1, 2), Some(SENTINEL_WEIGHT));
    assert_eq!(prepared.model.linear(), &[-1.0, -1.0, 1.0]);

    let report = reco.process(&hits).unwrap();
    assert_eq!(report.selection, vec![true, true, false]);
    assert_eq!(report.xplets.len(), 1);
    let xplet = &report.xplets[0];
    assert_eq!(xplet.hit_ids, vec![HitId(0), HitId(1), HitId(2), HitId(3)]);
    assert!(xplet.is_truth_match());
    let fit = xplet.fit.unwrap();
    assert_eq!(fit.degrees_of_freedom, 4);
    assert!(fit.chi2 < 1e-12);
    assert!(fit.p_value > 0.999);
}

#[test]
fn trace_reports_every_stage() {
    let hits = single_track_event();
    let report = reconstructor().process(&hits).unwrap();
    let trace = &report.trace;

    assert_eq!(trace.input.hits, 7);
    assert_eq!(trace.input.layers, 4);

    let segments = trace.segments.as_ref().unwrap();
    assert_eq!(segments.hits_placed, 6);
    assert_eq!(segments.hits_rejected, 1);

    let candidates = trace.candidates.as_ref().unwrap();
    assert_eq!(candidates.stats.pairs_considered, 6);
    assert_eq!(candidates.stats.rejected_ratio, 3);
    assert_eq!(candidates.stats.triplets, 3);
    assert_eq!(candidates.stats.triplets_truth, 2);

    let graph = trace.graph.as_ref().unwrap();
    assert_eq!(graph.summary.locked_in, 2);
    assert_eq!(graph.summary.excluded, 1);
    assert_eq!(graph.summary.locked_out, 1);

    let solver = trace.solver.as_ref().unwrap();
    assert_eq!(solver.selected, 2);
    assert_eq!(solver.outcome.final_energy, -3.0);
    assert!(solver.outcome.converged);

    let xplets = trace.xplets.as_ref().unwrap();
    assert_eq!(xplets.xplets, 1);
    assert_eq!(xplets.truth_matched, 1);

    let labels: Vec<&str> = trace.timings.stages.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["segments", "candidates", "graph", "coefficients", "solver", "xplets"]
    );
    assert!(trace.timings.total_ms >= 0.0);
}

#[test]
fn report_serializes_to_json() {
    let hits = single_track_event();
    let report = reconstructor().process(&hits).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["xplets"][0]["hitIds"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["selection"], serde_json::json!([true, true, false]));
}

#[test]
fn empty_event_yields_empty_report() {
    let report = reconstructor().process(&[]).unwrap();
    assert!(report.xplets.is_empty());
    assert!(report.selection.is_empty());
}

#[test]
fn three_hits_per_layer_keep_only_the_straight_track() {
    let _ = env_logger::builder().is_test(true).try_init();
    let hits = three_per_layer_event();
    let params = ReconstructionParams::new(
        TripletOptions::new(0.05, [-0.5, 0.5]),
        GraphOptions::new(0.8, 135, 3),
        QuboOptions::new(1.0),
    );
    let reco = TrackReconstructor::new(&planar_geometry(4, 10.0, 2), params).unwrap();

    let prepared = reco.prepare(&hits).unwrap();
    let ids: Vec<String> = prepared.triplets.iter().map(|t| t.id.to_string()).collect();
    assert_eq!(ids, vec!["0_3_6", "3_6_9"]);
    for t in &prepared.triplets {
        assert!((t.quality.unwrap() - 1.0).abs() < 1e-12);
        assert!(t.is_truth_match(&hits));
    }
    // The two true triplets continue each other: compatible, never a conflict.
    let w = prepared.graph.weight(0, 1).unwrap();
    assert!(w < 0.0 && (w + 1.0).abs() < 1e-12);
    assert_eq!(prepared.graph.edge_count(), 1);

    let report = reco.process(&hits).unwrap();
    assert_eq!(report.selection, vec![true, true]);
    assert_eq!(report.xplets.len(), 1);
    let xplet = &report.xplets[0];
    assert_eq!(xplet.len(), 4);
    assert_eq!(xplet.hit_ids, vec![HitId(0), HitId(3), HitId(6), HitId(9)]);
    assert!(xplet.is_truth_match());
}
