use super::*;
use crate::qubo::{QuadraticTerm, QuboModel};

/// Two compatible triplets (0, 1) and a conflicting rival (2) of triplet 1.
fn model() -> QuboModel {
    QuboModel::from_terms(
        vec![-1.0, -1.0, -0.5],
        vec![
            QuadraticTerm {
                i: 0,
                j: 1,
                weight: -1.0,
            },
            QuadraticTerm {
                i: 1,
                j: 2,
                weight: 1.0,
            },
        ],
    )
    .unwrap()
}

#[test]
fn sweep_keeps_compatible_pair() {
    let model = model();
    let mut selection = vec![false; 3];
    let outcome = BitFlipSolver::sweep(&model, &mut selection, &SweepOrder::natural(3), false);
    assert_eq!(selection, vec![true, true, false]);
    assert_eq!(outcome.flips, 2);
    assert_eq!(outcome.total_delta, -3.0);
    assert_eq!(model.energy(&selection), -3.0);
}

#[test]
fn sweep_total_delta_matches_energy_change() {
    let model = model();
    for start in 0..8u8 {
        let selection: Vec<bool> = (0..3).map(|i| start & (1 << i) != 0).collect();
        let before = model.energy(&selection);
        for reverse in [false, true] {
            let mut s = selection.clone();
            let outcome = BitFlipSolver::sweep(&model, &mut s, &SweepOrder::natural(3), reverse);
            let after = model.energy(&s);
            assert!(after <= before + 1e-12);
            assert!((after - before - outcome.total_delta).abs() < 1e-12);
            assert!(outcome.total_delta <= 0.0);
        }
    }
}

#[test]
fn reverse_order_changes_visiting_sequence() {
    let model = model();
    let mut selection = vec![false; 3];
    let outcome = BitFlipSolver::sweep(&model, &mut selection, &SweepOrder::natural(3), true);
    // 2 is taken first, then 1 is blocked by the conflict and 0 is taken.
    assert_eq!(selection, vec![true, false, true]);
    assert_eq!(outcome.flips, 2);
}

#[test]
fn out_of_range_entries_are_skipped() {
    let model = model();
    let mut selection = vec![false; 3];
    let order = SweepOrder(vec![7, 0, 3]);
    let outcome = BitFlipSolver::sweep(&model, &mut selection, &order, false);
    assert_eq!(outcome.flips, 1);
    assert_eq!(selection, vec![true, false, false]);
}

#[test]
fn no_flip_when_already_optimal() {
    let model = model();
    let mut selection = vec![true, true, false];
    let outcome = BitFlipSolver::sweep(&model, &mut selection, &SweepOrder::natural(3), false);
    assert_eq!(outcome, SweepOutcome::default());
}

#[test]
fn orders_are_deterministic_permutations() {
    let model = model();
    let impact = SweepOrder::by_impact(&model, &[false; 3]);
    assert_eq!(impact.0, vec![2, 0, 1]);
    let connection = SweepOrder::by_connection(&model);
    assert_eq!(connection.0, vec![0, 1, 2]);
    assert_eq!(connection.len(), 3);
}

#[test]
fn run_converges_and_is_deterministic() {
    let model = model();
    let solver = BitFlipSolver::new(SolverOptions::default());
    let mut first = vec![false; 3];
    let a = solver.run(&model, &mut first);
    let mut second = vec![false; 3];
    let b = solver.run(&model, &mut second);
    assert_eq!(first, second);
    assert_eq!(a, b);
    assert!(a.converged);
    assert_eq!(a.sweeps, 2);
    assert_eq!(a.final_energy, -3.0);
    assert!((a.final_energy - a.initial_energy - a.total_delta).abs() < 1e-12);
}

#[test]
fn impact_strategy_never_increases_energy() {
    let model = model();
    let solver = BitFlipSolver::new(SolverOptions {
        order: OrderStrategy::Impact,
        max_sweeps: 4,
        ..SolverOptions::default()
    });
    let mut selection = vec![true, false, true];
    let outcome = solver.run(&model, &mut selection);
    assert!(outcome.final_energy <= outcome.initial_energy);
    assert!(outcome.sweeps <= 4);
}
