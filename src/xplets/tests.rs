use super::*;
use crate::doublets::Doublet;
use crate::error::RecoError;
use crate::triplets::Triplet;
use crate::types::Hit;

fn hits() -> Vec<Hit> {
    let mut hits: Vec<Hit> = (0..5)
        .map(|l| {
            Hit::new(l as u64, [2.0 + 0.1 * l as f64, 1.0, l as f64], l, 1).with_energy(1.5)
        })
        .collect();
    hits.push(Hit::new(5, [3.0, 1.0, 1.0], 1, 2));
    hits.push(Hit::new(6, [3.5, 1.0, 2.0], 2, 2));
    hits
}

fn triplet(hits: &[Hit], a: usize, b: usize, c: usize) -> Triplet {
    Triplet::from_doublets(&Doublet::new(hits, a, b), &Doublet::new(hits, b, c)).unwrap()
}

fn triplets(hits: &[Hit]) -> Vec<Triplet> {
    // Deliberately out of z order.
    vec![
        triplet(hits, 2, 3, 4),
        triplet(hits, 0, 5, 6),
        triplet(hits, 0, 1, 2),
        triplet(hits, 1, 2, 3),
    ]
}

#[test]
fn chains_consecutive_triplets_into_one_xplet() {
    let hits = hits();
    let triplets = triplets(&hits);
    let xplets = XpletAssembler::new(FitOptions::default()).assemble(
        &hits,
        &triplets,
        &[true, false, true, true],
    );
    assert_eq!(xplets.len(), 1);
    let xplet = &xplets[0];
    let ids: Vec<String> = xplet.triplet_ids.iter().map(|t| t.to_string()).collect();
    assert_eq!(ids, vec!["0_1_2", "1_2_3", "2_3_4"]);
    assert_eq!(xplet.len(), 5);
    assert_eq!(xplet.hit_ids.iter().map(|h| h.0).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert!(xplet.is_truth_match());
    assert!(xplet.energies.iter().all(|&e| e == 1.5));

    let fit = xplet.fit.expect("fit on five layers");
    assert!((fit.x_slope - 0.1).abs() < 1e-9);
    assert!((fit.x_intercept - 2.0).abs() < 1e-9);
    assert!(fit.y_slope.abs() < 1e-9);
    assert_eq!(fit.degrees_of_freedom, 6);
    assert!(fit.p_value > 0.99);
}

#[test]
fn gaps_split_chains_and_outer_starts_are_ignored() {
    let hits = hits();
    let triplets = triplets(&hits);
    let xplets = XpletAssembler::new(FitOptions::default()).assemble(
        &hits,
        &triplets,
        &[true, false, true, false],
    );
    assert_eq!(xplets.len(), 1);
    assert_eq!(xplets[0].len(), 3);
    assert_eq!(xplets[0].triplet_ids[0].to_string(), "0_1_2");
}

#[test]
fn every_innermost_triplet_starts_a_chain() {
    let hits = hits();
    let triplets = triplets(&hits);
    let assembler = XpletAssembler::new(FitOptions {
        enabled: false,
        ..FitOptions::default()
    });
    let xplets = assembler.assemble(&hits, &triplets, &[false, true, true, false]);
    assert_eq!(xplets.len(), 2);
    assert_eq!(xplets[0].triplet_ids[0].to_string(), "0_5_6");
    assert!(!xplets[0].is_truth_match());
    assert!(xplets.iter().all(|x| x.fit.is_none()));
}

#[test]
fn chain_validity_holds() {
    let hits = hits();
    let triplets = triplets(&hits);
    let xplets =
        XpletAssembler::new(FitOptions::default()).assemble(&hits, &triplets, &[true; 4]);
    for xplet in &xplets {
        for pair in xplet.triplet_ids.windows(2) {
            assert_eq!(pair[0].0[1..], pair[1].0[..2]);
        }
    }
}

#[test]
fn degenerate_fit_is_reported() {
    let points = [[0.0, 0.0, 1.0], [0.1, 0.0, 1.0], [0.2, 0.0, 2.0]];
    let err = fit_line(&points, &FitOptions::default()).unwrap_err();
    assert_eq!(
        err,
        RecoError::NumericDegeneracy {
            distinct_z: 2,
            minimum: 3
        }
    );
}

#[test]
fn scattered_points_lower_the_p_value() {
    let options = FitOptions {
        position_resolution: 0.01,
        ..FitOptions::default()
    };
    let points = [
        [0.0, 0.0, 0.0],
        [0.03, 0.0, 1.0],
        [0.0, 0.0, 2.0],
        [0.03, 0.0, 3.0],
    ];
    let fit = fit_line(&points, &options).unwrap();
    assert_eq!(fit.degrees_of_freedom, 4);
    assert!((fit.reduced_chi2 - fit.chi2 / 4.0).abs() < 1e-12);
    assert!(fit.chi2 > 5.0);
    assert!(fit.p_value > 0.0 && fit.p_value < 0.5);
}

#[test]
fn non_positive_resolution_is_rejected() {
    let points = [[0.0, 0.0, 0.0], [0.1, 0.0, 1.0], [0.2, 0.0, 2.0]];
    for sigma in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let options = FitOptions {
            position_resolution: sigma,
            ..FitOptions::default()
        };
        assert!(matches!(options.validate(), Err(RecoError::Configuration(_))));
        assert!(matches!(
            fit_line(&points, &options),
            Err(RecoError::Configuration(_))
        ));
    }
    assert!(FitOptions::default().validate().is_ok());
}
