use track_qubo::prelude::*;

fn main() {
    // Demo stub: one straight track on four layers plus a stray hit
    let geometry = DetectorGeometry {
        layers: (0..4)
            .map(|l| LayerGeometry::uniform(l as f64, 0.0, 10.0, 2))
            .collect(),
    };
    let mut hits: Vec<Hit> = (0..4)
        .map(|l| Hit::new(l as u64, [2.0 + 0.05 * l as f64, 1.0, l as f64], l, 1))
        .collect();
    hits.push(Hit::new(4, [7.5, 1.0, 2.0], 2, 2));

    let params = ReconstructionParams::new(
        TripletOptions::new(0.05, [-0.5, 0.5]),
        GraphOptions::new(0.8, 135, 3),
        QuboOptions::new(1.0),
    );
    let reco = match TrackReconstructor::new(&geometry, params) {
        Ok(reco) => reco,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    match reco.process(&hits) {
        Ok(report) => println!(
            "xplets={} latency_ms={:.3}",
            report.xplets.len(),
            report.trace.timings.total_ms
        ),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
