use super::*;
use crate::error::RecoError;
use crate::types::Hit;
use nalgebra::Point3;

fn four_layer_geometry(bins: usize) -> DetectorGeometry {
    DetectorGeometry {
        layers: (0..4)
            .map(|l| LayerGeometry::uniform(l as f64, 0.0, 10.0, bins))
            .collect(),
    }
}

#[test]
fn boundary_point_belongs_to_lower_segment() {
    let index = SegmentIndex::new(&four_layer_geometry(2), SegmentOptions::default()).unwrap();
    let on_edge = index.locate(&Point3::new(5.0, 0.0, 1.0)).unwrap();
    assert_eq!(on_edge, SegmentId { layer: 1, index: 0 });
    let above = index.locate(&Point3::new(5.0001, 0.0, 1.0)).unwrap();
    assert_eq!(above.index, 1);
    let outer_edge = index.locate(&Point3::new(10.0, 0.0, 1.0)).unwrap();
    assert_eq!(outer_edge.index, 1);
}

#[test]
fn points_off_geometry_are_mismatches() {
    let index = SegmentIndex::new(&four_layer_geometry(2), SegmentOptions::default()).unwrap();
    let off_layer = index.locate(&Point3::new(1.0, 0.0, 0.5));
    assert!(matches!(off_layer, Err(RecoError::GeometryMismatch { hit: None, .. })));
    let outside = index.locate(&Point3::new(-0.1, 0.0, 2.0));
    assert!(matches!(outside, Err(RecoError::GeometryMismatch { .. })));
}

#[test]
fn declared_layer_must_agree_with_z() {
    let index = SegmentIndex::new(&four_layer_geometry(2), SegmentOptions::default()).unwrap();
    let hit = Hit::new(7, [1.0, 0.0, 2.0], 1, 0);
    match index.locate_hit(&hit) {
        Err(RecoError::GeometryMismatch { hit: Some(id), .. }) => assert_eq!(id.0, 7),
        other => panic!("expected mismatch for hit 7, got {other:?}"),
    }
}

#[test]
fn neighbors_cover_same_and_adjacent_cells() {
    let index = SegmentIndex::new(&four_layer_geometry(4), SegmentOptions::default()).unwrap();
    let middle: Vec<usize> = index
        .neighbors(SegmentId { layer: 0, index: 1 })
        .iter()
        .map(|s| s.index)
        .collect();
    assert_eq!(middle, vec![0, 1, 2]);
    let corner: Vec<usize> = index
        .neighbors(SegmentId { layer: 2, index: 0 })
        .iter()
        .map(|s| s.index)
        .collect();
    assert_eq!(corner, vec![0, 1]);
    assert!(index.neighbors(SegmentId { layer: 3, index: 0 }).is_empty());
}

#[test]
fn neighbors_respect_y_binning() {
    let geometry = DetectorGeometry {
        layers: (0..3)
            .map(|l| LayerGeometry::uniform(l as f64, 0.0, 4.0, 4).with_uniform_y(0.0, 4.0, 4))
            .collect(),
    };
    let options = SegmentOptions {
        neighbor_reach: 0,
        ..SegmentOptions::default()
    };
    let index = SegmentIndex::new(&geometry, options).unwrap();
    let source = index.locate(&Point3::new(1.5, 2.5, 0.0)).unwrap();
    let reachable = index.neighbors(source);
    assert_eq!(reachable.len(), 1);
    let target = index.segment(reachable[0]).unwrap();
    assert_eq!(target.x_range, [1.0, 2.0]);
    assert_eq!(target.y_range, Some([2.0, 3.0]));
}

#[test]
fn partition_excludes_mismatched_hits() {
    let _ = env_logger::builder().is_test(true).try_init();
    let index = SegmentIndex::new(&four_layer_geometry(2), SegmentOptions::default()).unwrap();
    let hits = vec![
        Hit::new(0, [1.0, 0.0, 0.0], 0, 1),
        Hit::new(1, [7.0, 0.0, 1.0], 1, 1),
        Hit::new(2, [1.0, 0.0, 1.5], 1, 2),
        Hit::new(3, [11.0, 0.0, 2.0], 2, 2),
    ];
    let partition = index.partition(&hits);
    assert_eq!(partition.placed, 2);
    assert_eq!(partition.rejected, 2);
    assert_eq!(partition.hits_in(SegmentId { layer: 0, index: 0 }), &[0]);
    assert_eq!(partition.hits_in(SegmentId { layer: 1, index: 1 }), &[1]);
    assert_eq!(partition.layer_count(), 4);
}

#[test]
fn invalid_geometry_is_rejected() {
    let too_shallow = DetectorGeometry {
        layers: vec![
            LayerGeometry::uniform(0.0, 0.0, 1.0, 1),
            LayerGeometry::uniform(1.0, 0.0, 1.0, 1),
        ],
    };
    assert!(matches!(
        SegmentIndex::new(&too_shallow, SegmentOptions::default()),
        Err(RecoError::Configuration(_))
    ));

    let mut unsorted = four_layer_geometry(2);
    unsorted.layers[1].x_edges = vec![0.0, 6.0, 5.0];
    assert!(SegmentIndex::new(&unsorted, SegmentOptions::default()).is_err());

    let mut z_reversed = four_layer_geometry(2);
    z_reversed.layers.swap(1, 2);
    assert!(SegmentIndex::new(&z_reversed, SegmentOptions::default()).is_err());
}
