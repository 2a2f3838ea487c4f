//! Lifecycle ordering and teardown behavior through the public API.

use voidscape_core::{
    Dimension, DimensionConfig, DimensionController, DimensionKind, ResourceReleaser,
    TeardownError,
};

fn small_config() -> DimensionConfig {
    let mut config = DimensionConfig::default();
    config.ring_of_chaos.clusters = 3;
    config.ring_of_chaos.objects_per_cluster = 20;
    config.stellar_vortex.arms = 2;
    config.stellar_vortex.points_per_arm = 100;
    config.stellar_vortex.core_spirals = 2;
    config.stellar_vortex.points_per_core_spiral = 30;
    config.pulsar.disk_points = 200;
    config.pulsar.field_arcs = 3;
    config.black_hole.bundles = 2;
    config.black_hole.spirals_per_bundle = 2;
    config.black_hole.points_per_spiral = 50;
    config.infinity_web.curves = 2;
    config.infinity_web.points_per_curve = 60;
    config
}

/// Records every release call so tests can assert count and order.
#[derive(Default)]
struct RecordingReleaser {
    released: Vec<DimensionKind>,
    fail: bool,
}

impl ResourceReleaser for RecordingReleaser {
    fn release(&mut self, dimension: &Dimension) -> Result<(), TeardownError> {
        self.released.push(dimension.kind);
        if self.fail {
            return Err(TeardownError::new("simulated renderer failure"));
        }
        Ok(())
    }
}

#[test]
fn test_replacement_releases_predecessor_exactly_once() {
    let mut controller =
        DimensionController::with_releaser(small_config(), RecordingReleaser::default());

    controller.generate(DimensionKind::RingOfChaos, 1).unwrap();
    assert!(controller.releaser().released.is_empty());

    controller.generate(DimensionKind::Pulsar, 2).unwrap();
    assert_eq!(controller.releaser().released, vec![DimensionKind::RingOfChaos]);
    assert_eq!(controller.current().unwrap().kind, DimensionKind::Pulsar);

    controller.clear();
    assert_eq!(
        controller.releaser().released,
        vec![DimensionKind::RingOfChaos, DimensionKind::Pulsar]
    );
    assert!(!controller.is_active());

    // Clear on Empty releases nothing.
    controller.clear();
    assert_eq!(controller.releaser().released.len(), 2);
}

#[test]
fn test_teardown_failure_never_blocks_transition() {
    let releaser = RecordingReleaser {
        fail: true,
        ..Default::default()
    };
    let mut controller = DimensionController::with_releaser(small_config(), releaser);

    controller.generate(DimensionKind::BlackHole, 5).unwrap();
    controller.generate(DimensionKind::InfinityWeb, 6).unwrap();
    assert_eq!(controller.releaser().released, vec![DimensionKind::BlackHole]);
    assert_eq!(controller.current().unwrap().kind, DimensionKind::InfinityWeb);

    controller.clear();
    assert!(!controller.is_active());
}

#[test]
fn test_invalid_parameters_leave_active_scene_untouched() {
    let mut config = small_config();
    config.pulsar.disk_inner = config.pulsar.disk_outer + 1.0;
    let mut controller = DimensionController::with_releaser(config, RecordingReleaser::default());

    controller.generate(DimensionKind::Tesseract, 0).unwrap();
    controller.tick(3.0);
    let before: Vec<_> = controller
        .current()
        .unwrap()
        .buffers
        .iter()
        .map(|b| b.element_count())
        .collect();

    assert!(controller.generate(DimensionKind::Pulsar, 1).is_err());

    // Validation failed before teardown: nothing released, scene intact.
    assert!(controller.releaser().released.is_empty());
    let dim = controller.current().unwrap();
    assert_eq!(dim.kind, DimensionKind::Tesseract);
    let after: Vec<_> = dim.buffers.iter().map(|b| b.element_count()).collect();
    assert_eq!(after, before);
}

#[test]
fn test_every_kind_cycles_through_the_controller() {
    let mut controller =
        DimensionController::with_releaser(small_config(), RecordingReleaser::default());
    for (i, kind) in DimensionKind::ALL.into_iter().enumerate() {
        controller.generate(kind, i as u32).unwrap();
        controller.tick(1.0 + i as f64);
        assert_eq!(controller.current().unwrap().kind, kind);
        assert!(controller.current().unwrap().initial_view.is_some());
    }
    // Five replacements released the five predecessors, in order.
    assert_eq!(controller.releaser().released, DimensionKind::ALL[..5].to_vec());
}

#[test]
fn test_framing_uses_per_kind_padding() {
    let mut wide = small_config();
    wide.tesseract.padding = 2.2;
    let mut narrow = small_config();
    narrow.tesseract.padding = 1.1;

    let mut a = DimensionController::new(wide);
    let mut b = DimensionController::new(narrow);
    let da = a.generate(DimensionKind::Tesseract, 0).unwrap().initial_view.unwrap();
    let db = b.generate(DimensionKind::Tesseract, 0).unwrap().initial_view.unwrap();
    assert!((da.distance() / db.distance() - 2.0).abs() < 1e-4);
}
