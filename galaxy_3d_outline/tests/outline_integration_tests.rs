//! Integration tests for the selection outline
//!
//! Drives an OutlineRenderer through whole frames against a CPU-only
//! recording backend. No GPU required.
//!
//! Run with: cargo test --test outline_integration_tests


use galaxy_3d_outline::galaxy3d::camera::CameraId;
use galaxy_3d_outline::galaxy3d::outline::{HookOutcome, SkipReason};
use galaxy_3d_outline::galaxy3d::selection::ObjectTable;
use galaxy_3d_outline::galaxy3d::OutlineRenderer;
use galaxy_3d_outline::glam::Vec3;
use outline_test_utils::{create_camera, create_object, part_at, programs, RecordingBackend};

fn registered_outline() -> OutlineRenderer {
    let mut outline = OutlineRenderer::new("scene", programs());
    outline.register();
    outline
}

// ============================================================================
// FRAME TESTS
// ============================================================================

#[test]
fn test_integration_two_objects_full_frame() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO), part_at(2, Vec3::X)]);
    let b = create_object(&mut table, "b", vec![part_at(3, -Vec3::X)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);

    outline.select(a, &table);
    outline.select(b, &table);
    let outcome = outline.on_camera_pre_render(&camera, &mut backend);
    assert!(matches!(outcome, HookOutcome::Bound(_)));

    // Camera renders
    let frame = backend.render(camera.id()).unwrap();
    assert_eq!(frame.count_prefix("draw "), 6);
    assert_eq!(frame.count_prefix("get "), 3);
    assert_eq!(frame.count_prefix("release "), 3);
    assert_eq!(frame.count_prefix("blit CameraTarget->_RT1 pass=6"), 1);
    assert_eq!(frame.count_prefix("blit _RT1->_RT0 pass=5"), 1);
    assert_eq!(frame.count_prefix("blit _RT0->_RT1 pass=5"), 1);
    assert_eq!(frame.count_prefix("blit _RT1->CameraTarget pass=4"), 1);
    assert_eq!(frame.commands.first().map(String::as_str), Some("get _ObjectSelectedCopy 1280x720"));
    assert_eq!(frame.commands.last().map(String::as_str), Some("release _RT0"));

    assert!(outline.on_camera_post_render(&camera, &mut backend));
    assert_eq!(backend.events, vec!["attach #1".to_string(), "detach #1".to_string()]);
}

#[test]
fn test_integration_object_ids_follow_selection_order() {
    let mut table = ObjectTable::new();
    let handles: Vec<_> = (0..4)
        .map(|i| create_object(&mut table, &format!("obj{}", i), vec![part_at(i, Vec3::ZERO)]))
        .collect();
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    for &handle in &handles {
        outline.select(handle, &table);
    }

    outline.on_camera_pre_render(&camera, &mut backend);
    let frame = backend.render(camera.id()).unwrap();

    assert_eq!(frame.object_ids, vec![0.2, 0.4, 0.6, 0.8]);
}

#[test]
fn test_integration_culled_object_keeps_id_slot() {
    let mut table = ObjectTable::new();
    let far = create_object(&mut table, "far", vec![part_at(1, Vec3::splat(500.0))]);
    let near = create_object(&mut table, "near", vec![part_at(2, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    outline.select(far, &table);
    outline.select(near, &table);

    outline.on_camera_pre_render(&camera, &mut backend);
    let frame = backend.render(camera.id()).unwrap();

    assert_eq!(frame.object_ids.len(), 1);
    assert!((frame.object_ids[0] - 2.0 / 3.0).abs() < 1e-6);
    assert_eq!(frame.count_prefix("draw 2 "), 2);
    assert_eq!(frame.count_prefix("draw 1 "), 0);
}

#[test]
fn test_integration_select_twice_equals_once() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);

    outline.select(a, &table);
    outline.select(a, &table);
    assert_eq!(outline.registry().len(), 1);

    outline.on_camera_pre_render(&camera, &mut backend);
    let frame = backend.render(camera.id()).unwrap();
    assert_eq!(frame.count_prefix("draw "), 2);
    assert_eq!(frame.object_ids, vec![0.5]);
}

// ============================================================================
// EARLY EXIT TESTS
// ============================================================================

#[test]
fn test_integration_zero_width_never_binds() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    outline.select(a, &table);
    outline.set_outline_pixel_width(0.0);

    let outcome = outline.on_camera_pre_render(&camera, &mut backend);

    assert_eq!(outcome, HookOutcome::Skipped(SkipReason::ZeroWidth));
    assert!(backend.events.is_empty());
    assert!(outline.sequence().is_none());
}

#[test]
fn test_integration_deselect_last_object_early_exits_next_frame() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    outline.select(a, &table);

    // Frame 1: outline drawn, targets balanced
    outline.on_camera_pre_render(&camera, &mut backend);
    let frame = backend.render(camera.id()).unwrap();
    assert_eq!(frame.count_prefix("get "), frame.count_prefix("release "));
    outline.on_camera_post_render(&camera, &mut backend);

    // Frame 2: nothing selected
    outline.deselect(a);
    let outcome = outline.on_camera_pre_render(&camera, &mut backend);

    assert_eq!(outcome, HookOutcome::Skipped(SkipReason::EmptySelection));
    assert!(!backend.is_attached(camera.id()));
    assert_eq!(backend.render(camera.id()).unwrap().commands.len(), 0);
}

#[test]
fn test_integration_selection_fully_culled_never_binds() {
    let mut table = ObjectTable::new();
    let far = create_object(&mut table, "far", vec![part_at(1, Vec3::new(0.0, 0.0, 50.0))]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    outline.select(far, &table);

    let outcome = outline.on_camera_pre_render(&camera, &mut backend);

    assert_eq!(outcome, HookOutcome::Skipped(SkipReason::NothingVisible));
    assert_eq!(backend.attached_count(), 0);
}

#[test]
fn test_integration_destroyed_object_is_not_selectable() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    table.destroy_object(a);
    let mut outline = registered_outline();

    assert!(!outline.select(a, &table));
    assert!(outline.registry().is_empty());
}

// ============================================================================
// CAMERA BINDING TESTS
// ============================================================================

#[test]
fn test_integration_camera_switch_detaches_first() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let game = create_camera(1);
    let scene_view = create_camera(2);
    outline.select(a, &table);

    // Host skipped post-render for the game camera
    outline.on_camera_pre_render(&game, &mut backend);
    outline.on_camera_pre_render(&scene_view, &mut backend);

    assert_eq!(backend.events, vec![
        "attach #1".to_string(),
        "detach #1".to_string(),
        "attach #2".to_string(),
    ]);
    assert_eq!(outline.bound_camera(), Some(CameraId(2)));
    assert_eq!(backend.attached_count(), 1);
}

#[test]
fn test_integration_two_cameras_per_frame() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let cameras = [create_camera(1), create_camera(2)];
    outline.select(a, &table);

    for _frame in 0..2 {
        for camera in &cameras {
            outline.on_camera_pre_render(camera, &mut backend);
            assert_eq!(outline.bound_camera(), Some(camera.id()));
            assert_eq!(backend.attached_count(), 1);
            outline.on_camera_post_render(camera, &mut backend);
        }
    }

    assert_eq!(backend.events.len(), 8);
    assert_eq!(backend.attached_count(), 0);
}

#[test]
fn test_integration_unregister_cleans_backend() {
    let mut table = ObjectTable::new();
    let a = create_object(&mut table, "a", vec![part_at(1, Vec3::ZERO)]);
    let mut outline = registered_outline();
    let mut backend = RecordingBackend::new();
    let camera = create_camera(1);
    outline.select(a, &table);

    outline.on_camera_pre_render(&camera, &mut backend);
    outline.unregister(&mut backend);

    assert_eq!(backend.attached_count(), 0);
    assert_eq!(outline.on_camera_pre_render(&camera, &mut backend), HookOutcome::Unregistered);
}
