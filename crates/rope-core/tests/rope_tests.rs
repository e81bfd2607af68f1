use glam::Vec3;
use rope_core::batch::RopeBatch;
use rope_core::render::PolylineBuffer;
use rope_core::timestep::FixedTimestep;
use rope_core::{Anchors, ConfigError, Rope, RopeConfig, RopeRenderer, TickOutcome};

/// Helper: records every draw call.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(Vec<Vec3>, f32)>,
}

impl RopeRenderer for RecordingRenderer {
    fn draw(&mut self, positions: &[Vec3], width: f32) {
        self.frames.push((positions.to_vec(), width));
    }
}

fn horizontal_anchors(span: f32) -> Anchors {
    Anchors::new(Vec3::ZERO, Vec3::new(span, 0.0, 0.0))
}

#[test]
fn test_new_rope_sizes_chain_from_anchor_span() {
    let rope = Rope::new(RopeConfig::default(), horizontal_anchors(2.0)).unwrap();
    // 2.0 / 0.25 = 8 whole segments' worth of nodes.
    assert_eq!(rope.state.active_count(), 8);
    assert_eq!(rope.state.max_size(), 35);
    assert!(rope.positions().iter().all(|&p| p == Vec3::ZERO));
}

#[test]
fn test_new_rope_clamps_long_span_to_capacity() {
    let config = RopeConfig {
        max_size: 10,
        ..RopeConfig::default()
    };
    let rope = Rope::new(config, horizontal_anchors(100.0)).unwrap();
    assert_eq!(rope.state.active_count(), 10);
}

#[test]
fn test_new_rope_rejects_invalid_config() {
    let config = RopeConfig {
        segment_length: -1.0,
        ..RopeConfig::default()
    };
    let err = Rope::new(config, horizontal_anchors(2.0)).err();
    assert_eq!(err, Some(ConfigError::InvalidSegmentLength(-1.0)));
}

#[test]
fn test_missing_anchors_freeze_the_rope() {
    let mut rope = Rope::new(RopeConfig::default(), horizontal_anchors(2.0)).unwrap();
    let anchors = horizontal_anchors(2.0);
    for _ in 0..5 {
        rope.tick(&anchors, 0.02);
    }
    let frozen = rope.positions().to_vec();

    let outcome = rope.tick(&None::<Anchors>, 0.02);

    assert_eq!(outcome, TickOutcome::SkippedNoAnchors);
    assert_eq!(rope.positions(), frozen.as_slice());
}

#[test]
fn test_update_renders_active_prefix_with_width() {
    let config = RopeConfig {
        line_width: 0.3,
        ..RopeConfig::default()
    };
    let mut rope = Rope::new(config, horizontal_anchors(1.0)).unwrap();
    let mut renderer = RecordingRenderer::default();

    let stepped = rope.update(&horizontal_anchors(1.0), &mut renderer, 0.02);
    let skipped = rope.update(&None::<Anchors>, &mut renderer, 0.02);

    assert!(matches!(stepped, TickOutcome::Stepped { .. }));
    assert_eq!(skipped, TickOutcome::SkippedNoAnchors);
    assert_eq!(renderer.frames.len(), 2);
    for (positions, width) in &renderer.frames {
        assert_eq!(positions.len(), 4);
        assert_eq!(*width, 0.3);
    }
    // A skipped tick re-presents the last valid state.
    assert_eq!(renderer.frames[0].0, renderer.frames[1].0);
}

#[test]
fn test_hanging_rope_sags_and_stays_finite() {
    let anchors = horizontal_anchors(2.0);
    let mut rope = Rope::new(RopeConfig::default(), anchors).unwrap();

    for _ in 0..1000 {
        rope.tick(&anchors, 0.02);
    }

    let p = rope.positions();
    assert!(p.iter().all(|v| v.is_finite()));
    assert_eq!(p[0], anchors.start);
    assert_eq!(p[p.len() - 1], anchors.end);
    for (i, v) in p[1..p.len() - 1].iter().enumerate() {
        assert!(v.y < 0.0, "interior node {} should hang below anchors, y={}", i + 1, v.y);
    }
}

#[test]
fn test_moving_anchor_drags_rope() {
    let mut rope = Rope::new(RopeConfig::default(), horizontal_anchors(2.0)).unwrap();
    for step in 0..200 {
        let end_x = 2.0 + step as f32 * 0.01;
        rope.tick(&horizontal_anchors(end_x), 0.02);
    }
    let p = rope.positions();
    assert_eq!(p[p.len() - 1].x, 2.0 + 199.0 * 0.01);
    assert!(p[p.len() - 2].x > 2.0, "neighbour of end should follow it");
}

#[test]
fn test_fixed_timestep_drives_ticks() {
    let anchors = horizontal_anchors(2.0);
    let mut rope = Rope::new(RopeConfig::default(), anchors).unwrap();
    let mut clock = FixedTimestep::new(0.02, 4);
    let mut buffer = PolylineBuffer::new(rope.state.max_size());

    let mut total_ticks = 0;
    for frame_dt in [0.016, 0.016, 0.033, 0.5, 0.016] {
        for _ in 0..clock.advance(frame_dt) {
            rope.tick(&anchors, clock.step());
            total_ticks += 1;
        }
        rope.render(&mut buffer);
    }

    // 0.016 + 0.016 + 0.033 = 0.065 -> 3 ticks; the 0.5 stall is capped at 4.
    assert!(total_ticks >= 7 && total_ticks <= 8, "ran {total_ticks} ticks");
    assert_eq!(buffer.len(), rope.state.active_count());
    assert_eq!(buffer.vertices()[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(buffer.as_bytes().len(), buffer.len() * 16);
}

#[test]
fn test_batch_ticks_ropes_independently() {
    let mut batch = RopeBatch::new();
    let a = batch.push(
        Rope::new(RopeConfig::default(), horizontal_anchors(2.0)).unwrap(),
        Some(horizontal_anchors(2.0)),
    );
    let b = batch.push(
        Rope::new(RopeConfig::default(), horizontal_anchors(1.0)).unwrap(),
        None,
    );
    let before_b = batch.rope(b).unwrap().positions().to_vec();

    let outcomes = batch.tick(0.02);

    assert_eq!(batch.len(), 2);
    assert!(matches!(outcomes[a], TickOutcome::Stepped { .. }));
    assert_eq!(outcomes[b], TickOutcome::SkippedNoAnchors);
    assert_eq!(batch.rope(b).unwrap().positions(), before_b.as_slice());

    batch.set_anchors(b, Some(horizontal_anchors(1.0)));
    let outcomes = batch.tick(0.02);
    assert!(outcomes.iter().all(|o| matches!(o, TickOutcome::Stepped { .. })));
}
