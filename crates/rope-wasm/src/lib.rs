use glam::Vec3;
use rope_core::render::{PolylineBuffer, RopeVertex};
use rope_core::{Anchors, Rope, RopeConfig, TickOutcome};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct RopeWorld {
    rope: Rope,
    buffer: PolylineBuffer,
}

#[wasm_bindgen]
impl RopeWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(
        max_size: usize,
        segment_length: f32,
        gravity_scale: f32,
        line_width: f32,
        sx: f32, sy: f32, sz: f32,
        ex: f32, ey: f32, ez: f32,
    ) -> RopeWorld {
        let anchors = Anchors::new(Vec3::new(sx, sy, sz), Vec3::new(ex, ey, ez));
        let config = RopeConfig {
            max_size,
            segment_length,
            gravity_scale,
            line_width,
            ..RopeConfig::default()
        };

        let rope = match Rope::new(config, anchors) {
            Ok(rope) => rope,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("WASM RopeWorld: {}, falling back to defaults", e).into(),
                );
                // The default config always validates.
                match Rope::new(RopeConfig::default(), anchors) {
                    Ok(rope) => rope,
                    Err(e) => wasm_bindgen::throw_str(&e.to_string()),
                }
            }
        };

        web_sys::console::log_1(
            &format!(
                "WASM RopeWorld created: {} of {} nodes active",
                rope.state.active_count(),
                rope.state.max_size()
            )
            .into(),
        );

        let mut world = RopeWorld {
            buffer: PolylineBuffer::new(rope.state.max_size()),
            rope,
        };
        world.rope.render(&mut world.buffer);
        world
    }

    /// Tick once against the given anchors and refresh the vertex buffer.
    /// Returns elapsed milliseconds.
    #[wasm_bindgen]
    pub fn step(
        &mut self,
        dt: f32,
        sx: f32, sy: f32, sz: f32,
        ex: f32, ey: f32, ez: f32,
    ) -> f32 {
        let start = js_sys::Date::now();
        let anchors = Anchors::new(Vec3::new(sx, sy, sz), Vec3::new(ex, ey, ez));
        self.rope.update(&anchors, &mut self.buffer, dt);
        let elapsed = js_sys::Date::now() - start;
        elapsed as f32
    }

    /// Tick with anchors unavailable: the rope stays frozen.
    /// Returns whether a simulation step ran.
    #[wasm_bindgen]
    pub fn step_without_anchors(&mut self, dt: f32) -> bool {
        let outcome = self.rope.update(&None::<Anchors>, &mut self.buffer, dt);
        matches!(outcome, TickOutcome::Stepped { .. })
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<RopeVertex, f32>(self.buffer.vertices()).as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_vertex_buffer_byte_length(&self) -> usize {
        self.buffer.as_bytes().len()
    }

    #[wasm_bindgen]
    pub fn active_count(&self) -> usize {
        self.rope.state.active_count()
    }

    #[wasm_bindgen]
    pub fn set_iterations(&mut self, iterations: u32) {
        self.rope.solver.iterations = iterations.max(1);
    }

    #[wasm_bindgen]
    pub fn set_gravity_scale(&mut self, gravity_scale: f32) {
        if gravity_scale.is_finite() && gravity_scale >= 0.0 {
            self.rope.solver.gravity_scale = gravity_scale;
        }
    }
}
