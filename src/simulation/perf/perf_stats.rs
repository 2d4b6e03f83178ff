use wasm_bindgen::prelude::*;

/// Per-step timing and counter snapshot. All zeros while perf metrics
/// are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) joints_ms: f64,
    pub(super) detect_ms: f64,
    pub(super) resolve_ms: f64,
    pub(super) body_count: u32,
    pub(super) joint_count: u32,
    pub(super) sleeping_bodies: u32,
    pub(super) pair_tests: u32,
    pub(super) contacts: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn joints_ms(&self) -> f64 { self.joints_ms }
    #[wasm_bindgen(getter)]
    pub fn detect_ms(&self) -> f64 { self.detect_ms }
    #[wasm_bindgen(getter)]
    pub fn resolve_ms(&self) -> f64 { self.resolve_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> u32 { self.joint_count }
    #[wasm_bindgen(getter)]
    pub fn sleeping_bodies(&self) -> u32 { self.sleeping_bodies }
    #[wasm_bindgen(getter)]
    pub fn pair_tests(&self) -> u32 { self.pair_tests }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
}
