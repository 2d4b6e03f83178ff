use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity = crate::systems::rigid_body::Vec2::new(x, y);
}

pub(super) fn set_time_step(world: &mut WorldCore, step: f32) {
    world.time_step = step;
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
