use super::WorldCore;

/// Advance by a variable frame delta at the fixed timestep.
///
/// The accumulator is local to the call: it starts at zero, takes the
/// delta, and any remainder smaller than one timestep is dropped on
/// return. Repeated sub-timestep deltas therefore never add up to a
/// step, and the simulation runs slightly behind wall clock whenever
/// `delta_time` is not an exact multiple of the timestep.
pub(super) fn update(world: &mut WorldCore, delta_time: f32) {
    // A non-positive timestep could never drain the accumulator.
    if world.time_step <= 0.0 {
        return;
    }

    let mut accumulator = 0.0;
    accumulator += delta_time;

    while accumulator >= world.time_step {
        world.step();
        accumulator -= world.time_step;
    }
}
