use crate::objects::RigidBody;

/// Time-stepping scheme used to advance rigid bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMethod {
    /// Velocity Verlet with the force held constant over the step.
    #[default]
    Verlet,
    /// Explicit Euler: position advances with the velocity from the start
    /// of the step.
    Euler,
}

/// Advances `body` by `dt` under its accumulated force, then clears the
/// force accumulator. Static bodies keep their state; only the force is
/// cleared.
pub fn integrate(body: &mut RigidBody, dt: f32, method: IntegrationMethod) {
    if body.is_static {
        body.clear_force();
        return;
    }

    let accel = body.force * body.inv_mass();
    let center = body.center();

    match method {
        IntegrationMethod::Verlet => {
            body.collider.set_center(center + dt * (body.velocity + 0.5 * dt * accel));
            body.velocity += dt * accel;
        }
        IntegrationMethod::Euler => {
            body.collider.set_center(center + dt * body.velocity);
            body.velocity += dt * accel;
        }
    }

    // Clear force accumulator for the next step
    body.clear_force();
}
