//! Sequential impulse solver for speculative contacts.

use tracing::{trace, warn};

use super::contact::Contact;
use crate::math::EPSILON;
use crate::objects::RigidBody;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    iterations: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}

impl Solver {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Runs up to `iterations` passes over `contacts`, returning the total
    /// number of impulse applications. Stops early after a pass that
    /// resolves nothing.
    ///
    /// A contact is resolved when its bodies would close the gap within
    /// `timestep` at the current relative velocity; the resolving impulse
    /// removes that approach velocity, scaled by `1 + restitution`.
    ///
    /// `contacts` must have been built against `bodies`. A contact whose
    /// indices fall outside the slice is skipped.
    pub fn solve(&self, contacts: &mut [Contact], bodies: &mut [RigidBody], timestep: f32) -> u32 {
        debug_assert!(timestep > 0.0, "solver timestep must be positive");
        let mut total = 0;

        for iteration in 0..self.iterations {
            let mut resolved = 0;

            for contact in contacts.iter_mut() {
                if !contact.fits(bodies) {
                    warn!(pair = ?contact.pair(), len = bodies.len(), "contact outside body slice");
                    continue;
                }
                let rel_vel = contact.relative_velocity(bodies);
                let vel_needed = contact.distance() / timestep;
                let remaining = rel_vel + vel_needed;

                if remaining < EPSILON {
                    let magnitude = (1.0 + contact.restitution()) * rel_vel * contact.effective_mass();
                    contact.apply_impulse(magnitude, bodies);
                    contact.mark_colliding();
                    resolved += 1;
                }
            }

            trace!(iteration, resolved, "solver pass");
            if resolved == 0 {
                break;
            }
            total += resolved;
        }

        total
    }
}
