//! Simulation dynamics: gravitational force accumulation and time integration.

pub mod forces;
pub mod integrator;

pub use forces::{gravitational_force, pairwise_force, GravityAccumulator};
pub use integrator::{validate_time_step, IntegrationMode, Integrator};

use std::borrow::{Borrow, BorrowMut};

use crate::core::body::Body;

pub(crate) fn as_body<B: Borrow<Body>>(body: &B) -> &Body {
    <B as Borrow<Body>>::borrow(body)
}

pub(crate) fn as_body_mut<B: BorrowMut<Body>>(body: &mut B) -> &mut Body {
    <B as BorrowMut<Body>>::borrow_mut(body)
}
