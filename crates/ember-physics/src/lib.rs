//! Ember Physics - Numeric integration for the firework simulation
//!
//! Provides three interchangeable integrators (semi-implicit Euler, position
//! Verlet, classic RK4) behind a common trait, plus a fixed-timestep stepper
//! that shields the simulation from frame hitches. Integrators are stateless;
//! Verlet's position history lives in a caller-owned slot, so value-typed
//! particles can carry it inline.

mod integrator;
mod stepper;

pub use integrator::{integrator_for, AccelFn, Euler, Integrator, IntegratorKind, Rk4, Verlet};
pub use stepper::{FixedStepper, SubdivideStepper};
