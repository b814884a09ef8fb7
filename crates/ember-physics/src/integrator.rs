//! Integrator strategies
//!
//! All three take the same inputs and return the new (position, velocity)
//! pair. `prev_pos` is only consulted by Verlet; the other integrators keep
//! it in sync so an entity can switch integrators without a glitch.

use ember_core::Vec3;
use serde::{Deserialize, Serialize};

/// Acceleration as a function of (position, velocity)
pub type AccelFn<'a> = &'a dyn Fn(Vec3, Vec3) -> Vec3;

/// A numeric method advancing position/velocity given acceleration and a timestep
pub trait Integrator {
    /// Advance one step. `prev_pos` is the entity's own position-history slot:
    /// None on the first step, updated by the integrator on every step.
    fn integrate(
        &self,
        pos: Vec3,
        vel: Vec3,
        prev_pos: &mut Option<Vec3>,
        accel: AccelFn,
        dt: f32,
    ) -> (Vec3, Vec3);

    fn name(&self) -> &str;
}

/// Which integrator a pool or entity uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntegratorKind {
    #[default]
    Euler,
    Verlet,
    Rk4,
}

/// Look up the shared integrator instance for a kind
pub fn integrator_for(kind: IntegratorKind) -> &'static dyn Integrator {
    match kind {
        IntegratorKind::Euler => &Euler,
        IntegratorKind::Verlet => &Verlet,
        IntegratorKind::Rk4 => &Rk4,
    }
}

/// Semi-implicit Euler: cheap, drifts under large dt
pub struct Euler;

impl Integrator for Euler {
    fn integrate(
        &self,
        pos: Vec3,
        vel: Vec3,
        prev_pos: &mut Option<Vec3>,
        accel: AccelFn,
        dt: f32,
    ) -> (Vec3, Vec3) {
        let new_vel = vel + accel(pos, vel) * dt;
        let new_pos = pos + new_vel * dt;
        *prev_pos = Some(pos);
        (new_pos, new_vel)
    }

    fn name(&self) -> &str {
        "euler"
    }
}

/// Position Verlet: time-reversible, stable over long runs.
/// Velocity is derived as `(pos' - pos) / dt` for consumers that need it.
pub struct Verlet;

impl Integrator for Verlet {
    fn integrate(
        &self,
        pos: Vec3,
        vel: Vec3,
        prev_pos: &mut Option<Vec3>,
        accel: AccelFn,
        dt: f32,
    ) -> (Vec3, Vec3) {
        // First step: synthesize the missing history with one backward Euler step
        let prev = prev_pos.unwrap_or_else(|| pos - vel * dt);
        let a = accel(pos, vel);
        let new_pos = pos + (pos - prev) + a * (dt * dt);
        let new_vel = if dt > 0.0 {
            (new_pos - pos) * (1.0 / dt)
        } else {
            vel
        };
        *prev_pos = Some(pos);
        (new_pos, new_vel)
    }

    fn name(&self) -> &str {
        "verlet"
    }
}

/// Classic fourth-order Runge-Kutta: four acceleration evaluations per step
pub struct Rk4;

impl Integrator for Rk4 {
    fn integrate(
        &self,
        pos: Vec3,
        vel: Vec3,
        prev_pos: &mut Option<Vec3>,
        accel: AccelFn,
        dt: f32,
    ) -> (Vec3, Vec3) {
        let half = dt * 0.5;

        // Derivative samples at t, t+dt/2, t+dt/2, t+dt
        let v1 = vel;
        let a1 = accel(pos, v1);

        let v2 = vel + a1 * half;
        let a2 = accel(pos + v1 * half, v2);

        let v3 = vel + a2 * half;
        let a3 = accel(pos + v2 * half, v3);

        let v4 = vel + a3 * dt;
        let a4 = accel(pos + v3 * dt, v4);

        let new_pos = pos + (v1 + v2 * 2.0 + v3 * 2.0 + v4) * (dt / 6.0);
        let new_vel = vel + (a1 + a2 * 2.0 + a3 * 2.0 + a4) * (dt / 6.0);
        *prev_pos = Some(pos);
        (new_pos, new_vel)
    }

    fn name(&self) -> &str {
        "rk4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn zero_accel(_p: Vec3, _v: Vec3) -> Vec3 {
        Vec3::ZERO
    }

    #[test]
    fn euler_constant_velocity() {
        let mut prev = None;
        let (pos, vel) = Euler.integrate(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            &mut prev,
            &zero_accel,
            DT,
        );
        assert!((pos.x - DT).abs() < 1e-6);
        assert!((vel.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn verlet_first_step_matches_euler() {
        let mut prev = None;
        let v0 = Vec3::new(2.0, 1.0, 0.0);
        let (pos, vel) = Verlet.integrate(Vec3::ZERO, v0, &mut prev, &zero_accel, DT);
        assert!((pos.x - v0.x * DT).abs() < 1e-5);
        assert!((vel.x - v0.x).abs() < 1e-4);
        assert!(prev.is_some());
    }

    #[test]
    fn verlet_preserves_speed_over_long_run() {
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(1.0, 0.5, -0.25);
        let speed0 = vel.length();
        let mut prev = None;
        for _ in 0..10_000 {
            let (p, v) = Verlet.integrate(pos, vel, &mut prev, &zero_accel, DT);
            pos = p;
            vel = v;
        }
        assert!((vel.length() - speed0).abs() < 1e-3);
    }

    #[test]
    fn rk4_preserves_speed_over_long_run() {
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(1.0, 0.5, -0.25);
        let speed0 = vel.length();
        let mut prev = None;
        for _ in 0..10_000 {
            let (p, v) = Rk4.integrate(pos, vel, &mut prev, &zero_accel, DT);
            pos = p;
            vel = v;
        }
        assert!((vel.length() - speed0).abs() < 1e-3);
    }

    #[test]
    fn rk4_exact_for_constant_gravity() {
        // Under constant acceleration, RK4 reproduces the closed form
        let g = -9.8;
        let grav = move |_p: Vec3, _v: Vec3| Vec3::new(0.0, g, 0.0);
        let mut pos = Vec3::ZERO;
        let mut vel = Vec3::new(0.0, 10.0, 0.0);
        let mut prev = None;
        let steps = 60;
        for _ in 0..steps {
            let (p, v) = Rk4.integrate(pos, vel, &mut prev, &grav, DT);
            pos = p;
            vel = v;
        }
        let t = steps as f32 * DT;
        let expected_y = 10.0 * t + 0.5 * g * t * t;
        assert!((pos.y - expected_y).abs() < 1e-3);
    }

    #[test]
    fn kind_lookup_round_trips() {
        for kind in [IntegratorKind::Euler, IntegratorKind::Verlet, IntegratorKind::Rk4] {
            let integ = integrator_for(kind);
            assert!(!integ.name().is_empty());
        }
    }
}
