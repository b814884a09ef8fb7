//! Ember Sim - Firework entities and display choreography
//!
//! Ties the lower crates together:
//! - Ascent trajectories perturb a rocket's velocity each tick
//! - Combo orchestrators fire timed, shaped explosion stages through an
//!   injected spawner
//! - The simulation driver owns the particle pool and the active firework
//!   list and exposes the host-facing tick/launch/snapshot surface

pub mod combo;
pub mod driver;
pub mod firework;
pub mod trajectory;

pub use combo::{ComboKind, ComboOrchestrator, ComboStage, StageOverrides};
pub use driver::{LaunchConfig, SimulationDriver};
pub use firework::{FireworkEntity, FireworkPhase, UpdateContext};
pub use trajectory::{trajectory_for, AscentTrajectory, TrajectoryKind};
