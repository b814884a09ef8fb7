//! Ember Particles - Pooled particle simulation
//!
//! Provides the smallest animated unit of a firework display:
//! - Behavior-tagged particles (willow droop, glitter flicker, comet trails, ...)
//! - A capacity-bounded pool with FIFO eviction and full reinit on reuse
//! - Frame-rate independent drag/friction/gravity application
//! - A deterministic xorshift PRNG for spawning

pub mod behavior;
pub mod particle;
pub mod pool;
pub mod rand;

pub use behavior::{BehaviorDefaults, BehaviorKind};
pub use particle::{Particle, ParticleView, SpawnOptions};
pub use pool::{ParticlePool, Spawner};
pub use rand::ParticleRng;
