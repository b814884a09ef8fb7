//! Behavior tags and their physical defaults
//!
//! Each tag selects a per-tick motion rule and a set of default physical
//! parameters. Callers may override any default at spawn time.

use serde::{Deserialize, Serialize};

/// Specialized per-tick motion/visual rule for a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    /// Plain ember: drag, friction, gravity, linear fade
    #[default]
    Default,
    /// Droops downward with heavy damping, long-lived, short trail
    Willow,
    /// Hard on/off alpha strobe as it fades
    Glitter,
    /// Near-weightless, wanders with sinusoidal jitter, soft flicker
    Firefly,
    /// Bright head with a bounded position trail
    Comet,
    /// Orbits its spawn origin at a slowly rotating angle
    Galaxy,
    /// Slow smooth fade with a gentle sine shimmer
    Ghost,
    /// Does not move; holds position and fades out
    Stationary,
}

/// Default physical parameters for a behavior, overridable at spawn
#[derive(Debug, Clone, Copy)]
pub struct BehaviorDefaults {
    /// Per-60Hz-frame velocity retention factor
    pub friction: f32,
    /// Multiplier on the pool's base gravity
    pub gravity: f32,
    /// Life lost per normalized 60Hz frame
    pub decay: f32,
    /// Render size hint
    pub size: f32,
    /// Trail buffer length (0 = no trail)
    pub trail: usize,
}

impl BehaviorKind {
    pub fn defaults(&self) -> BehaviorDefaults {
        match self {
            BehaviorKind::Default => BehaviorDefaults {
                friction: 0.98,
                gravity: 1.0,
                decay: 0.015,
                size: 1.0,
                trail: 0,
            },
            BehaviorKind::Willow => BehaviorDefaults {
                friction: 0.92,
                gravity: 0.35,
                decay: 0.006,
                size: 0.9,
                trail: 4,
            },
            BehaviorKind::Glitter => BehaviorDefaults {
                friction: 0.97,
                gravity: 0.9,
                decay: 0.02,
                size: 0.8,
                trail: 0,
            },
            BehaviorKind::Firefly => BehaviorDefaults {
                friction: 0.96,
                gravity: 0.15,
                decay: 0.008,
                size: 0.7,
                trail: 0,
            },
            BehaviorKind::Comet => BehaviorDefaults {
                friction: 0.985,
                gravity: 0.8,
                decay: 0.012,
                size: 1.3,
                trail: 8,
            },
            BehaviorKind::Galaxy => BehaviorDefaults {
                friction: 1.0,
                gravity: 0.0,
                decay: 0.01,
                size: 0.8,
                trail: 0,
            },
            BehaviorKind::Ghost => BehaviorDefaults {
                friction: 0.95,
                gravity: 0.3,
                decay: 0.007,
                size: 1.0,
                trail: 0,
            },
            BehaviorKind::Stationary => BehaviorDefaults {
                friction: 1.0,
                gravity: 0.0,
                decay: 0.018,
                size: 1.2,
                trail: 0,
            },
        }
    }

    /// Alpha as a deterministic function of (life, behavior, phase).
    /// `life` runs 1 → 0; `phase` is the particle's fixed random phase so
    /// flickering particles don't strobe in lockstep.
    pub fn alpha(&self, life: f32, phase: f32) -> f32 {
        let life = life.clamp(0.0, 1.0);
        match self {
            BehaviorKind::Glitter => {
                // Hard strobe: on/off square wave driven by remaining life
                let w = (life * 40.0 + phase * 7.0).sin();
                if w > -0.2 {
                    life
                } else {
                    life * 0.15
                }
            }
            BehaviorKind::Firefly => {
                let w = 0.5 + 0.5 * (life * 25.0 + phase * 5.0).sin();
                life * (0.4 + 0.6 * w)
            }
            BehaviorKind::Ghost => {
                let w = 0.5 + 0.5 * (life * 12.0 + phase * 3.0).sin();
                life * (0.6 + 0.4 * w)
            }
            // Everything else fades linearly with life
            _ => life,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BehaviorKind; 8] = [
        BehaviorKind::Default,
        BehaviorKind::Willow,
        BehaviorKind::Glitter,
        BehaviorKind::Firefly,
        BehaviorKind::Comet,
        BehaviorKind::Galaxy,
        BehaviorKind::Ghost,
        BehaviorKind::Stationary,
    ];

    #[test]
    fn defaults_are_physical() {
        for kind in ALL {
            let d = kind.defaults();
            assert!(d.friction > 0.0 && d.friction <= 1.0, "{kind:?}");
            assert!(d.decay > 0.0, "{kind:?}");
            assert!(d.size > 0.0, "{kind:?}");
        }
    }

    #[test]
    fn alpha_is_deterministic() {
        for kind in ALL {
            assert_eq!(kind.alpha(0.5, 1.3), kind.alpha(0.5, 1.3));
        }
    }

    #[test]
    fn alpha_zero_at_death() {
        for kind in ALL {
            assert!(kind.alpha(0.0, 0.7) <= 1e-6, "{kind:?}");
        }
    }

    #[test]
    fn alpha_bounded_by_life() {
        for kind in ALL {
            for i in 0..20 {
                let life = i as f32 / 20.0;
                let a = kind.alpha(life, 2.1);
                assert!(a >= 0.0 && a <= life + 1e-6, "{kind:?}");
            }
        }
    }
}
