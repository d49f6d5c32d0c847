//! Hero background selection
//!
//! The home hero is decorative: a failure there must never take the page
//! with it. The selector probes for the animated capability once, then
//! serves either the rich descriptor or a static CSS-only fallback. The
//! rich strategy runs panic-isolated; a panic logs a warning and the
//! fallback is served instead.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

/// What the client should render behind the hero copy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeroDescriptor {
    /// Animated highway/particle background
    Animated {
        lane_count: u8,
        speed: f32,
        particle_density: f32,
        palette: Vec<String>,
    },
    /// Static gradient fallback
    Static { css_class: String },
}

/// One way of producing a hero descriptor
pub trait HeroStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn descriptor(&self) -> HeroDescriptor;
}

/// The rich animated background
pub struct AnimatedHero;

impl HeroStrategy for AnimatedHero {
    fn name(&self) -> &'static str {
        "animated"
    }

    fn descriptor(&self) -> HeroDescriptor {
        HeroDescriptor::Animated {
            lane_count: 4,
            speed: 1.6,
            particle_density: 0.35,
            palette: vec![
                "#03b3c3".to_string(),
                "#d856bf".to_string(),
                "#ffffff".to_string(),
            ],
        }
    }
}

/// CSS-only fallback; cannot fail
pub struct StaticHero;

impl HeroStrategy for StaticHero {
    fn name(&self) -> &'static str {
        "static"
    }

    fn descriptor(&self) -> HeroDescriptor {
        HeroDescriptor::Static {
            css_class: "hero-gradient".to_string(),
        }
    }
}

/// Picks between the rich strategy and the fallback.
/// Capability is probed once at construction.
pub struct HeroSelector {
    rich: Option<Box<dyn HeroStrategy>>,
    fallback: Box<dyn HeroStrategy>,
}

impl HeroSelector {
    pub fn new(rich: Option<Box<dyn HeroStrategy>>) -> Self {
        Self {
            rich,
            fallback: Box::new(StaticHero),
        }
    }

    /// Probe the environment once: the animated hero can be disabled via
    /// HERO_ANIMATED=false (e.g. for low-power clients or incidents).
    pub fn from_env() -> Self {
        let capable = std::env::var("HERO_ANIMATED")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        if capable {
            Self::new(Some(Box::new(AnimatedHero)))
        } else {
            Self::new(None)
        }
    }

    /// Produce a descriptor. Never fails: a panicking rich strategy is
    /// contained here and replaced by the fallback.
    pub fn descriptor(&self) -> HeroDescriptor {
        if let Some(rich) = &self.rich {
            match catch_unwind(AssertUnwindSafe(|| rich.descriptor())) {
                Ok(descriptor) => return descriptor,
                Err(_) => {
                    tracing::warn!(
                        "Hero strategy '{}' panicked; serving static fallback",
                        rich.name()
                    );
                }
            }
        }
        self.fallback.descriptor()
    }
}
