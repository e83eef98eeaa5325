//! Ambient particle field component.
//!
//! Renders a decorative animated particle field on an HTML canvas with four
//! interchangeable themes, one chosen at random per session:
//! - drifting dots with pointer repulsion and proximity links
//! - a rotating 3D net of connected nodes, tilted by the pointer
//! - floating glow-pulsing fireflies
//! - falling swirling snow
//!
//! The simulation is frame-count-driven and fully deterministic under a
//! fixed seed and event sequence.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleFieldCanvas};
//!
//! let config = FieldConfig::default();
//! view! { <ParticleFieldCanvas config=config fullscreen=true /> }
//! ```

mod component;
mod env;
mod field;
mod particle;
pub mod projection;
mod surface;
pub mod theme;
mod types;

pub use component::ParticleFieldCanvas;
pub use env::Environment;
pub use field::ParticleField;
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface};
pub use theme::{Color, ThemeKind};
pub use types::{DEFAULT_PARTICLE_COUNT, FieldConfig};
