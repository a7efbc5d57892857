//! melt-core: stable foundation for meltline.
//!
//! Contains:
//! - types (samples, curve identity, curve records)
//! - color (deterministic seed-to-HSL assignment)
//! - numeric (finite checks + total-order temperature keys)
//! - error (shared error types)

pub mod color;
pub mod error;
pub mod numeric;
pub mod types;

// Re-exports: nice ergonomics for downstream crates
pub use color::{FALLBACK_COLOR, Hsl, color_for, hash32, hue_for, resolve_stroke_color};
pub use error::{MeltError, MeltResult};
pub use numeric::*;
pub use types::*;
