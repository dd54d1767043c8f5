//! Core deterministic primitives.
//!
//! All types in this module are integer-only and produce identical results on
//! every platform. They carry no game rules of their own.

pub mod rect;
pub mod rng;
pub mod vec2;

// Re-export core types
pub use rect::Rect;
pub use rng::DeterministicRng;
pub use vec2::Vec2;
