// rust/engine/src/render/mod.rs
#![forbid(unsafe_code)]

mod animator;
mod ascii;
mod pacing;
mod recording;
mod surface;

/**
 * Curated render public API.
 *
 * The simulation never touches a surface; `Animator` replays its events onto one.
 */
pub use animator::Animator;
pub use ascii::AsciiSurface;
pub use pacing::Pacing;
pub use recording::{RecordingSurface, SurfaceOp};
pub use surface::{BlockState, Surface, SurfaceError};
