//! Rendering - wgpu setup and pet sprite drawing

mod renderer;
pub mod sprite;

pub use renderer::Renderer;
pub use sprite::{PetTextures, SpriteImage};
