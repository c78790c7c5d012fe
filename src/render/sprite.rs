//! Pet sprite textures - one image per growth stage

use anyhow::{Context, Result};

use crate::pet::Level;

/// Square placeholder edge length when an asset is missing.
const PLACEHOLDER_SIZE: u32 = 64;

/// A decoded RGBA8 sprite image.
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
}

impl SpriteImage {
    /// Decode a PNG file from disk.
    pub fn load(path: &str) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read sprite {}", path))?;
        Self::from_png_bytes(&bytes)
    }

    /// Decode PNG bytes into RGBA8.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .context("Failed to decode PNG image")?
            .to_rgba8();

        Ok(SpriteImage {
            width: img.width(),
            height: img.height(),
            data: img.into_raw(),
        })
    }

    /// Tinted checkerboard standing in for a missing asset, so the pet stays
    /// visible and the simulation keeps running.
    pub fn placeholder(tint: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity((PLACEHOLDER_SIZE * PLACEHOLDER_SIZE * 4) as usize);
        for y in 0..PLACEHOLDER_SIZE {
            for x in 0..PLACEHOLDER_SIZE {
                let dark = ((x / 8) + (y / 8)) % 2 == 0;
                let shade = if dark { 0.7 } else { 1.0 };
                data.push((f32::from(tint[0]) * shade) as u8);
                data.push((f32::from(tint[1]) * shade) as u8);
                data.push((f32::from(tint[2]) * shade) as u8);
                data.push(255);
            }
        }
        SpriteImage {
            width: PLACEHOLDER_SIZE,
            height: PLACEHOLDER_SIZE,
            data,
        }
    }
}

/// Sprite images for every growth stage. A stage whose asset fails to load
/// gets a placeholder; the failure is logged and never aborts the game.
pub struct PetTextures {
    images: [SpriteImage; 4],
}

impl PetTextures {
    /// Load all stage sprites from `assets/`.
    pub fn load() -> Self {
        Self {
            images: [
                load_or_placeholder("assets/egg.png", [236, 229, 205]),
                load_or_placeholder("assets/puppy.png", [214, 178, 120]),
                load_or_placeholder("assets/child.png", [178, 190, 126]),
                load_or_placeholder("assets/adult.png", [150, 160, 190]),
            ],
        }
    }

    /// Image for a growth stage.
    pub fn get(&self, level: Level) -> &SpriteImage {
        &self.images[level.index()]
    }

    /// All images in [`Level::index`] order.
    pub fn iter(&self) -> impl Iterator<Item = &SpriteImage> {
        self.images.iter()
    }
}

fn load_or_placeholder(path: &str, tint: [u8; 3]) -> SpriteImage {
    match SpriteImage::load(path) {
        Ok(image) => {
            log::debug!("Loaded sprite {} ({}x{})", path, image.width, image.height);
            image
        }
        Err(e) => {
            log::warn!("{:#}; using placeholder sprite", e);
            SpriteImage::placeholder(tint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let image = SpriteImage::placeholder([200, 100, 50]);
        assert_eq!(image.width, PLACEHOLDER_SIZE);
        assert_eq!(image.height, PLACEHOLDER_SIZE);
        assert_eq!(
            image.data.len(),
            (PLACEHOLDER_SIZE * PLACEHOLDER_SIZE * 4) as usize
        );
    }

    #[test]
    fn test_placeholder_is_opaque() {
        let image = SpriteImage::placeholder([255, 255, 255]);
        assert!(image.data.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_bad_bytes_are_an_error() {
        assert!(SpriteImage::from_png_bytes(b"not a png").is_err());
    }

    #[test]
    fn test_textures_cover_every_level() {
        let textures = PetTextures::load();
        for level in [Level::Egg, Level::Puppy, Level::Child, Level::Adult] {
            let image = textures.get(level);
            assert!(image.width > 0 && image.height > 0);
        }
    }
}
