//! Fixed-name PNG assets, decoded with `image` and uploaded as egui textures on first use

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::AssetError;

pub const BACKGROUND: &str = "fondo.png";
pub const LEAF: &str = "Hojaoto.png";
pub const ADD_BUTTON: &str = "Botonotoniosi.png";
pub const DELETE_BUTTON: &str = "Botonotonio.png";
pub const CHECKBOX_ON: &str = "Botonotoniocheck.png";
pub const CHECKBOX_OFF: &str = "Botonotoniovacio.png";
pub const AUDIO_ON: &str = "Botonaudio.png";
pub const AUDIO_OFF: &str = "Botonaudiono.png";

/// Texture cache keyed by asset name. Misses are cached too, so each
/// missing file is tried (and logged) once.
pub struct AssetStore {
    dir: PathBuf,
    textures: HashMap<&'static str, Option<egui::TextureHandle>>,
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            textures: HashMap::new(),
        }
    }

    pub fn texture(&mut self, ctx: &egui::Context, name: &'static str) -> Option<egui::TextureHandle> {
        self.textures
            .entry(name)
            .or_insert_with(|| match load_color_image(&self.dir, name) {
                Ok(image) => Some(ctx.load_texture(name, image, egui::TextureOptions::LINEAR)),
                Err(err) => {
                    log::warn!("{err}");
                    None
                }
            })
            .clone()
    }
}

pub fn load_color_image(dir: &Path, name: &str) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(dir.join(name)).map_err(|source| AssetError::Io {
        name: name.to_owned(),
        source,
    })?;
    decode_png(name, &bytes)
}

pub fn decode_png(name: &str, bytes: &[u8]) -> Result<egui::ColorImage, AssetError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|source| AssetError::Decode {
            name: name.to_owned(),
            source,
        })?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Window icon from the leaf sprite, if it can be read.
pub fn load_icon(dir: &Path) -> Option<egui::IconData> {
    let bytes = std::fs::read(dir.join(LEAF)).ok()?;
    let rgba = image::load_from_memory(&bytes).ok()?.to_rgba8();
    Some(egui::IconData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}
