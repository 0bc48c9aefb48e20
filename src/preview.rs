use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

const MAX_PREVIEW_DIM: u32 = 512;

/// Opaque id for one displayable preview. The backing resource lives behind
/// a `PreviewSource` and must be released through it exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(u64);

/// The displayable-preview capability: turns an image blob into something
/// the UI can draw, and frees it again on request.
pub trait PreviewSource {
    /// Returns `None` when the bytes cannot be turned into a preview; the
    /// caller treats that as a no-op.
    fn create(&mut self, bytes: &[u8]) -> Option<PreviewHandle>;
    fn release(&mut self, handle: PreviewHandle);
}

/// Egui-texture-backed previews. Dropping the `TextureHandle` on release
/// frees the GPU texture.
pub struct TexturePreviews {
    ctx: egui::Context,
    textures: HashMap<PreviewHandle, TextureHandle>,
    next_id: u64,
}

impl TexturePreviews {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            textures: HashMap::new(),
            next_id: 0,
        }
    }

    pub fn texture(&self, handle: PreviewHandle) -> Option<&TextureHandle> {
        self.textures.get(&handle)
    }
}

impl PreviewSource for TexturePreviews {
    fn create(&mut self, bytes: &[u8]) -> Option<PreviewHandle> {
        let color_image = match decode_preview(bytes) {
            Ok(color_image) => color_image,
            Err(err) => {
                log::warn!("Ignoring selected image: {err:#}");
                return None;
            }
        };

        let handle = PreviewHandle(self.next_id);
        self.next_id += 1;
        let texture = self.ctx.load_texture(
            format!("field-preview-{}", handle.0),
            color_image,
            TextureOptions::LINEAR,
        );
        self.textures.insert(handle, texture);
        Some(handle)
    }

    fn release(&mut self, handle: PreviewHandle) {
        if self.textures.remove(&handle).is_none() {
            log::warn!("Released unknown preview handle {handle:?}");
        }
    }
}

fn decode_preview(bytes: &[u8]) -> Result<ColorImage> {
    if bytes.is_empty() {
        bail!("empty image selection");
    }
    let decoded = image::load_from_memory(bytes).context("decode preview image")?;
    let rgba = decoded.into_rgba8();

    // Previews are thumbnails; cap what gets uploaded as a texture.
    let (width, height) = rgba.dimensions();
    let longest_edge = width.max(height).max(1);
    let rgba = if longest_edge > MAX_PREVIEW_DIM {
        let scale = MAX_PREVIEW_DIM as f32 / longest_edge as f32;
        let target_width = ((width as f32 * scale).round() as u32).max(1);
        let target_height = ((height as f32 * scale).round() as u32).max(1);
        image::imageops::thumbnail(&rgba, target_width, target_height)
    } else {
        rgba
    };
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

#[cfg(test)]
pub(crate) struct FakePreviews {
    next_id: u64,
    pub live: std::collections::HashSet<PreviewHandle>,
    pub created: usize,
    pub released: usize,
    pub double_released: bool,
}

#[cfg(test)]
impl FakePreviews {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            live: std::collections::HashSet::new(),
            created: 0,
            released: 0,
            double_released: false,
        }
    }
}

#[cfg(test)]
impl PreviewSource for FakePreviews {
    fn create(&mut self, bytes: &[u8]) -> Option<PreviewHandle> {
        if bytes.is_empty() {
            return None;
        }
        let handle = PreviewHandle(self.next_id);
        self.next_id += 1;
        self.live.insert(handle);
        self.created += 1;
        Some(handle)
    }

    fn release(&mut self, handle: PreviewHandle) {
        if !self.live.remove(&handle) {
            self.double_released = true;
        }
        self.released += 1;
    }
}
