//! I/O helpers bridging the core to the `image` codec crate.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into an owned RGB8 buffer.
//! - `RgbImageBuf::center_crop_square`: square crop for non-square photos.
//! - `save_mask_png`: write a binarized mask as a black/white PNG.
//! - `write_json_file`: pretty-print a serializable report to disk.
//!
//! The core itself never touches the filesystem; everything here exists for
//! the demo binaries and external callers.
use super::ImageRgb8;
use crate::mask::Mask;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGB8 buffer with borrowed view conversion. Rows are tightly packed.
#[derive(Clone, Debug)]
pub struct RgbImageBuf {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbImageBuf {
    /// Construct an owned buffer from raw packed RGB bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * 3);
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }

    /// Crop to the largest centered square. Returns a clone when the buffer
    /// is already square.
    pub fn center_crop_square(&self) -> RgbImageBuf {
        if self.width == self.height {
            return self.clone();
        }
        let side = self.width.min(self.height);
        let x0 = (self.width - side) / 2;
        let y0 = (self.height - side) / 2;
        let mut data = Vec::with_capacity(side * side * 3);
        for y in y0..y0 + side {
            let start = (y * self.width + x0) * 3;
            data.extend_from_slice(&self.data[start..start + side * 3]);
        }
        RgbImageBuf::new(side, side, data)
    }
}

/// Load an image from disk and convert to packed RGB8.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(RgbImageBuf::new(width, height, data))
}

/// Save a mask to a grayscale PNG: white background, black foreground.
pub fn save_mask_png(mask: &Mask, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let gray = mask.to_gray();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(mask.w as u32, mask.h as u32, gray)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::RgbImageBuf;

    #[test]
    fn center_crop_takes_middle_columns() {
        // 4x2 image, pixel value = x index in the red channel
        let mut data = Vec::new();
        for _y in 0..2 {
            for x in 0..4u8 {
                data.extend_from_slice(&[x, 0, 0]);
            }
        }
        let buf = RgbImageBuf::new(4, 2, data);
        let sq = buf.center_crop_square();
        assert_eq!((sq.width(), sq.height()), (2, 2));
        let view = sq.as_view();
        assert_eq!(view.get(0, 0)[0], 1);
        assert_eq!(view.get(1, 1)[0], 2);
    }
}
