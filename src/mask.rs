//! Binary foreground mask and the brightness-threshold binarizer.
//!
//! - Brightness is the unweighted integer mean `(r + g + b) / 3`.
//! - A pixel is background when `brightness > threshold`, foreground
//!   otherwise; lowering the threshold never adds foreground pixels.
//! - Binarization is a pure function: each call produces a fresh `Mask`,
//!   so a threshold change simply rebuilds the mask from the same image.
//!
//! Complexity: O(W·H), row-parallel.
use crate::image::ImageRgb8;
use rayon::prelude::*;

/// Boolean foreground grid with the dimensions of its source image.
#[derive(Clone, Debug)]
pub struct Mask {
    pub w: usize,
    pub h: usize,
    data: Vec<bool>,
}

impl Mask {
    /// Threshold `img` into a foreground mask.
    pub fn binarize(img: &ImageRgb8<'_>, threshold: u8) -> Mask {
        let (w, h) = (img.w, img.h);
        if w == 0 || h == 0 {
            return Mask {
                w,
                h,
                data: Vec::new(),
            };
        }
        let mut data = vec![false; w * h];
        data.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = img.brightness(x, y) <= threshold;
            }
        });
        Mask { w, h, data }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x]
    }

    /// Number of foreground pixels.
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&fg| fg).count()
    }

    /// Displayable grayscale buffer: white background, black foreground.
    pub fn to_gray(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&fg| if fg { 0u8 } else { 255u8 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Mask;
    use crate::image::ImageRgb8;

    fn uniform(w: usize, h: usize, rgb: [u8; 3]) -> Vec<u8> {
        let mut data = Vec::with_capacity(w * h * 3);
        for _ in 0..w * h {
            data.extend_from_slice(&rgb);
        }
        data
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        // brightness (100+101+102)/3 = 101
        let data = uniform(2, 2, [100, 101, 102]);
        let img = ImageRgb8 {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        assert_eq!(Mask::binarize(&img, 101).foreground_count(), 4);
        assert_eq!(Mask::binarize(&img, 100).foreground_count(), 0);
    }

    #[test]
    fn foreground_count_is_monotone_in_threshold() {
        // gradient image: brightness varies per pixel
        let w = 16usize;
        let mut data = Vec::new();
        for y in 0..w {
            for x in 0..w {
                let v = (x * 16 + y) as u8;
                data.extend_from_slice(&[v, v, v]);
            }
        }
        let img = ImageRgb8 {
            w,
            h: w,
            stride: w,
            data: &data,
        };
        let mut prev = 0usize;
        for t in [0u8, 32, 64, 128, 200, 255] {
            let count = Mask::binarize(&img, t).foreground_count();
            assert!(
                count >= prev,
                "threshold {t}: count {count} dropped below {prev}"
            );
            prev = count;
        }
        assert_eq!(prev, w * w);
    }

    #[test]
    fn rebinarize_produces_fresh_mask() {
        let data = uniform(3, 3, [0, 0, 0]);
        let img = ImageRgb8 {
            w: 3,
            h: 3,
            stride: 3,
            data: &data,
        };
        let first = Mask::binarize(&img, 128);
        let second = Mask::binarize(&img, 128);
        assert_eq!(first.foreground_count(), second.foreground_count());
        assert_eq!(first.to_gray(), vec![0u8; 9]);
    }
}
