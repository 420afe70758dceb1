/// Borrowed RGB8 image view.
///
/// `stride` is measured in pixels between row starts; the underlying byte
/// slice holds 3 bytes per pixel. Padded buffers and subviews are allowed
/// as long as `data` covers `(h - 1) * stride + w` pixels.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.stride + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Unweighted channel mean `(r + g + b) / 3` with integer division.
    #[inline]
    pub fn brightness(&self, x: usize, y: usize) -> u8 {
        let [r, g, b] = self.get(x, y);
        ((r as u32 + g as u32 + b as u32) / 3) as u8
    }

    /// Row `y` as a packed RGB byte slice of length `3 * w`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride * 3;
        &self.data[start..start + self.w * 3]
    }

    pub fn is_square(&self) -> bool {
        self.w == self.h
    }
}
