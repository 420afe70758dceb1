/// Generates a white canvas with a filled black disk.
pub fn disk_rgb(side: usize, cx: f32, cy: f32, radius: f32) -> Vec<u8> {
    assert!(side > 0, "image side must be positive");

    let mut img = vec![255u8; side * side * 3];
    for y in 0..side {
        for x in 0..side {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx * dx + dy * dy <= radius * radius {
                let i = (y * side + x) * 3;
                img[i] = 0;
                img[i + 1] = 0;
                img[i + 2] = 0;
            }
        }
    }
    img
}

/// Generates a white canvas with a filled black axis-aligned ellipse.
pub fn ellipse_rgb(side: usize, cx: f32, cy: f32, rx: f32, ry: f32) -> Vec<u8> {
    assert!(side > 0, "image side must be positive");
    assert!(rx > 0.0 && ry > 0.0, "radii must be positive");

    let mut img = vec![255u8; side * side * 3];
    for y in 0..side {
        for x in 0..side {
            let dx = (x as f32 - cx) / rx;
            let dy = (y as f32 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                let i = (y * side + x) * 3;
                img[i] = 0;
                img[i + 1] = 0;
                img[i + 2] = 0;
            }
        }
    }
    img
}

/// Generates an all-white canvas with no drawing at all.
pub fn blank_rgb(side: usize) -> Vec<u8> {
    vec![255u8; side * side * 3]
}
