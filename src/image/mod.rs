pub mod io;
pub mod rgb;

pub use self::io::{load_rgb_image, save_mask_png, write_json_file, RgbImageBuf};
pub use self::rgb::ImageRgb8;
