mod utils;

use smart_leds::RGB8;
pub use utils::{
    add_colors, blend_colors, format_rgb, hsv_to_rgb, parse_rgb, rgb_from_u32, scale_by_brightness,
};

pub type Rgb = RGB8;
