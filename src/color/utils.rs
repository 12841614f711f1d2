use core::fmt::Write;

use heapless::String;

use crate::color::Rgb;
use crate::error::ValidationError;
use crate::math::blend8;

/// Convert an HSV color to RGB.
///
/// Hue is 0-360, saturation and value are 0-100. The classic six-sector
/// decomposition, carried out entirely in integer math: every division
/// truncates, so `hsv_to_rgb(0, 100, 100)` is exactly `(255, 0, 0)` but
/// mid-sector channels land one below their rounded value. Inputs outside
/// the declared ranges are not checked; callers pre-clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: u16, saturation: u8, value: u8) -> Rgb {
    let h = i32::from(hue);
    let s = i32::from(saturation);
    let v = i32::from(value);

    let chroma = (v * s) / 100;
    let x = chroma * (60 - ((h % 120) - 60).abs()) / 60;
    let m = v - chroma;

    let (r, g, b) = match h {
        0..=59 => (chroma, x, 0),
        60..=119 => (x, chroma, 0),
        120..=179 => (0, chroma, x),
        180..=239 => (0, x, chroma),
        240..=299 => (x, 0, chroma),
        _ => (chroma, 0, x),
    };

    Rgb {
        r: ((r + m) * 255 / 100) as u8,
        g: ((g + m) * 255 / 100) as u8,
        b: ((b + m) * 255 / 100) as u8,
    }
}

/// Scale each channel by `percent / 100` with integer truncation.
///
/// `percent` must already be within 0-100; this function never clamps.
pub const fn scale_by_brightness(color: Rgb, percent: u8) -> Rgb {
    Rgb {
        r: ((color.r as u16 * percent as u16) / 100) as u8,
        g: ((color.g as u16 * percent as u16) / 100) as u8,
        b: ((color.b as u16 * percent as u16) / 100) as u8,
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgb, b: Rgb, amount_of_b: u8) -> Rgb {
    Rgb {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
    }
}

/// Add two RGB colors channel-wise, saturating at 255.
#[inline]
pub const fn add_colors(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a hex RGB color string (e.g. `"FF8800"`).
///
/// Accepts one to six hex digits with surrounding ASCII whitespace; anything
/// non-hex or above `0xFFFFFF` is rejected.
pub fn parse_rgb(input: &str) -> Result<Rgb, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.len() > 6 {
        return Err(ValidationError::InvalidColor);
    }
    let packed = u32::from_str_radix(trimmed, 16).map_err(|_| ValidationError::InvalidColor)?;
    Ok(rgb_from_u32(packed))
}

/// Format a color as `#rrggbb`.
pub fn format_rgb(color: Rgb) -> String<8> {
    let mut out = String::new();
    // 8 bytes always fit "#rrggbb"
    let _ = write!(out, "#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    out
}
