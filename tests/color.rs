mod tests {
    use fourzone_light_engine::color::{
        add_colors, blend_colors, format_rgb, hsv_to_rgb, parse_rgb, scale_by_brightness,
    };
    use fourzone_light_engine::{Rgb, ValidationError};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv_to_rgb(0, 100, 100), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120, 100, 100), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240, 100, 100), Rgb { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hsv_zone_offsets() {
        // The four hues a zone-offset rainbow lands on at phase zero
        assert_eq!(hsv_to_rgb(90, 100, 100), Rgb { r: 127, g: 255, b: 0 });
        assert_eq!(
            hsv_to_rgb(180, 100, 100),
            Rgb {
                r: 0,
                g: 255,
                b: 255
            }
        );
        assert_eq!(
            hsv_to_rgb(270, 100, 100),
            Rgb {
                r: 127,
                g: 0,
                b: 255
            }
        );
    }

    #[test]
    fn test_hsv_truncates_channels() {
        // 50 * 255 / 100 is 127.5; the pipeline truncates, never rounds
        assert_eq!(hsv_to_rgb(30, 100, 100), Rgb { r: 255, g: 127, b: 0 });
    }

    #[test]
    fn test_hsv_desaturated_and_dark() {
        assert_eq!(
            hsv_to_rgb(200, 0, 100),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(hsv_to_rgb(200, 100, 0), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_scale_by_brightness() {
        let color = Rgb {
            r: 200,
            g: 100,
            b: 50,
        };
        assert_eq!(
            scale_by_brightness(color, 50),
            Rgb {
                r: 100,
                g: 50,
                b: 25
            }
        );
        assert_eq!(scale_by_brightness(color, 100), color);
        assert_eq!(scale_by_brightness(color, 0), Rgb { r: 0, g: 0, b: 0 });
        // 255 * 50 / 100 truncates to 127
        assert_eq!(scale_by_brightness(RED, 50).r, 127);
    }

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
    }

    #[test]
    fn test_add_colors_saturates() {
        let warm = Rgb {
            r: 200,
            g: 150,
            b: 30,
        };
        let glow = Rgb {
            r: 100,
            g: 50,
            b: 10,
        };
        assert_eq!(
            add_colors(warm, glow),
            Rgb {
                r: 255,
                g: 200,
                b: 40
            }
        );
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(
            parse_rgb("FF8800"),
            Ok(Rgb {
                r: 255,
                g: 136,
                b: 0
            })
        );
        assert_eq!(parse_rgb("ff0000"), Ok(RED));
        // Attribute writes arrive with a trailing newline
        assert_eq!(parse_rgb("0000FF\n"), Ok(BLUE));
        // Short values parse like any hex number
        assert_eq!(parse_rgb("F"), Ok(Rgb { r: 0, g: 0, b: 15 }));
    }

    #[test]
    fn test_parse_rgb_rejects() {
        assert_eq!(parse_rgb("GG0000"), Err(ValidationError::InvalidColor));
        assert_eq!(parse_rgb(""), Err(ValidationError::InvalidColor));
        assert_eq!(parse_rgb("1234567"), Err(ValidationError::InvalidColor));
        assert_eq!(parse_rgb("#FF0000"), Err(ValidationError::InvalidColor));
    }

    #[test]
    fn test_format_rgb() {
        let color = Rgb {
            r: 0xC8,
            g: 0x64,
            b: 0x32,
        };
        assert_eq!(format_rgb(color).as_str(), "#c86432");
        assert_eq!(format_rgb(Rgb::default()).as_str(), "#000000");
    }
}
