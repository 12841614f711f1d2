mod tests {
    use fourzone_light_engine::{PatternId, Rgb, ZONE_COUNT};

    const ORIGINALS: [Rgb; ZONE_COUNT] = [
        Rgb {
            r: 200,
            g: 100,
            b: 50,
        },
        Rgb {
            r: 120,
            g: 60,
            b: 30,
        },
        Rgb { r: 80, g: 40, b: 20 },
        Rgb { r: 40, g: 20, b: 10 },
    ];

    #[test]
    fn test_mode_names_round_trip() {
        for raw in 0..10 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(PatternId::from_raw(10), None);
        assert_eq!(PatternId::parse_from_str("strobe"), None);
    }

    #[test]
    fn test_rainbow_phase_zero_hues() {
        // 90 degree hue offset per zone
        let frame = PatternId::Rainbow.render_frame(0, 1, &ORIGINALS);
        assert_eq!(frame[0], Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(frame[1], Rgb { r: 127, g: 255, b: 0 });
        assert_eq!(
            frame[2],
            Rgb {
                r: 0,
                g: 255,
                b: 255
            }
        );
        assert_eq!(
            frame[3],
            Rgb {
                r: 127,
                g: 0,
                b: 255
            }
        );
    }

    #[test]
    fn test_rainbow_speed_divides_cycle() {
        // At speed 3 the cycle is 1000 ms, so 500 ms is half a revolution
        let frame = PatternId::Rainbow.render_frame(500, 3, &ORIGINALS);
        assert_eq!(
            frame[0],
            Rgb {
                r: 0,
                g: 255,
                b: 255
            }
        );
    }

    #[test]
    fn test_breathing_midpoint_and_peak() {
        // Phase zero sits at the midpoint of the envelope (intensity 50)
        let frame = PatternId::Breathing.render_frame(0, 1, &ORIGINALS);
        assert_eq!(
            frame[0],
            Rgb {
                r: 100,
                g: 50,
                b: 25
            }
        );
        assert_eq!(frame[1], Rgb { r: 60, g: 30, b: 15 });

        // Quarter cycle is the sine peak: full original color
        let frame = PatternId::Breathing.render_frame(500, 1, &ORIGINALS);
        assert_eq!(frame[0], ORIGINALS[0]);
        assert_eq!(frame[3], ORIGINALS[3]);
    }

    #[test]
    fn test_breathing_uniform_across_zones() {
        // 45 degrees into the cycle the envelope is at 85%, everywhere
        let frame = PatternId::Breathing.render_frame(250, 1, &ORIGINALS);
        assert_eq!(
            frame[0],
            Rgb {
                r: 170,
                g: 85,
                b: 42
            }
        );
        assert_eq!(
            frame[1],
            Rgb {
                r: 102,
                g: 51,
                b: 25
            }
        );
    }

    #[test]
    fn test_wave_rolls_across_zones() {
        let frame = PatternId::Wave.render_frame(0, 1, &ORIGINALS);
        // Zone intensities at the four quantized steps: 65, 100, 65, 30
        assert_eq!(
            frame[0],
            Rgb {
                r: 130,
                g: 65,
                b: 32
            }
        );
        assert_eq!(frame[1], ORIGINALS[1]);
        assert_eq!(frame[2], Rgb { r: 52, g: 26, b: 13 });
        assert_eq!(frame[3], Rgb { r: 12, g: 6, b: 3 });
    }

    #[test]
    fn test_pulse_uniform() {
        // Phase zero of the envelope is 65%, applied to every zone alike
        let frame = PatternId::Pulse.render_frame(0, 1, &ORIGINALS);
        assert_eq!(
            frame[0],
            Rgb {
                r: 130,
                g: 65,
                b: 32
            }
        );
        assert_eq!(frame[3], Rgb { r: 26, g: 13, b: 6 });
    }

    #[test]
    fn test_chase_active_zone() {
        // 300 ms into a 1200 ms cycle puts the chase on zone 1
        let frame = PatternId::Chase.render_frame(300, 1, &ORIGINALS);
        let base = ORIGINALS[0];
        assert_eq!(frame[1], base);
        for zone in [0, 2, 3] {
            assert_eq!(frame[zone].r, base.r / 6);
            assert_eq!(frame[zone].g, base.g / 6);
            assert_eq!(frame[zone].b, base.b / 6);
        }
    }

    #[test]
    fn test_chase_wraps() {
        let early = PatternId::Chase.render_frame(0, 1, &ORIGINALS);
        let wrapped = PatternId::Chase.render_frame(1200, 1, &ORIGINALS);
        assert_eq!(early, wrapped);
        assert_eq!(early[0], ORIGINALS[0]);
    }

    #[test]
    fn test_sparkle_flash_window() {
        // Zone 0 flashes during the first eighth of the cycle; the offset
        // pushes every other zone into its rest color
        let frame = PatternId::Sparkle.render_frame(0, 1, &ORIGINALS);
        assert_eq!(
            frame[0],
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        let base = ORIGINALS[0];
        for zone in 1..ZONE_COUNT {
            assert_eq!(frame[zone].r, base.r / 8);
        }

        // Past the window the flash is gone
        let frame = PatternId::Sparkle.render_frame(400, 1, &ORIGINALS);
        assert_eq!(frame[0].r, base.r / 8);
    }

    #[test]
    fn test_candle_flicker_ramp() {
        let frame = PatternId::Candle.render_frame(0, 1, &ORIGINALS);
        // Flicker floor: warm palette at 60%
        assert_eq!(
            frame[0],
            Rgb {
                r: 153,
                g: 90,
                b: 30
            }
        );

        let frame = PatternId::Candle.render_frame(50, 1, &ORIGINALS);
        // Halfway up the ramp: 80%
        assert_eq!(
            frame[0],
            Rgb {
                r: 204,
                g: 120,
                b: 40
            }
        );
    }

    #[test]
    fn test_aurora_palette_and_phase() {
        let frame = PatternId::Aurora.render_frame(0, 1, &ORIGINALS);
        // Zone 0 at phase zero: fixed green/blue palette at 65%
        assert_eq!(
            frame[0],
            Rgb {
                r: 13,
                g: 130,
                b: 117
            }
        );
        // Zone 1 is offset a quarter cycle, onto the sine peak
        assert_eq!(
            frame[1],
            Rgb {
                r: 20,
                g: 200,
                b: 180
            }
        );
    }

    #[test]
    fn test_disco_strobe_halves() {
        let on = PatternId::Disco.render_frame(0, 1, &ORIGINALS);
        assert_eq!(on[0], Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(on[1], Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(on[2], Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(
            on[3],
            Rgb {
                r: 255,
                g: 0,
                b: 255
            }
        );

        let off = PatternId::Disco.render_frame(150, 1, &ORIGINALS);
        assert_eq!(off, [Rgb::default(); ZONE_COUNT]);
    }

    #[test]
    fn test_static_is_identity() {
        let frame = PatternId::Static.render_frame(12345, 7, &ORIGINALS);
        assert_eq!(frame, ORIGINALS);
    }

    #[test]
    fn test_patterns_are_deterministic() {
        for raw in 0..10 {
            let id = PatternId::from_raw(raw).unwrap();
            for elapsed in [0, 37, 512, 1999, 60_000] {
                let a = id.render_frame(elapsed, 4, &ORIGINALS);
                let b = id.render_frame(elapsed, 4, &ORIGINALS);
                assert_eq!(a, b, "{} at {}ms", id.as_str(), elapsed);
            }
        }
    }
}
