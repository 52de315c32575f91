use bcolor::{
    ColorError, DigitalColor, HexColor, PackedRgba, Percentage, WholePercent, decode_cmyk,
    decode_hsla, decode_rgba, encode_cmyk, encode_hsl, encode_hsla, encode_rgba,
};

const CHANNEL_SAMPLES: [i32; 7] = [0, 1, 37, 127, 128, 254, 255];

#[test]
fn rgba_round_trip_keeps_channels_and_alpha_within_one_hundredth() {
    for r in CHANNEL_SAMPLES {
        for g in CHANNEL_SAMPLES {
            for b in CHANNEL_SAMPLES {
                for hundredths in 0..=100 {
                    let a = f64::from(hundredths) / 100.0;
                    let packed = encode_rgba(r, g, b, a).unwrap();
                    let rgba = decode_rgba(packed);

                    assert_eq!(
                        [i32::from(rgba.r), i32::from(rgba.g), i32::from(rgba.b)],
                        [r, g, b]
                    );
                    assert!(
                        rgba.a <= a + 1e-9 && a - rgba.a <= 0.01 + 1e-9,
                        "alpha {a} came back as {}",
                        rgba.a
                    );
                }
            }
        }
    }
}

#[test]
fn opaque_red_is_pinned() {
    let packed = encode_rgba(255, 0, 0, 1.0).unwrap();
    assert_eq!(packed, PackedRgba(0xff00_00ff));
    assert_eq!(decode_rgba(packed).a, 1.0);
    assert_eq!(packed.to_hex_string(), "#ff0000ff");
}

#[test]
fn hex_round_trip_preserves_the_value() {
    for value in (0..=u32::MAX).step_by(16_777_259) {
        let packed = PackedRgba(value);
        let hex = packed.to_hex_string();
        assert_eq!(hex.len(), 9);
        assert_eq!(PackedRgba::from_hex_string(&hex), Ok(packed));

        let opaque = packed.with_alpha_byte(0xff);
        let six = &opaque.to_hex_string()[..7];
        assert_eq!(PackedRgba::from_hex_string(six), Ok(opaque));
    }
}

#[test]
fn short_hex_expands() {
    let mut short = DigitalColor::default();
    short.set_hex("#abc").unwrap();
    let mut long = DigitalColor::default();
    long.set_hex("#aabbccff").unwrap();

    assert_eq!(short.value(), long.value());
    assert_eq!(short.hex(), "#aabbccff");
    assert_eq!("#abc".parse::<HexColor>().unwrap().to_string(), "#abc");
}

#[test]
fn grays_have_no_saturation_whatever_the_hue() {
    for hue in [0.0, 45.0, 120.0, 240.0, 359.0, 720.0, -30.0] {
        let packed = encode_hsla(hue, Percentage::percent(0.0), "40%", 1.0).unwrap();
        let hsla = decode_hsla(packed);
        assert_eq!(hsla.s, WholePercent::ZERO);
        assert_eq!(hsla.h, 0);
        assert_eq!(hsla.s.to_string(), "0%");
        assert_eq!(packed, PackedRgba::from_gray(102));
    }
}

#[test]
fn red_decodes_to_hsla() {
    let hsla = decode_hsla(PackedRgba::RED);
    assert_eq!(hsla.h, 0);
    assert_eq!(hsla.s.to_string(), "100%");
    assert_eq!(hsla.l.to_string(), "50%");
    assert_eq!(hsla.a, 1.0);
    assert_eq!(hsla.to_string(), "(0, 100%, 50%, 1)");
}

#[test]
fn percentage_forms_agree() {
    for hue in [0.0, 90.0, 200.0, 330.0] {
        let text = encode_hsl(hue, "50%", "50%").unwrap();
        assert_eq!(encode_hsl(hue, Percentage::number(0.5), "50%"), Ok(text));
        assert_eq!(encode_hsl(hue, Percentage::fraction(0.5), "50%"), Ok(text));
        assert_eq!(encode_hsl(hue, Percentage::number(50.0), "50%"), Ok(text));
        assert_eq!(encode_hsl(hue, " 50 ", "50%"), Ok(text));
    }
}

#[test]
fn cmyk_extremes() {
    assert_eq!(decode_cmyk(PackedRgba::WHITE).to_string(), "(0%, 0%, 0%, 0%)");

    let black = decode_cmyk(PackedRgba::BLACK);
    assert_eq!(black.to_string(), "(0%, 0%, 0%, 100%)");
    assert_eq!(black.to_packed(), PackedRgba::BLACK);

    assert_eq!(
        encode_cmyk("0%", "0%", "0%", "100%"),
        Ok(PackedRgba::BLACK)
    );
    assert_eq!(
        encode_cmyk("0%", "0%", "0%", "150%"),
        Err(ColorError::PercentageOutOfRange(150.0))
    );
}

#[test]
fn views_agree_on_one_color() {
    let mut color = DigitalColor::named("Phthalo Blue", PackedRgba::from_rgb(0, 15, 137));
    let before = color.value();

    // Failed setters leave the color alone:
    assert!(color.set_rgba(0, 0, 256, 1.0).is_err());
    assert!(color.set_hsl(f64::NAN, "50%", "50%").is_err());
    assert!(color.set_cmyk("x", "0", "0", "0").is_err());
    assert!(color.set_hex("#12345").is_err());
    assert_eq!(color.value(), before);

    assert_eq!(color.rgb(), [0, 15, 137]);
    assert_eq!(color.hex(), "#000f89ff");
    assert_eq!(color.to_string(), "Phthalo Blue (0, 15, 137, 1)");

    let hsl = color.hsl();
    let back = encode_hsl(f64::from(hsl.h), hsl.s, hsl.l).unwrap();
    for (a, b) in back.to_array().into_iter().zip(before.to_array()) {
        assert!(a.abs_diff(b) <= 2, "{back:?} vs {before:?}");
    }
}

#[test]
fn compile_time_hex_matches_runtime_parsing() {
    assert_eq!(
        bcolor::packed_rgba!("#e30022"),
        PackedRgba::from_hex_string("e30022").unwrap()
    );
    assert_eq!(
        bcolor::packed_rgba!("#e3002280"),
        PackedRgba::from_channels(0xe3, 0x00, 0x22, 0x80)
    );
}

#[test]
fn packed_colors_cast_to_words() {
    let colors = [PackedRgba::RED, PackedRgba::GREEN, PackedRgba::BLUE];
    let words: &[u32] = bytemuck::cast_slice(&colors);
    assert_eq!(words, &[0xff00_00ff, 0x00ff_00ff, 0x0000_ffff]);
}

#[test]
fn cint_interop() {
    let srgb: cint::Alpha<cint::EncodedSrgb<u8>> = PackedRgba::from_channels(1, 2, 3, 4).into();
    assert_eq!(srgb.color.r, 1);
    assert_eq!(srgb.alpha, 4);
    assert_eq!(PackedRgba::from(srgb), PackedRgba::from_channels(1, 2, 3, 4));
}
