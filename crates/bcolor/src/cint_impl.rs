use super::*;
use cint::{Alpha, ColorInterop, EncodedSrgb};

// ---- PackedRgba ----

// The alpha byte is the raw stored byte, including the encoding bias.

impl From<Alpha<EncodedSrgb<u8>>> for PackedRgba {
    fn from(srgba: Alpha<EncodedSrgb<u8>>) -> Self {
        let Alpha {
            color: EncodedSrgb { r, g, b },
            alpha: a,
        } = srgba;

        Self::from_channels(r, g, b, a)
    }
}

impl From<PackedRgba> for Alpha<EncodedSrgb<u8>> {
    fn from(packed: PackedRgba) -> Self {
        let [r, g, b, a] = packed.to_array();

        Self {
            color: EncodedSrgb { r, g, b },
            alpha: a,
        }
    }
}

impl From<EncodedSrgb<u8>> for PackedRgba {
    fn from(srgb: EncodedSrgb<u8>) -> Self {
        let EncodedSrgb { r, g, b } = srgb;

        Self::from_rgb(r, g, b)
    }
}

impl ColorInterop for PackedRgba {
    type CintTy = Alpha<EncodedSrgb<u8>>;
}

// ---- Rgba ----

impl From<Rgba> for EncodedSrgb<u8> {
    fn from(rgba: Rgba) -> Self {
        let [r, g, b] = rgba.rgb();

        Self { r, g, b }
    }
}

impl From<EncodedSrgb<u8>> for Rgba {
    fn from(srgb: EncodedSrgb<u8>) -> Self {
        let EncodedSrgb { r, g, b } = srgb;

        Self::from_rgb(r, g, b)
    }
}

#[test]
fn test_cint_round_trip() {
    let packed = PackedRgba(0x1234_5678);
    let cint: Alpha<EncodedSrgb<u8>> = packed.into();
    assert_eq!((cint.color.r, cint.alpha), (0x12, 0x78));
    assert_eq!(PackedRgba::from(cint), packed);

    let opaque = PackedRgba::from(EncodedSrgb { r: 1, g: 2, b: 3 });
    assert_eq!(opaque, PackedRgba::from_rgb(1, 2, 3));
    assert_eq!(Rgba::from(EncodedSrgb::from(decode_rgba(opaque))), Rgba::from_rgb(1, 2, 3));
}
