/// A [`crate::PackedRgba`] constant from a `"#rrggbb"` or `"#rrggbbaa"` literal, checked at compile time.
///
/// Requires the "color-hex" feature.
///
/// The `#` is optional. Six digits give an opaque color (alpha byte `0xff`), eight digits
/// store the last two as the raw alpha byte, with no fraction bias applied.
/// The short `#rgb` / `#rgba` forms and the `0x` prefix are not accepted here:
/// they are runtime-only, see [`crate::PackedRgba::from_hex_string`].
///
/// ```
/// # use bcolor::{packed_rgba, PackedRgba};
/// const CADMIUM_RED: PackedRgba = packed_rgba!("#e30022");
/// assert_eq!(CADMIUM_RED, PackedRgba(0xe300_22ff));
/// assert_eq!(CADMIUM_RED.to_hex_string(), "#e30022ff");
///
/// // The alpha byte is stored as written; 0x7f reads back as alpha 0.5:
/// let glaze = packed_rgba!("e300227f");
/// assert_eq!(bcolor::decode_rgba(glaze).a, 0.5);
/// ```
///
/// Short forms do not compile:
///
/// ```compile_fail
/// let _ = bcolor::packed_rgba!("#e02");
/// ```
///
/// ```compile_fail
/// let _ = bcolor::packed_rgba!("#e3002g");
/// ```
#[macro_export]
macro_rules! packed_rgba {
    ($s:literal) => {{
        let array = $crate::color_hex::color_from_hex!($s);
        if array.len() == 3 {
            $crate::PackedRgba::from_rgb(array[0], array[1], array[2])
        } else {
            // Only reached for 4 bytes, but still compiled for 3:
            #[allow(unconditional_panic)]
            $crate::PackedRgba::from_channels(array[0], array[1], array[2], array[3])
        }
    }};
}
