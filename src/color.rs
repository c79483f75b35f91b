//! Conversion from application colors to the chip's native pixel formats.
//!
//! The display RAM stores whatever bytes it is given; it is the color depth and color sequence
//! configured via `SetRemapping` that determine how the panel interprets them. The functions
//! here produce the exact byte sequence one pixel occupies for a given configuration:
//!
//! - 256-color mode: one byte, the low 8 bits of the color (3:3:2).
//! - 65k mode: two bytes, 5:6:5, most significant byte first.
//! - 262k modes: three bytes, one 6-bit channel per byte, most significant channel first.
//!
//! A BGR color sequence swaps the red and blue channels at packing time, so callers always
//! supply colors in RGB order. Whole-image conversion is a pure per-pixel map; the traversal
//! order on screen is decided by the configured address increment, not here.

use crate::command::{ColorDepth, ColorSequence};

/// The packed wire form of a single pixel: up to three bytes, streamed in transmit order.
#[derive(Clone, Copy)]
pub struct PackedPixel {
    buf: [u8; 3],
    len: u8,
    pos: u8,
}

impl PackedPixel {
    fn one(b0: u8) -> Self {
        PackedPixel {
            buf: [b0, 0, 0],
            len: 1,
            pos: 0,
        }
    }

    fn two(b0: u8, b1: u8) -> Self {
        PackedPixel {
            buf: [b0, b1, 0],
            len: 2,
            pos: 0,
        }
    }

    fn three(b0: u8, b1: u8, b2: u8) -> Self {
        PackedPixel {
            buf: [b0, b1, b2],
            len: 3,
            pos: 0,
        }
    }

    /// The packed bytes in transmit order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.pos as usize..self.len as usize]
    }
}

impl Iterator for PackedPixel {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos < self.len {
            let byte = self.buf[self.pos as usize];
            self.pos += 1;
            Some(byte)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.pos) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PackedPixel {}

/// Pack a 24-bit `0xRRGGBB` color into its wire form for the given depth and sequence.
pub fn pack_rgb(color: u32, depth: ColorDepth, sequence: ColorSequence) -> PackedPixel {
    let r = (color >> 16) as u8;
    let g = (color >> 8) as u8;
    let b = color as u8;
    match depth {
        ColorDepth::Depth256 => PackedPixel::one(color as u8),
        ColorDepth::Depth65k => {
            let packed = match sequence {
                ColorSequence::Rgb => encode_565(r, g, b),
                ColorSequence::Bgr => encode_565(b, g, r),
            };
            PackedPixel::two((packed >> 8) as u8, packed as u8)
        }
        ColorDepth::Depth262k | ColorDepth::Depth262kFormat2 => match sequence {
            ColorSequence::Rgb => PackedPixel::three(r >> 2, g >> 2, b >> 2),
            ColorSequence::Bgr => PackedPixel::three(b >> 2, g >> 2, r >> 2),
        },
    }
}

/// Pack an already-encoded 5:6:5 value for transmission. An RGB sequence sends it unchanged;
/// BGR swaps the two 5-bit end fields first.
pub fn pack_rgb565(color: u16, sequence: ColorSequence) -> PackedPixel {
    let packed = match sequence {
        ColorSequence::Rgb => color,
        ColorSequence::Bgr => (color & 0xF800) >> 11 | (color & 0x07E0) | (color & 0x001F) << 11,
    };
    PackedPixel::two((packed >> 8) as u8, packed as u8)
}

fn encode_565(r: u8, g: u8, b: u8) -> u16 {
    (r as u16 >> 3) << 11 | (g as u16 >> 2) << 5 | (b as u16 >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invert the 5:6:5 packing by bit replication, the standard expansion
    /// that maps full-scale back to full-scale.
    fn decode_565(hi: u8, lo: u8) -> (u8, u8, u8) {
        let v = (hi as u16) << 8 | lo as u16;
        let r5 = ((v >> 11) & 0x1F) as u8;
        let g6 = ((v >> 5) & 0x3F) as u8;
        let b5 = (v & 0x1F) as u8;
        (r5 << 3 | r5 >> 2, g6 << 2 | g6 >> 4, b5 << 3 | b5 >> 2)
    }

    #[test]
    fn depth_256_truncates() {
        assert_eq!(
            pack_rgb(0x123456, ColorDepth::Depth256, ColorSequence::Rgb).as_bytes(),
            &[0x56]
        );
        assert_eq!(
            pack_rgb(0xFFFFFF, ColorDepth::Depth256, ColorSequence::Rgb).as_bytes(),
            &[0xFF]
        );
    }

    #[test]
    fn depth_65k_packs_big_endian() {
        assert_eq!(
            pack_rgb(0xFF0000, ColorDepth::Depth65k, ColorSequence::Rgb).as_bytes(),
            &[0xF8, 0x00]
        );
        assert_eq!(
            pack_rgb(0x00FF00, ColorDepth::Depth65k, ColorSequence::Rgb).as_bytes(),
            &[0x07, 0xE0]
        );
        assert_eq!(
            pack_rgb(0x0000FF, ColorDepth::Depth65k, ColorSequence::Rgb).as_bytes(),
            &[0x00, 0x1F]
        );
        assert_eq!(
            pack_rgb(0xFFFFFF, ColorDepth::Depth65k, ColorSequence::Rgb).as_bytes(),
            &[0xFF, 0xFF]
        );
    }

    #[test]
    fn bgr_sequence_swaps_red_and_blue_byte_positions() {
        let red_rgb = pack_rgb(0xFF0000, ColorDepth::Depth65k, ColorSequence::Rgb);
        let red_bgr = pack_rgb(0xFF0000, ColorDepth::Depth65k, ColorSequence::Bgr);
        assert_eq!(red_rgb.as_bytes(), &[0xF8, 0x00]);
        assert_eq!(red_bgr.as_bytes(), &[0x00, 0x1F]);
        let blue_bgr = pack_rgb(0x0000FF, ColorDepth::Depth65k, ColorSequence::Bgr);
        assert_eq!(blue_bgr.as_bytes(), &[0xF8, 0x00]);
        // Green sits in the middle of the word and is unaffected.
        let green_bgr = pack_rgb(0x00FF00, ColorDepth::Depth65k, ColorSequence::Bgr);
        assert_eq!(green_bgr.as_bytes(), &[0x07, 0xE0]);
    }

    #[test]
    fn round_trip_565_is_within_one_quantization_step() {
        for &color in &[
            0x000000, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFFFF, 0x123456, 0xCAFE42, 0x808080,
            0x7F7F7F, 0x010203,
        ] {
            let packed = pack_rgb(color, ColorDepth::Depth65k, ColorSequence::Rgb);
            let bytes = packed.as_bytes();
            let (r, g, b) = decode_565(bytes[0], bytes[1]);
            let (r0, g0, b0) = ((color >> 16) as u8, (color >> 8) as u8, color as u8);
            assert!((r as i16 - r0 as i16).abs() < 8, "r for {:06X}", color);
            assert!((g as i16 - g0 as i16).abs() < 4, "g for {:06X}", color);
            assert!((b as i16 - b0 as i16).abs() < 8, "b for {:06X}", color);
            // Re-encoding the decoded color is stable.
            let again = pack_rgb(
                (r as u32) << 16 | (g as u32) << 8 | b as u32,
                ColorDepth::Depth65k,
                ColorSequence::Rgb,
            );
            assert_eq!(again.as_bytes(), bytes);
        }
    }

    #[test]
    fn round_trip_565_is_exact_at_full_scale() {
        for &(color, expect) in &[
            (0xFF0000u32, (0xFFu8, 0x00u8, 0x00u8)),
            (0x00FF00, (0x00, 0xFF, 0x00)),
            (0x0000FF, (0x00, 0x00, 0xFF)),
            (0xFFFFFF, (0xFF, 0xFF, 0xFF)),
            (0x000000, (0x00, 0x00, 0x00)),
        ] {
            let packed = pack_rgb(color, ColorDepth::Depth65k, ColorSequence::Rgb);
            let bytes = packed.as_bytes();
            assert_eq!(decode_565(bytes[0], bytes[1]), expect);
        }
    }

    #[test]
    fn depth_262k_packs_one_channel_per_byte() {
        assert_eq!(
            pack_rgb(0xFF8040, ColorDepth::Depth262k, ColorSequence::Rgb).as_bytes(),
            &[0x3F, 0x20, 0x10]
        );
        assert_eq!(
            pack_rgb(0xFF8040, ColorDepth::Depth262k, ColorSequence::Bgr).as_bytes(),
            &[0x10, 0x20, 0x3F]
        );
        // The second 262k format only differs in the parallel interface framing.
        assert_eq!(
            pack_rgb(0xFF8040, ColorDepth::Depth262kFormat2, ColorSequence::Rgb).as_bytes(),
            &[0x3F, 0x20, 0x10]
        );
    }

    #[test]
    fn prepacked_565_passthrough_and_swap() {
        assert_eq!(
            pack_rgb565(0xF800, ColorSequence::Rgb).as_bytes(),
            &[0xF8, 0x00]
        );
        assert_eq!(
            pack_rgb565(0xF800, ColorSequence::Bgr).as_bytes(),
            &[0x00, 0x1F]
        );
        assert_eq!(
            pack_rgb565(0x07E0, ColorSequence::Bgr).as_bytes(),
            &[0x07, 0xE0]
        );
        assert_eq!(
            pack_rgb565(0x1234, ColorSequence::Rgb).as_bytes(),
            &[0x12, 0x34]
        );
    }

    #[test]
    fn packed_pixel_iterates_its_bytes() {
        for &depth in &[
            ColorDepth::Depth256,
            ColorDepth::Depth65k,
            ColorDepth::Depth262k,
        ] {
            let packed = pack_rgb(0xA1B2C3, depth, ColorSequence::Rgb);
            let via_slice = packed.as_bytes().to_vec();
            let via_iter: Vec<u8> = packed.collect();
            assert_eq!(via_iter, via_slice);
            assert_eq!(via_slice.len(), depth.bytes_per_pixel());
        }
    }
}
