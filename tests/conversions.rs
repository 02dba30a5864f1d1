#![warn(unused)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_code)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![allow(clippy::too_many_lines)] // This requires effort to handle

use ps::{convert, convert_to_vec, ConversionDescriptor, PixelFormat};

use itertools::iproduct;
use pixel_swizzle as ps;
use rand::Rng;

const PIXEL_FORMATS: &[PixelFormat; 6] = &[
    PixelFormat::Argb,
    PixelFormat::Bgra,
    PixelFormat::Bgr,
    PixelFormat::Rgba,
    PixelFormat::Rgb,
    PixelFormat::Abgr,
];

// Pixel counts up to 40 cross every vector group boundary at least twice
// for all lane widths in use (4, 8 and 16).
const MAX_PIXEL_COUNT: usize = 40;

/// (r, g, b, alpha) samples of one pixel, alpha reported only when the
/// format stores one.
fn read_pixel(format: PixelFormat, pixel: &[u8]) -> (u8, u8, u8, Option<u8>) {
    match format {
        PixelFormat::Argb => (pixel[1], pixel[2], pixel[3], Some(pixel[0])),
        PixelFormat::Bgra => (pixel[2], pixel[1], pixel[0], Some(pixel[3])),
        PixelFormat::Bgr => (pixel[2], pixel[1], pixel[0], None),
        PixelFormat::Rgba => (pixel[0], pixel[1], pixel[2], Some(pixel[3])),
        PixelFormat::Rgb => (pixel[0], pixel[1], pixel[2], None),
        PixelFormat::Abgr => (pixel[3], pixel[2], pixel[1], Some(pixel[0])),
    }
}

fn write_pixel(format: PixelFormat, r: u8, g: u8, b: u8, alpha: u8, pixel: &mut [u8]) {
    match format {
        PixelFormat::Argb => pixel.copy_from_slice(&[alpha, r, g, b]),
        PixelFormat::Bgra => pixel.copy_from_slice(&[b, g, r, alpha]),
        PixelFormat::Bgr => pixel.copy_from_slice(&[b, g, r]),
        PixelFormat::Rgba => pixel.copy_from_slice(&[r, g, b, alpha]),
        PixelFormat::Rgb => pixel.copy_from_slice(&[r, g, b]),
        PixelFormat::Abgr => pixel.copy_from_slice(&[alpha, b, g, r]),
    }
}

fn expected_output(descriptor: ConversionDescriptor, src: &[u8]) -> Vec<u8> {
    let src_depth = descriptor.src.depth();
    let dst_depth = descriptor.dst.depth();
    let pixel_count = src.len() / src_depth;

    let mut dst = vec![0u8; pixel_count * dst_depth];
    for (src_pixel, dst_pixel) in src
        .chunks_exact(src_depth)
        .zip(dst.chunks_exact_mut(dst_depth))
    {
        let (r, g, b, alpha) = read_pixel(descriptor.src, src_pixel);
        write_pixel(descriptor.dst, r, g, b, alpha.unwrap_or(255), dst_pixel);
    }

    dst
}

fn random_buffer(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

fn swizzle_ok(src_format: PixelFormat, dst_format: PixelFormat) {
    let descriptor = ConversionDescriptor::new(src_format, dst_format);

    for pixel_count in 0..=MAX_PIXEL_COUNT {
        let src = random_buffer(pixel_count * src_format.depth());
        let mut dst = vec![0u8; pixel_count * dst_format.depth()];

        convert(&descriptor, &src, &mut dst).unwrap();
        assert_eq!(
            dst,
            expected_output(descriptor, &src),
            "{src_format} to {dst_format}, {pixel_count} pixels"
        );
    }
}

fn round_trip_ok(first: PixelFormat, second: PixelFormat) {
    let forward = ConversionDescriptor::new(first, second);
    let backward = ConversionDescriptor::new(second, first);

    for pixel_count in 0..=MAX_PIXEL_COUNT {
        let original = random_buffer(pixel_count * first.depth());
        let converted = convert_to_vec(&forward, &original).unwrap();
        let restored = convert_to_vec(&backward, &converted).unwrap();

        assert_eq!(restored, original, "{first} via {second}, {pixel_count} pixels");
    }
}

#[cfg(all(test, not(feature = "test_instruction_sets")))]
mod conversions {
    use super::{
        convert, convert_to_vec, iproduct, round_trip_ok, swizzle_ok, ConversionDescriptor,
        PixelFormat, PIXEL_FORMATS,
    };

    #[test]
    fn all_pairs_match_reference() {
        for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
            if src_format != dst_format {
                swizzle_ok(*src_format, *dst_format);
            }
        }
    }

    #[test]
    fn rgba_to_bgra_swaps_red_and_blue() {
        let descriptor = ConversionDescriptor::new(PixelFormat::Rgba, PixelFormat::Bgra);
        let src = [10, 20, 30, 40];
        let mut dst = [0u8; 4];

        convert(&descriptor, &src, &mut dst).unwrap();
        assert_eq!(dst, [30, 20, 10, 40]);

        let descriptor = ConversionDescriptor::new(PixelFormat::Bgra, PixelFormat::Rgba);
        let mut back = [0u8; 4];
        convert(&descriptor, &dst, &mut back).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn alpha_is_filled_from_opaque_sources() {
        let descriptor = ConversionDescriptor::new(PixelFormat::Rgb, PixelFormat::Argb);
        let src = [10, 20, 30, 40, 50, 60];

        let dst = convert_to_vec(&descriptor, &src).unwrap();
        assert_eq!(dst, [255, 10, 20, 30, 255, 40, 50, 60]);
    }

    #[test]
    fn alpha_is_dropped_towards_opaque_formats() {
        let descriptor = ConversionDescriptor::new(PixelFormat::Bgra, PixelFormat::Rgb);
        let src = [30, 20, 10, 40, 60, 50, 40, 80];

        let dst = convert_to_vec(&descriptor, &src).unwrap();
        assert_eq!(dst, [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn four_byte_round_trips() {
        let formats = [
            PixelFormat::Argb,
            PixelFormat::Bgra,
            PixelFormat::Rgba,
            PixelFormat::Abgr,
        ];

        for (first, second) in iproduct!(&formats, &formats) {
            if first != second {
                round_trip_ok(*first, *second);
            }
        }
    }

    #[test]
    fn three_byte_round_trips() {
        round_trip_ok(PixelFormat::Rgb, PixelFormat::Bgr);
        round_trip_ok(PixelFormat::Bgr, PixelFormat::Rgb);
    }
}

#[cfg(all(test, feature = "test_instruction_sets"))]
mod conversions {
    use super::{iproduct, round_trip_ok, swizzle_ok, PixelFormat, PIXEL_FORMATS};
    use pixel_swizzle::initialize_with_instruction_set;

    #[test]
    fn coverage() {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        const SETS: [&str; 3] = ["scalar", "sse2", "avx2"];
        #[cfg(target_arch = "aarch64")]
        const SETS: [&str; 2] = ["scalar", "neon"];
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
        const SETS: [&str; 1] = ["scalar"];

        for set in &SETS {
            initialize_with_instruction_set(set);

            for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
                if src_format != dst_format {
                    swizzle_ok(*src_format, *dst_format);
                }
            }

            round_trip_ok(PixelFormat::Rgba, PixelFormat::Bgra);
            round_trip_ok(PixelFormat::Argb, PixelFormat::Abgr);
        }
    }
}
