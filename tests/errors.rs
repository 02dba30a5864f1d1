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
#![cfg(not(feature = "test_instruction_sets"))]

use ps::{convert, is_supported, ConversionDescriptor, ErrorKind, PixelFormat};

use itertools::iproduct;
use pixel_swizzle as ps;

const PIXEL_FORMATS: &[PixelFormat; 6] = &[
    PixelFormat::Argb,
    PixelFormat::Bgra,
    PixelFormat::Bgr,
    PixelFormat::Rgba,
    PixelFormat::Rgb,
    PixelFormat::Abgr,
];

const FORMAT_COUNT: u32 = 6;

#[test]
fn from_raw_rejects_unknown_formats() {
    for raw in FORMAT_COUNT..FORMAT_COUNT + 10 {
        assert_eq!(
            ConversionDescriptor::from_raw(raw, 0),
            Err(ErrorKind::InvalidFormat)
        );
        assert_eq!(
            ConversionDescriptor::from_raw(0, raw),
            Err(ErrorKind::InvalidFormat)
        );
    }

    assert_eq!(
        ConversionDescriptor::from_raw(u32::MAX, u32::MAX),
        Err(ErrorKind::InvalidFormat)
    );
}

#[test]
fn from_raw_accepts_every_format_pair() {
    for (src, dst) in iproduct!(0..FORMAT_COUNT, 0..FORMAT_COUNT) {
        let descriptor = ConversionDescriptor::from_raw(src, dst).unwrap();
        assert_eq!(descriptor.src as u32, src);
        assert_eq!(descriptor.dst as u32, dst);
    }
}

#[test]
fn identity_is_unsupported() {
    for format in PIXEL_FORMATS {
        let descriptor = ConversionDescriptor::new(*format, *format);
        assert!(!is_supported(&descriptor));

        let src = vec![0u8; 4 * format.depth()];
        let mut dst = vec![0u8; 4 * format.depth()];
        assert_eq!(
            convert(&descriptor, &src, &mut dst),
            Err(ErrorKind::UnsupportedConversion)
        );
    }
}

#[test]
fn support_matches_convert_outcome() {
    const PIXEL_COUNT: usize = 7;

    for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
        let descriptor = ConversionDescriptor::new(*src_format, *dst_format);
        let src = vec![0u8; PIXEL_COUNT * src_format.depth()];
        let mut dst = vec![0u8; PIXEL_COUNT * dst_format.depth()];

        let result = convert(&descriptor, &src, &mut dst);
        assert_eq!(is_supported(&descriptor), result.is_ok());
        assert_eq!(result.is_ok(), src_format != dst_format);
    }
}

#[test]
fn source_length_must_hold_whole_pixels() {
    for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
        if src_format == dst_format {
            continue;
        }

        let descriptor = ConversionDescriptor::new(*src_format, *dst_format);
        for truncation in 1..src_format.depth() {
            let src = vec![0u8; 4 * src_format.depth() - truncation];
            let mut dst = vec![0u8; 4 * dst_format.depth()];
            assert_eq!(
                convert(&descriptor, &src, &mut dst),
                Err(ErrorKind::BufferLengthMismatch)
            );
        }
    }
}

#[test]
fn destination_length_must_match_pixel_count() {
    const PIXEL_COUNT: usize = 5;

    for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
        if src_format == dst_format {
            continue;
        }

        let descriptor = ConversionDescriptor::new(*src_format, *dst_format);
        let src = vec![0u8; PIXEL_COUNT * src_format.depth()];
        let expected_len = PIXEL_COUNT * dst_format.depth();

        for dst_len in [0, expected_len - 1, expected_len + 1, 2 * expected_len] {
            let mut dst = vec![0u8; dst_len];
            assert_eq!(
                convert(&descriptor, &src, &mut dst),
                Err(ErrorKind::BufferLengthMismatch)
            );
        }
    }
}

#[test]
fn empty_buffers_convert_successfully() {
    for (src_format, dst_format) in iproduct!(PIXEL_FORMATS, PIXEL_FORMATS) {
        if src_format == dst_format {
            continue;
        }

        let descriptor = ConversionDescriptor::new(*src_format, *dst_format);
        let src: Vec<u8> = Vec::new();
        let mut dst: Vec<u8> = Vec::new();
        assert_eq!(convert(&descriptor, &src, &mut dst), Ok(()));
    }
}
