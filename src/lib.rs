// Copyright 2019 Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

// Permission is hereby granted, free of charge, to any person obtaining a copy of this
// software and associated documentation files (the "Software"), to deal in the Software
// without restriction, including without limitation the rights to use, copy, modify,
// merge, publish, distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED,
// INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT
// HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
// SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
#![warn(missing_docs)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unstable_features)]
#![deny(unused_import_braces)]
#![deny(
    clippy::complexity,
    clippy::correctness,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]
#![allow(
    clippy::trivially_copy_pass_by_ref, // API design
    clippy::missing_safety_doc, // Until we add them...
    clippy::similar_names, // This requires effort to ensure
    // Due to vzeroupper use, compiler does not inline intrinsics
    // but rather creates a function for each one that wraps the operation followed
    // by vzeroupper().
    // This is detrimental to performance
    clippy::inline_always,
    // Yield false positives
    clippy::must_use_candidate,
)]

//! Pixel swizzle is a library to perform pixel channel-order conversion.
//!
//! It converts between any two distinct formats in the following set:
//!
//! | Pixel format | Layout in memory     |
//! | ------------ | -------------------- |
//! | ARGB         | a, r, g, b           |
//! | BGRA         | b, g, r, a           |
//! | BGR          | b, g, r              |
//! | RGBA         | r, g, b, a           |
//! | RGB          | r, g, b              |
//! | ABGR         | a, b, g, r           |
//!
//! Conversions towards a format with an alpha channel fill the alpha samples
//! with 255 when the source has none; conversions towards a format without an
//! alpha channel drop the source alpha samples.
//!
//! The crate selects vector kernels (sse2, avx2 or neon) when the running cpu
//! supports them, and falls back to portable scalar kernels otherwise. Both
//! kernel sets produce identical output for identical input.
//!
//! # Examples
//!
//! Convert a buffer from rgba to bgra:
//! ```
//! use pixel_swizzle as ps;
//! use ps::{convert, ConversionDescriptor, PixelFormat};
//!
//! fn convert_image() {
//!     const WIDTH: usize = 640;
//!     const HEIGHT: usize = 480;
//!
//!     let src_data = vec![0u8; 4 * WIDTH * HEIGHT];
//!     let mut dst_data = vec![0u8; 4 * WIDTH * HEIGHT];
//!
//!     let descriptor = ConversionDescriptor::new(PixelFormat::Rgba, PixelFormat::Bgra);
//!
//!     convert(&descriptor, &src_data, &mut dst_data);
//! }
//! ```
//!
//! Handle conversion errors:
//! ```
//! use pixel_swizzle as ps;
//! use ps::{convert, ConversionDescriptor, PixelFormat};
//! use std::error;
//!
//! fn convert_image() -> Result<(), Box<dyn error::Error>> {
//!     const WIDTH: usize = 640;
//!     const HEIGHT: usize = 480;
//!
//!     let src_data = vec![0u8; 3 * WIDTH * HEIGHT];
//!     let mut dst_data = vec![0u8; 4 * WIDTH * HEIGHT];
//!
//!     let descriptor = ConversionDescriptor::new(PixelFormat::Rgb, PixelFormat::Bgra);
//!
//!     convert(&descriptor, &src_data, &mut dst_data)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Query the detected vector capability:
//! ```
//! use pixel_swizzle as ps;
//!
//! let capability = ps::detect_capability();
//! if capability.vector_support() {
//!     println!("vector kernels, {} pixels per group", capability.lane_width());
//! }
//! ```
mod convert;
mod cpu_info;
mod dispatcher;
mod pixel_format;
mod static_assert;

use cpu_info::{CpuManufacturer, InstructionSet};
use paste::paste;
#[cfg(feature = "test_instruction_sets")]
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::OnceLock;
use thiserror::Error;

pub use cpu_info::CapabilityDescriptor;
pub use pixel_format::PixelFormat;

/// An enumeration of errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A raw format value does not name any pixel format
    #[error("The value does not identify a pixel format")]
    InvalidFormat,
    /// The requested source and destination format pair has no converter
    #[error("The conversion between the two pixel formats is not supported")]
    UnsupportedConversion,
    /// A buffer length is not consistent with its format and the pixel count
    #[error("A buffer length does not match its pixel format and pixel count")]
    BufferLengthMismatch,
}

/// Identifies a conversion by its source and destination pixel formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConversionDescriptor {
    /// Source pixel format
    pub src: PixelFormat,
    /// Destination pixel format
    pub dst: PixelFormat,
}

impl ConversionDescriptor {
    /// Creates a descriptor for the given format pair.
    pub const fn new(src: PixelFormat, dst: PixelFormat) -> Self {
        ConversionDescriptor { src, dst }
    }

    /// Creates a descriptor from raw format values, as they would arrive
    /// over a foreign interface.
    ///
    /// # Errors
    ///
    /// [`InvalidFormat`] if either value does not name a pixel format
    ///
    /// [`InvalidFormat`]: ErrorKind::InvalidFormat
    pub fn from_raw(src: u32, dst: u32) -> Result<Self, ErrorKind> {
        Ok(ConversionDescriptor {
            src: PixelFormat::try_from(src)?,
            dst: PixelFormat::try_from(dst)?,
        })
    }
}

type ConvertKernel = fn(&[u8], &mut [u8]);

macro_rules! swizzle_entry {
    ($conv:expr, $set:ident, $src:ident, $dst:ident) => {
        paste! {
            $conv[dispatcher::get_index(
                PixelFormat::$src as u32,
                PixelFormat::$dst as u32,
            )] = {
                let kernel: ConvertKernel = convert::$set::[<$src:lower _ $dst:lower>];
                Some(kernel)
            }
        }
    };
}

macro_rules! set_scalar_dispatch_table {
    ($conv:expr) => {
        swizzle_entry!($conv, scalar, Argb, Bgra);
        swizzle_entry!($conv, scalar, Argb, Bgr);
        swizzle_entry!($conv, scalar, Argb, Rgba);
        swizzle_entry!($conv, scalar, Argb, Rgb);
        swizzle_entry!($conv, scalar, Argb, Abgr);
        swizzle_entry!($conv, scalar, Bgra, Argb);
        swizzle_entry!($conv, scalar, Bgra, Bgr);
        swizzle_entry!($conv, scalar, Bgra, Rgba);
        swizzle_entry!($conv, scalar, Bgra, Rgb);
        swizzle_entry!($conv, scalar, Bgra, Abgr);
        swizzle_entry!($conv, scalar, Bgr, Argb);
        swizzle_entry!($conv, scalar, Bgr, Bgra);
        swizzle_entry!($conv, scalar, Bgr, Rgba);
        swizzle_entry!($conv, scalar, Bgr, Rgb);
        swizzle_entry!($conv, scalar, Bgr, Abgr);
        swizzle_entry!($conv, scalar, Rgba, Argb);
        swizzle_entry!($conv, scalar, Rgba, Bgra);
        swizzle_entry!($conv, scalar, Rgba, Bgr);
        swizzle_entry!($conv, scalar, Rgba, Rgb);
        swizzle_entry!($conv, scalar, Rgba, Abgr);
        swizzle_entry!($conv, scalar, Rgb, Argb);
        swizzle_entry!($conv, scalar, Rgb, Bgra);
        swizzle_entry!($conv, scalar, Rgb, Bgr);
        swizzle_entry!($conv, scalar, Rgb, Rgba);
        swizzle_entry!($conv, scalar, Rgb, Abgr);
        swizzle_entry!($conv, scalar, Abgr, Argb);
        swizzle_entry!($conv, scalar, Abgr, Bgra);
        swizzle_entry!($conv, scalar, Abgr, Bgr);
        swizzle_entry!($conv, scalar, Abgr, Rgba);
        swizzle_entry!($conv, scalar, Abgr, Rgb);
    };
}

// The vector sets cover the conversions between four-byte formats; the
// remaining pairs keep their scalar entries.
#[cfg(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64"))]
macro_rules! set_vector_dispatch_table {
    ($conv:expr, $set:ident) => {
        swizzle_entry!($conv, $set, Rgba, Bgra);
        swizzle_entry!($conv, $set, Bgra, Rgba);
        swizzle_entry!($conv, $set, Argb, Abgr);
        swizzle_entry!($conv, $set, Abgr, Argb);
        swizzle_entry!($conv, $set, Rgba, Argb);
        swizzle_entry!($conv, $set, Bgra, Abgr);
        swizzle_entry!($conv, $set, Argb, Rgba);
        swizzle_entry!($conv, $set, Abgr, Bgra);
        swizzle_entry!($conv, $set, Rgba, Abgr);
        swizzle_entry!($conv, $set, Abgr, Rgba);
        swizzle_entry!($conv, $set, Bgra, Argb);
        swizzle_entry!($conv, $set, Argb, Bgra);
    };
}

#[cfg(feature = "test_instruction_sets")]
static TEST_SET: AtomicI32 = AtomicI32::new(-1);

type DispatchTable = [Option<ConvertKernel>; dispatcher::TABLE_SIZE];

struct Context {
    manufacturer: CpuManufacturer,
    set: InstructionSet,
    converters: DispatchTable,
    #[cfg(feature = "test_instruction_sets")]
    test_converters: [Option<DispatchTable>; 2],
}

impl Context {
    pub fn global() -> &'static Context {
        static INSTANCE: OnceLock<Context> = OnceLock::new();
        INSTANCE.get_or_init(Context::new)
    }

    pub fn new() -> Self {
        let (manufacturer, set) = cpu_info::get();
        let mut context = Context {
            manufacturer,
            set,
            converters: [None; dispatcher::TABLE_SIZE],
            #[cfg(feature = "test_instruction_sets")]
            test_converters: [None; 2],
        };

        set_scalar_dispatch_table!(context.converters);

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        match context.set {
            InstructionSet::Scalar => {}
            InstructionSet::Sse2 => {
                set_vector_dispatch_table!(context.converters, sse2);

                #[cfg(feature = "test_instruction_sets")]
                {
                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_scalar_dispatch_table!(table);
                    context.test_converters[0] = Some(table);
                }
            }
            InstructionSet::Avx2 => {
                set_vector_dispatch_table!(context.converters, avx2);

                #[cfg(feature = "test_instruction_sets")]
                {
                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_scalar_dispatch_table!(table);
                    context.test_converters[0] = Some(table);

                    let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                    set_scalar_dispatch_table!(table);
                    set_vector_dispatch_table!(table, sse2);
                    context.test_converters[1] = Some(table);
                }
            }
        }

        #[cfg(target_arch = "aarch64")]
        if matches!(context.set, InstructionSet::Neon) {
            set_vector_dispatch_table!(context.converters, neon);

            #[cfg(feature = "test_instruction_sets")]
            {
                let mut table: DispatchTable = [None; dispatcher::TABLE_SIZE];
                set_scalar_dispatch_table!(table);
                context.test_converters[0] = Some(table);
            }
        }

        log::debug!(
            "pixel_swizzle: manufacturer={:?} instruction_set={:?}",
            context.manufacturer,
            context.set
        );

        context
    }
}

/// Returns a description of the algorithms that are best for the running cpu and
/// available instruction sets
///
/// # Examples
/// ```
/// use pixel_swizzle as ps;
/// println!("{}", ps::describe_acceleration());
/// // => {cpu-manufacturer:Intel,instruction-set:Avx2}
/// ```
pub fn describe_acceleration() -> String {
    let state = Context::global();

    format!(
        "{{cpu-manufacturer:{:?},instruction-set:{:?}}}",
        state.manufacturer, state.set
    )
}

/// Returns the vector capability detected for the running process.
///
/// Detection runs at most once per process; every call observes the same
/// descriptor. When detection cannot establish vector support, the
/// descriptor reports no vector support and the scalar kernels are used.
pub fn detect_capability() -> CapabilityDescriptor {
    CapabilityDescriptor::from_instruction_set(Context::global().set)
}

/// Returns whether the conversion described by `descriptor` is supported.
///
/// A conversion between a format pair is supported exactly when [`convert`]
/// accepts that pair. Converting a format to itself is not supported.
pub fn is_supported(descriptor: &ConversionDescriptor) -> bool {
    let index = dispatcher::get_index(descriptor.src as u32, descriptor.dst as u32);
    let converters = &Context::global().converters;

    index < converters.len() && converters[index].is_some()
}

/// Converts `src` into `dst` according to `descriptor`.
///
/// The pixel count is derived from the source buffer length. Both buffers
/// must hold a whole number of pixels and describe the same pixel count.
/// Zero pixels is valid; both buffers are then empty and the conversion
/// succeeds without touching them.
///
/// # Errors
///
/// * [`BufferLengthMismatch`] if `src.len()` is not a multiple of the source
///   format depth, or if `dst.len()` does not hold exactly the same pixel
///   count in the destination format
///
/// * [`UnsupportedConversion`] if no converter exists for the format pair.
///   In particular, converting a format to itself is unsupported
///
/// [`BufferLengthMismatch`]: ErrorKind::BufferLengthMismatch
/// [`UnsupportedConversion`]: ErrorKind::UnsupportedConversion
pub fn convert(
    descriptor: &ConversionDescriptor,
    src: &[u8],
    dst: &mut [u8],
) -> Result<(), ErrorKind> {
    let src_depth = descriptor.src.depth();
    let dst_depth = descriptor.dst.depth();

    if src.len() % src_depth != 0 {
        return Err(ErrorKind::BufferLengthMismatch);
    }

    let pixel_count = src.len() / src_depth;
    if dst.len() != pixel_count * dst_depth {
        return Err(ErrorKind::BufferLengthMismatch);
    }

    let index = dispatcher::get_index(descriptor.src as u32, descriptor.dst as u32);
    let converters = Context::global().converters;

    #[cfg(feature = "test_instruction_sets")]
    let converters = {
        let test_converters = Context::global().test_converters;
        #[allow(clippy::cast_sign_loss)]
        // Checked: we want the invalid value '-1' to be mapped outside the valid range
        test_converters
            .get(TEST_SET.load(Ordering::SeqCst) as usize)
            .copied()
            .flatten()
            .unwrap_or(converters)
    };

    if index >= converters.len() {
        return Err(ErrorKind::UnsupportedConversion);
    }

    let converter = converters[index];
    match converter {
        None => Err(ErrorKind::UnsupportedConversion),
        Some(kernel) => {
            kernel(src, dst);
            Ok(())
        }
    }
}

/// Converts `src` into a newly allocated buffer, sized for the destination
/// format.
///
/// # Errors
///
/// Fails for the same reasons as [`convert`], except that the destination
/// length is always consistent.
pub fn convert_to_vec(descriptor: &ConversionDescriptor, src: &[u8]) -> Result<Vec<u8>, ErrorKind> {
    let src_depth = descriptor.src.depth();
    if src.len() % src_depth != 0 {
        return Err(ErrorKind::BufferLengthMismatch);
    }

    let pixel_count = src.len() / src_depth;
    let mut dst = vec![0u8; pixel_count * descriptor.dst.depth()];
    convert(descriptor, src, &mut dst)?;

    Ok(dst)
}

/// This is for internal use only
#[cfg(feature = "test_instruction_sets")]
pub fn initialize_with_instruction_set(instruction_set: &str) {
    match instruction_set {
        "scalar" => TEST_SET.store(0, Ordering::SeqCst),
        "sse2" => TEST_SET.store(1, Ordering::SeqCst),
        _ => TEST_SET.store(2, Ordering::SeqCst),
    };
}
