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

//! Portable element-by-element kernels.
//!
//! This set implements every supported conversion and defines the expected
//! output of the vector sets. It places no requirement on buffer alignment
//! or on the pixel count being a multiple of any group size.

use crate::convert::common::DEFAULT_ALPHA;
use crate::pixel_format::PixelFormat;
use paste::paste;

#[inline(always)]
fn swizzle(src_format: PixelFormat, dst_format: PixelFormat, src: &[u8], dst: &mut [u8]) {
    let (src_rgb, src_alpha) = src_format.channel_offsets();
    let (dst_rgb, dst_alpha) = dst_format.channel_offsets();

    let src_pixels = src.chunks_exact(src_format.depth());
    let dst_pixels = dst.chunks_exact_mut(dst_format.depth());
    for (src_pixel, dst_pixel) in src_pixels.zip(dst_pixels) {
        dst_pixel[dst_rgb[0]] = src_pixel[src_rgb[0]];
        dst_pixel[dst_rgb[1]] = src_pixel[src_rgb[1]];
        dst_pixel[dst_rgb[2]] = src_pixel[src_rgb[2]];
        if let Some(dst_offset) = dst_alpha {
            dst_pixel[dst_offset] = match src_alpha {
                Some(src_offset) => src_pixel[src_offset],
                None => DEFAULT_ALPHA,
            };
        }
    }
}

macro_rules! scalar_swizzle {
    ($src:ident, $dst:ident) => {
        paste! {
            pub fn [<$src:lower _ $dst:lower>](src: &[u8], dst: &mut [u8]) {
                swizzle(PixelFormat::$src, PixelFormat::$dst, src, dst);
            }
        }
    };
}

scalar_swizzle!(Argb, Bgra);
scalar_swizzle!(Argb, Bgr);
scalar_swizzle!(Argb, Rgba);
scalar_swizzle!(Argb, Rgb);
scalar_swizzle!(Argb, Abgr);
scalar_swizzle!(Bgra, Argb);
scalar_swizzle!(Bgra, Bgr);
scalar_swizzle!(Bgra, Rgba);
scalar_swizzle!(Bgra, Rgb);
scalar_swizzle!(Bgra, Abgr);
scalar_swizzle!(Bgr, Argb);
scalar_swizzle!(Bgr, Bgra);
scalar_swizzle!(Bgr, Rgba);
scalar_swizzle!(Bgr, Rgb);
scalar_swizzle!(Bgr, Abgr);
scalar_swizzle!(Rgba, Argb);
scalar_swizzle!(Rgba, Bgra);
scalar_swizzle!(Rgba, Bgr);
scalar_swizzle!(Rgba, Rgb);
scalar_swizzle!(Rgba, Abgr);
scalar_swizzle!(Rgb, Argb);
scalar_swizzle!(Rgb, Bgra);
scalar_swizzle!(Rgb, Bgr);
scalar_swizzle!(Rgb, Rgba);
scalar_swizzle!(Rgb, Abgr);
scalar_swizzle!(Abgr, Argb);
scalar_swizzle!(Abgr, Bgra);
scalar_swizzle!(Abgr, Bgr);
scalar_swizzle!(Abgr, Rgba);
scalar_swizzle!(Abgr, Rgb);
