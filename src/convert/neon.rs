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

use crate::convert::common::lower_multiple;
use crate::convert::scalar;

use core::arch::aarch64::*;

/// Pixels per deinterleaved load/store group
pub const LANE_COUNT: usize = 16;
const DEPTH: usize = 4;

#[inline(always)]
unsafe fn channel(pixels: &uint8x16x4_t, index: usize) -> uint8x16_t {
    match index {
        0 => pixels.0,
        1 => pixels.1,
        2 => pixels.2,
        _ => pixels.3,
    }
}

/// Reorder the channels of 16 pixels at a time.
///
/// `vld4q_u8` splits the interleaved stream into one register per channel,
/// so a conversion is just storing the registers back in a different order.
/// `MAP[j]` is the source channel written to destination channel `j`.
#[target_feature(enable = "neon")]
unsafe fn swizzle_16x<const M0: usize, const M1: usize, const M2: usize, const M3: usize>(
    src: &[u8],
    dst: &mut [u8],
) {
    let pixel_count = src.len() / DEPTH;
    let src_group = src.as_ptr();
    let dst_group = dst.as_mut_ptr();

    let mut x = 0;
    while x < pixel_count {
        let offset = x * DEPTH;
        let pixels = vld4q_u8(src_group.add(offset));
        let reordered = uint8x16x4_t(
            channel(&pixels, M0),
            channel(&pixels, M1),
            channel(&pixels, M2),
            channel(&pixels, M3),
        );

        vst4q_u8(dst_group.add(offset), reordered);
        x += LANE_COUNT;
    }
}

macro_rules! neon_swizzle {
    ($name:ident, [$m0:expr, $m1:expr, $m2:expr, $m3:expr]) => {
        pub fn $name(src: &[u8], dst: &mut [u8]) {
            let vector_part = lower_multiple(src.len() / DEPTH, LANE_COUNT);
            let split = vector_part * DEPTH;

            // Safety: neon is baseline on aarch64
            unsafe {
                swizzle_16x::<{ $m0 }, { $m1 }, { $m2 }, { $m3 }>(
                    &src[..split],
                    &mut dst[..split],
                );
            }

            scalar::$name(&src[split..], &mut dst[split..]);
        }
    };
}

neon_swizzle!(rgba_bgra, [2, 1, 0, 3]);
neon_swizzle!(bgra_rgba, [2, 1, 0, 3]);
neon_swizzle!(argb_abgr, [0, 3, 2, 1]);
neon_swizzle!(abgr_argb, [0, 3, 2, 1]);
neon_swizzle!(rgba_argb, [3, 0, 1, 2]);
neon_swizzle!(bgra_abgr, [3, 0, 1, 2]);
neon_swizzle!(argb_rgba, [1, 2, 3, 0]);
neon_swizzle!(abgr_bgra, [1, 2, 3, 0]);
neon_swizzle!(rgba_abgr, [3, 2, 1, 0]);
neon_swizzle!(abgr_rgba, [3, 2, 1, 0]);
neon_swizzle!(bgra_argb, [3, 2, 1, 0]);
neon_swizzle!(argb_bgra, [3, 2, 1, 0]);
