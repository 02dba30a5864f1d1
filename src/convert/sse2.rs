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

#![allow(clippy::wildcard_imports)] // We are importing everything
use crate::convert::common::*;
use crate::convert::scalar;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Pixels per 128-bit instruction group
pub const LANE_COUNT: usize = 4;
const DEPTH: usize = 4;

/// Permute the bytes of every 32-bit lane (4-wide)
///
/// SSE2 has no arbitrary byte shuffle, so each permutation is expressed
/// with 32-bit shifts, masks and ors.
#[inline(always)]
unsafe fn permute_lanes<const OP: usize>(x: __m128i) -> __m128i {
    if OP == SWAP_EVEN {
        _mm_or_si128(
            _mm_and_si128(x, _mm_set1_epi32(0xFF00_FF00_u32 as i32)),
            _mm_or_si128(
                _mm_slli_epi32(_mm_and_si128(x, _mm_set1_epi32(0xFF)), 16),
                _mm_and_si128(_mm_srli_epi32(x, 16), _mm_set1_epi32(0xFF)),
            ),
        )
    } else if OP == SWAP_ODD {
        _mm_or_si128(
            _mm_and_si128(x, _mm_set1_epi32(0x00FF_00FF)),
            _mm_or_si128(
                _mm_slli_epi32(_mm_and_si128(x, _mm_set1_epi32(0xFF00)), 16),
                _mm_and_si128(_mm_srli_epi32(x, 16), _mm_set1_epi32(0xFF00)),
            ),
        )
    } else if OP == ROTATE_LEFT {
        _mm_or_si128(_mm_slli_epi32(x, 8), _mm_srli_epi32(x, 24))
    } else if OP == ROTATE_RIGHT {
        _mm_or_si128(_mm_srli_epi32(x, 8), _mm_slli_epi32(x, 24))
    } else {
        // Reverse: rotate each lane by 16 bits, then exchange the adjacent
        // bytes inside both halves.
        let halves = _mm_or_si128(_mm_slli_epi32(x, 16), _mm_srli_epi32(x, 16));
        _mm_or_si128(
            _mm_and_si128(_mm_slli_epi32(halves, 8), _mm_set1_epi32(0xFF00_FF00_u32 as i32)),
            _mm_and_si128(_mm_srli_epi32(halves, 8), _mm_set1_epi32(0x00FF_00FF)),
        )
    }
}

#[target_feature(enable = "sse2")]
unsafe fn swizzle_4x<const OP: usize>(src: &[u8], dst: &mut [u8]) {
    let pixel_count = src.len() / DEPTH;
    let src_group = src.as_ptr();
    let dst_group = dst.as_mut_ptr();

    let mut x = 0;
    while x < pixel_count {
        let offset = x * DEPTH;
        let pixels = _mm_loadu_si128(src_group.add(offset).cast());
        _mm_storeu_si128(dst_group.add(offset).cast(), permute_lanes::<OP>(pixels));
        x += LANE_COUNT;
    }
}

macro_rules! sse2_swizzle {
    ($name:ident, $op:expr) => {
        pub fn $name(src: &[u8], dst: &mut [u8]) {
            let vector_part = lower_multiple(src.len() / DEPTH, LANE_COUNT);
            let split = vector_part * DEPTH;

            // Safety: this kernel is dispatched only when cpuid reports sse2
            unsafe {
                swizzle_4x::<{ $op }>(&src[..split], &mut dst[..split]);
            }

            scalar::$name(&src[split..], &mut dst[split..]);
        }
    };
}

sse2_swizzle!(rgba_bgra, SWAP_EVEN);
sse2_swizzle!(bgra_rgba, SWAP_EVEN);
sse2_swizzle!(argb_abgr, SWAP_ODD);
sse2_swizzle!(abgr_argb, SWAP_ODD);
sse2_swizzle!(rgba_argb, ROTATE_LEFT);
sse2_swizzle!(bgra_abgr, ROTATE_LEFT);
sse2_swizzle!(argb_rgba, ROTATE_RIGHT);
sse2_swizzle!(abgr_bgra, ROTATE_RIGHT);
sse2_swizzle!(rgba_abgr, REVERSE);
sse2_swizzle!(abgr_rgba, REVERSE);
sse2_swizzle!(bgra_argb, REVERSE);
sse2_swizzle!(argb_bgra, REVERSE);
