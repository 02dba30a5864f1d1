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

/// Pixels per 256-bit instruction group
pub const LANE_COUNT: usize = 8;
const DEPTH: usize = 4;

/// Permute the bytes of every 32-bit lane (8-wide)
#[inline(always)]
unsafe fn permute_lanes<const OP: usize>(x: __m256i) -> __m256i {
    if OP == SWAP_EVEN {
        _mm256_or_si256(
            _mm256_and_si256(x, _mm256_set1_epi32(0xFF00_FF00_u32 as i32)),
            _mm256_or_si256(
                _mm256_slli_epi32(_mm256_and_si256(x, _mm256_set1_epi32(0xFF)), 16),
                _mm256_and_si256(_mm256_srli_epi32(x, 16), _mm256_set1_epi32(0xFF)),
            ),
        )
    } else if OP == SWAP_ODD {
        _mm256_or_si256(
            _mm256_and_si256(x, _mm256_set1_epi32(0x00FF_00FF)),
            _mm256_or_si256(
                _mm256_slli_epi32(_mm256_and_si256(x, _mm256_set1_epi32(0xFF00)), 16),
                _mm256_and_si256(_mm256_srli_epi32(x, 16), _mm256_set1_epi32(0xFF00)),
            ),
        )
    } else if OP == ROTATE_LEFT {
        _mm256_or_si256(_mm256_slli_epi32(x, 8), _mm256_srli_epi32(x, 24))
    } else if OP == ROTATE_RIGHT {
        _mm256_or_si256(_mm256_srli_epi32(x, 8), _mm256_slli_epi32(x, 24))
    } else {
        // Reverse: rotate each lane by 16 bits, then exchange the adjacent
        // bytes inside both halves.
        let halves = _mm256_or_si256(_mm256_slli_epi32(x, 16), _mm256_srli_epi32(x, 16));
        _mm256_or_si256(
            _mm256_and_si256(
                _mm256_slli_epi32(halves, 8),
                _mm256_set1_epi32(0xFF00_FF00_u32 as i32),
            ),
            _mm256_and_si256(_mm256_srli_epi32(halves, 8), _mm256_set1_epi32(0x00FF_00FF)),
        )
    }
}

#[target_feature(enable = "avx2")]
unsafe fn swizzle_8x<const OP: usize>(src: &[u8], dst: &mut [u8]) {
    let pixel_count = src.len() / DEPTH;
    let src_group = src.as_ptr();
    let dst_group = dst.as_mut_ptr();

    let mut x = 0;
    while x < pixel_count {
        let offset = x * DEPTH;
        let pixels = _mm256_loadu_si256(src_group.add(offset).cast());
        _mm256_storeu_si256(dst_group.add(offset).cast(), permute_lanes::<OP>(pixels));
        x += LANE_COUNT;
    }
}

macro_rules! avx2_swizzle {
    ($name:ident, $op:expr) => {
        pub fn $name(src: &[u8], dst: &mut [u8]) {
            let vector_part = lower_multiple(src.len() / DEPTH, LANE_COUNT);
            let split = vector_part * DEPTH;

            // Safety: this kernel is dispatched only when cpuid reports avx2
            unsafe {
                swizzle_8x::<{ $op }>(&src[..split], &mut dst[..split]);
            }

            scalar::$name(&src[split..], &mut dst[split..]);
        }
    };
}

avx2_swizzle!(rgba_bgra, SWAP_EVEN);
avx2_swizzle!(bgra_rgba, SWAP_EVEN);
avx2_swizzle!(argb_abgr, SWAP_ODD);
avx2_swizzle!(abgr_argb, SWAP_ODD);
avx2_swizzle!(rgba_argb, ROTATE_LEFT);
avx2_swizzle!(bgra_abgr, ROTATE_LEFT);
avx2_swizzle!(argb_rgba, ROTATE_RIGHT);
avx2_swizzle!(abgr_bgra, ROTATE_RIGHT);
avx2_swizzle!(rgba_abgr, REVERSE);
avx2_swizzle!(abgr_rgba, REVERSE);
avx2_swizzle!(bgra_argb, REVERSE);
avx2_swizzle!(argb_bgra, REVERSE);
