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

/// Alpha value assigned when the source format carries no alpha channel
pub const DEFAULT_ALPHA: u8 = 255;

// Byte permutations applied to every 32-bit pixel by the vector kernels.
// Each one is its own inverse except for the rotations, which invert
// each other.
pub const SWAP_EVEN: usize = 0; // exchange bytes 0 and 2
pub const SWAP_ODD: usize = 1; // exchange bytes 1 and 3
pub const ROTATE_LEFT: usize = 2; // towards the most significant byte
pub const ROTATE_RIGHT: usize = 3; // towards the least significant byte
pub const REVERSE: usize = 4; // reverse all four bytes

/// Largest multiple of `multiple` which is less than or equal to `x`.
///
/// `multiple` must be a power of two.
pub fn lower_multiple(x: usize, multiple: usize) -> usize {
    x & !(multiple - 1)
}
