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
use core::fmt;

use crate::ErrorKind;

/// An enumeration of supported pixel formats.
///
/// Every format stores 8 bits per channel, interleaved in a single plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// RGB with alpha channel first.
    ///
    /// 32 bits per pixel
    Argb,
    /// Reverse RGB with alpha channel last.
    ///
    /// 32 bits per pixel
    Bgra,
    /// Reverse RGB packed into 24 bits without padding.
    ///
    /// 24 bits per pixel
    Bgr,
    /// RGB with alpha channel last.
    ///
    /// 32 bits per pixel
    Rgba,
    /// RGB packed into 24 bits without padding.
    ///
    /// 24 bits per pixel
    Rgb,
    /// Reverse RGB with alpha channel first.
    ///
    /// 32 bits per pixel
    Abgr,
}

impl PixelFormat {
    /// Number of bytes a single pixel occupies.
    pub const fn depth(self) -> usize {
        match self {
            PixelFormat::Argb | PixelFormat::Bgra | PixelFormat::Rgba | PixelFormat::Abgr => 4,
            PixelFormat::Bgr | PixelFormat::Rgb => 3,
        }
    }

    /// Whether this format carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            PixelFormat::Argb | PixelFormat::Bgra | PixelFormat::Rgba | PixelFormat::Abgr
        )
    }

    /// Byte offsets of the red, green and blue samples within a pixel,
    /// plus the offset of the alpha sample when the format carries one.
    pub(crate) const fn channel_offsets(self) -> ([usize; 3], Option<usize>) {
        match self {
            PixelFormat::Argb => ([1, 2, 3], Some(0)),
            PixelFormat::Bgra => ([2, 1, 0], Some(3)),
            PixelFormat::Bgr => ([2, 1, 0], None),
            PixelFormat::Rgba => ([0, 1, 2], Some(3)),
            PixelFormat::Rgb => ([0, 1, 2], None),
            PixelFormat::Abgr => ([3, 2, 1], Some(0)),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PixelFormat::Argb => write!(f, "argb"),
            PixelFormat::Bgra => write!(f, "bgra"),
            PixelFormat::Bgr => write!(f, "bgr"),
            PixelFormat::Rgba => write!(f, "rgba"),
            PixelFormat::Rgb => write!(f, "rgb"),
            PixelFormat::Abgr => write!(f, "abgr"),
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = ErrorKind;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PixelFormat::Argb),
            1 => Ok(PixelFormat::Bgra),
            2 => Ok(PixelFormat::Bgr),
            3 => Ok(PixelFormat::Rgba),
            4 => Ok(PixelFormat::Rgb),
            5 => Ok(PixelFormat::Abgr),
            _ => Err(ErrorKind::InvalidFormat),
        }
    }
}
