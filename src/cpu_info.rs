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
#[cfg(target_arch = "x86")]
use core::arch::x86::__cpuid;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::__cpuid;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CpuManufacturer {
    Unknown,
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Intel,
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Amd,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InstructionSet {
    Scalar,
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Sse2,
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    Avx2,
    #[cfg(target_arch = "aarch64")]
    Neon,
}

impl InstructionSet {
    /// Number of pixels a single vector instruction group processes.
    pub const fn lane_width(self) -> usize {
        match self {
            InstructionSet::Scalar => 1,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            InstructionSet::Sse2 => 4,
            #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
            InstructionSet::Avx2 => 8,
            #[cfg(target_arch = "aarch64")]
            InstructionSet::Neon => 16,
        }
    }

    pub const fn has_vector_support(self) -> bool {
        !matches!(self, InstructionSet::Scalar)
    }
}

/// Describes the vector capability detected for the running process.
///
/// The descriptor is computed exactly once per process and is immutable for
/// the process lifetime; re-detection requires a process restart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapabilityDescriptor {
    vector_support: bool,
    lane_width: usize,
}

impl CapabilityDescriptor {
    pub(crate) const fn from_instruction_set(set: InstructionSet) -> Self {
        CapabilityDescriptor {
            vector_support: set.has_vector_support(),
            lane_width: set.lane_width(),
        }
    }

    /// Whether a vector kernel set is available on this host.
    pub const fn vector_support(&self) -> bool {
        self.vector_support
    }

    /// Number of pixels processed by one vector instruction group.
    ///
    /// Reports 1 when no vector support is available.
    pub const fn lane_width(&self) -> usize {
        self.lane_width
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const fn four_cc(a: u8, b: u8, c: u8, d: u8) -> u32 {
    ((d as u32) << 24) | ((c as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn cpuid(functionnumber: u32, output: &mut [u32; 4]) {
    unsafe {
        let result = __cpuid(functionnumber);
        output[0] = result.eax;
        output[1] = result.ebx;
        output[2] = result.ecx;
        output[3] = result.edx;
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn compare_cpu_manufacturer(features: &[u32; 4], name: &[u8; 12]) -> u32 {
    features[1].wrapping_sub(four_cc(name[0], name[1], name[2], name[3]))
        | features[3].wrapping_sub(four_cc(name[4], name[5], name[6], name[7]))
        | features[2].wrapping_sub(four_cc(name[8], name[9], name[10], name[11]))
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub fn get() -> (CpuManufacturer, InstructionSet) {
    let mut manufacturer = CpuManufacturer::Unknown;
    let mut set = InstructionSet::Scalar;

    let features = &mut [0; 4];
    cpuid(0, features);

    // A zero maximum leaf means the probe gave nothing usable; stay scalar.
    let max_leaf = features[0];
    if max_leaf != 0 {
        if compare_cpu_manufacturer(features, b"GenuineIntel") == 0 {
            manufacturer = CpuManufacturer::Intel;
        } else if (compare_cpu_manufacturer(features, b"AuthenticAMD") == 0)
            | (compare_cpu_manufacturer(features, b"AMDisbetter!") == 0)
        {
            manufacturer = CpuManufacturer::Amd;
        }

        // This ensures we always use hardware intrinsics and we do not use
        // software emulation. See https://en.wikipedia.org/wiki/CPUID
        cpuid(1, features);
        if (features[3] & (1 << 26)) != 0 {
            set = InstructionSet::Sse2;

            if max_leaf >= 7 {
                cpuid(7, features);
                if (features[1] & (1 << 5)) != 0 {
                    set = InstructionSet::Avx2;
                }
            }
        }
    }

    (manufacturer, set)
}

#[cfg(target_arch = "aarch64")]
pub fn get() -> (CpuManufacturer, InstructionSet) {
    (CpuManufacturer::Unknown, InstructionSet::Neon)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
pub fn get() -> (CpuManufacturer, InstructionSet) {
    (CpuManufacturer::Unknown, InstructionSet::Scalar)
}
