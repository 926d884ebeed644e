// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A table-driven CRC-32 (ISO-HDLC) implementation, as required for the CRC-32 field of ZIP records.
//!
//! # Example
//! ```
//! assert_eq!(stored_zip::crc::compute(b"123456789"), 0xCBF43926);
//!
//! let mut hasher = stored_zip::crc::Hasher::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF43926);
//! ```

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#447
const POLYNOMIAL: u32 = 0xEDB88320;
const INITIAL: u32 = 0xFFFFFFFF;

static TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut index = 0;

    while index < 256 {
        let mut value = index as u32;
        let mut round = 0;

        while round < 8 {
            value = if value & 1 != 0 { (value >> 1) ^ POLYNOMIAL } else { value >> 1 };
            round += 1;
        }

        table[index] = value;
        index += 1;
    }

    table
}

/// An incremental CRC-32 hasher.
///
/// Feeding a payload in several pieces produces the same value as [`compute()`] over the whole payload.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    state: u32,
}

impl Hasher {
    /// Constructs a new hasher with an initial register.
    pub fn new() -> Self {
        Self { state: INITIAL }
    }

    /// Processes the given bytes, one byte per step, least significant bit first.
    pub fn update(&mut self, data: &[u8]) {
        let mut state = self.state;

        for byte in data {
            state = TABLE[((state ^ *byte as u32) & 0xFF) as usize] ^ (state >> 8);
        }

        self.state = state;
    }

    /// Consumes the hasher and returns the final checksum.
    pub fn finalize(self) -> u32 {
        self.state ^ INITIAL
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the CRC-32 checksum of a whole byte slice.
pub fn compute(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
