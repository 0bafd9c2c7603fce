//! CRC-32 (ISO 3309 / IEEE 802.3) as a streaming hasher.

/// CRC-32 polynomial (reflected form of 0x04C11DB7).
const POLYNOMIAL: u32 = 0xEDB88320;

const INIT: u32 = 0xFFFFFFFF;

/// Lookup table generated at compile time for the reflected polynomial.
const CRC_TABLE: [u32; 256] = generate_table();

const fn generate_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0u32;
    while i < 256 {
        let mut crc = i;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
}

/// Incremental CRC-32, fed chunk by chunk.
#[derive(Debug, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self { state: INIT }
    }

    pub fn update(&mut self, data: &[u8]) {
        let mut crc = self.state;
        for &byte in data {
            let index = ((crc ^ byte as u32) & 0xFF) as usize;
            crc = (crc >> 8) ^ CRC_TABLE[index];
        }
        self.state = crc;
    }

    pub fn finalize(&self) -> u32 {
        self.state ^ INIT
    }

    /// Big-endian lowercase hex, 8 characters.
    pub fn finalize_hex(&self) -> String {
        format!("{:08x}", self.finalize())
    }
}

/// One-shot CRC-32 of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(data);
    crc.finalize()
}
