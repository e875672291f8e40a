//! Fixed-offset readers for VAA payload bodies.
//!
//! Callers check the body length up front, so every read here is in bounds.

pub trait ByteUtils {
    fn get_u8(&self, index: usize) -> u8;
    fn get_u16(&self, index: usize) -> u16;
    fn get_const_bytes<const N: usize>(&self, index: usize) -> [u8; N];
}

impl ByteUtils for &[u8] {
    fn get_u8(&self, index: usize) -> u8 {
        self[index]
    }

    fn get_u16(&self, index: usize) -> u16 {
        u16::from_be_bytes(self.get_const_bytes(index))
    }

    fn get_const_bytes<const N: usize>(&self, index: usize) -> [u8; N] {
        let mut bytes: [u8; N] = [0; N];
        bytes.copy_from_slice(&self[index..index + N]);
        bytes
    }
}

/// Decodes a NUL-padded string field. Padding is stripped from both ends and invalid UTF-8
/// sequences are replaced.
pub fn get_string_from_32(v: &[u8; 32]) -> String {
    let trimmed = trim_nul(v);
    String::from_utf8_lossy(trimmed).into_owned()
}

pub fn trim_nul(v: &[u8]) -> &[u8] {
    let start = v.iter().position(|&b| b != 0).unwrap_or(v.len());
    let end = v.iter().rposition(|&b| b != 0).map_or(start, |i| i + 1);
    &v[start..end]
}

/// Turn a string into a fixed length array, padded with \0s on the right. Longer strings are
/// truncated.
#[cfg(test)]
pub fn string_to_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    let len = usize::min(N, bytes.len());
    let mut result = [0u8; N];
    result[..len].copy_from_slice(&bytes[..len]);
    result
}
