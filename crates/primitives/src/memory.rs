//! Byte-addressable volatile memory with implicit zero-extension on touch.

use alloy_primitives::U256;

#[derive(Default, Debug, Clone)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    pub fn new() -> Self {
        Memory { data: Vec::new() }
    }

    pub fn new_with_data(data: Vec<u8>) -> Self {
        Memory { data }
    }

    /// Grow the buffer with zeros until it is at least `len` bytes long.
    fn ensure_len(&mut self, len: usize) {
        if self.data.len() < len {
            self.data.resize(len, 0);
        }
    }

    pub fn store_word(&mut self, offset: usize, word: U256) {
        self.ensure_len(offset + 32);
        self.data[offset..offset + 32].copy_from_slice(&word.to_be_bytes::<32>());
    }

    pub fn load_word(&mut self, offset: usize) -> U256 {
        self.ensure_len(offset + 32);
        U256::from_be_slice(&self.data[offset..offset + 32])
    }

    pub fn store_byte(&mut self, offset: usize, byte: u8) {
        self.ensure_len(offset + 1);
        self.data[offset] = byte;
    }

    pub fn load_byte(&mut self, offset: usize) -> u8 {
        self.ensure_len(offset + 1);
        self.data[offset]
    }

    /// Write an arbitrary-length byte slice at `offset`, zero-extending first.
    pub fn store_bytes(&mut self, offset: usize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.ensure_len(offset + bytes.len());
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
    }

    /// Read `size` bytes starting at `offset`, zero-extending first.
    pub fn load_range(&mut self, offset: usize, size: usize) -> Vec<u8> {
        if size == 0 {
            return Vec::new();
        }
        self.ensure_len(offset + size);
        self.data[offset..offset + size].to_vec()
    }

    /// MCOPY: copy `len` bytes from `src` to `dest` within this memory,
    /// zero-extending to cover both ranges first. Source and destination may overlap.
    pub fn copy_within_self(&mut self, dest: usize, src: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.ensure_len(dest.max(src) + len);
        self.data.copy_within(src..src + len, dest);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// MSIZE: current length rounded up to the next multiple of 32.
    pub fn size_words(&self) -> usize {
        (self.data.len() + 31) / 32 * 32
    }
}
