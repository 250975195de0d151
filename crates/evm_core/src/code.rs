//! Immutable view over the program bytes: indexed reads for PUSH immediates
//! and JUMPDEST validation.

use crate::opcodes::{push_len, Opcode};

#[derive(Debug, Clone, Copy)]
pub struct Code<'a> {
    bytes: &'a [u8],
}

impl<'a> Code<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Code { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, pc: usize) -> Option<u8> {
        self.bytes.get(pc).copied()
    }

    /// Read `len` bytes starting at `offset`, zero-padding past the end of code.
    /// Used both for PUSH immediates and CODECOPY.
    pub fn read_padded(&self, offset: usize, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        if offset >= self.bytes.len() {
            return out;
        }
        let available = (self.bytes.len() - offset).min(len);
        out[..available].copy_from_slice(&self.bytes[offset..offset + available]);
        out
    }

    /// A jump target `t` is valid iff `code[t] == JUMPDEST` and `t` does not
    /// fall inside a PUSH immediate, per spec.md section 4.3: scan back up to
    /// 32 bytes and reject if `code[t-i] == PUSH0+i` for any `i` in `1..=32`.
    pub fn is_valid_jumpdest(&self, t: usize) -> bool {
        if t >= self.bytes.len() || self.bytes[t] != Opcode::JUMPDEST as u8 {
            return false;
        }
        for i in 1..=32usize {
            if i > t {
                break;
            }
            let candidate = self.bytes[t - i];
            if push_len(candidate) == Some(i as u8) {
                return false;
            }
        }
        true
    }
}
