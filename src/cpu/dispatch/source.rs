/*!
source.rs - Where the bytes of the next instruction come from.

Both entry points (continuous run over memory, single pre-fetched buffer)
produce the same `[opcode, operand1, operand2]` triple and then share one
decode/resolve/execute path. Unused trailing bytes are ignored by the
resolver.
*/

use crate::memory::AddressSpace;

pub(crate) trait InstructionSource {
    /// Instruction bytes for the instruction at `pc`.
    fn fetch(&self, pc: u16, mem: &AddressSpace) -> [u8; 3];
}

/// Fetch from the address space at PC (wrapping at $FFFF).
pub(crate) struct MemoryFetch;

impl InstructionSource for MemoryFetch {
    #[inline]
    fn fetch(&self, pc: u16, mem: &AddressSpace) -> [u8; 3] {
        [
            mem.read(pc),
            mem.read(pc.wrapping_add(1)),
            mem.read(pc.wrapping_add(2)),
        ]
    }
}

/// A caller-supplied instruction; missing operand bytes read as zero.
pub(crate) struct BufferFetch<'a>(pub(crate) &'a [u8]);

impl InstructionSource for BufferFetch<'_> {
    #[inline]
    fn fetch(&self, _pc: u16, _mem: &AddressSpace) -> [u8; 3] {
        let mut bytes = [0u8; 3];
        for (dst, src) in bytes.iter_mut().zip(self.0) {
            *dst = *src;
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fetch_wraps_at_top() {
        let mut mem = AddressSpace::new();
        mem.write(0xFFFF, 0xA9);
        mem.write(0x0000, 0x01);
        mem.write(0x0001, 0x02);
        assert_eq!(MemoryFetch.fetch(0xFFFF, &mem), [0xA9, 0x01, 0x02]);
    }

    #[test]
    fn buffer_fetch_pads_and_truncates() {
        let mem = AddressSpace::new();
        assert_eq!(BufferFetch(&[0xE8]).fetch(0, &mem), [0xE8, 0, 0]);
        assert_eq!(
            BufferFetch(&[0x8D, 0x12, 0x34, 0xFF]).fetch(0, &mem),
            [0x8D, 0x12, 0x34]
        );
    }
}
