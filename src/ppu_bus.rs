/*!
ppu_bus: Trait abstraction decoupling the PPU stub from the concrete
`AddressSpace`.

Rationale:
- The PPU only needs read access to its CPU-visible register window.
- Accepting a trait instead of a concrete `AddressSpace` keeps the PPU
  testable with lightweight mocks and lets the composition object hand out
  an immutable borrow between CPU steps.

Address Space Expectations (mirroring left to the implementor):
- 0x2000-0x2007 : PPU registers
- 0x2008-0x3FFF : Mirrors of 0x2000-0x2007 every 8 bytes

The trait exposes ONLY a read method. The CPU writes the registers through
the address space; the PPU observes the committed values.
*/

use crate::memory::AddressSpace;

/// First CPU address of the PPU register window.
pub const PPU_REGISTER_BASE: u16 = 0x2000;

/// Minimal interface the PPU depends on for register reads.
pub trait PpuBus {
    /// Read a byte from the CPU-visible PPU register range with mirroring
    /// applied. Callers may pass any address in 0x2000-0x3FFF.
    fn ppu_read(&self, addr: u16) -> u8;
}

impl PpuBus for AddressSpace {
    #[inline]
    fn ppu_read(&self, addr: u16) -> u8 {
        self.read(addr)
    }
}
