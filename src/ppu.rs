/*!
PPU stub exposing the CPU-visible register window ($2000..$2007).

Scope:
- Holds a latched copy of the eight PPU registers as last committed by the
  CPU. `sync` refreshes the latch from any `PpuBus`; the composition object
  calls it only between instructions, so a partially executed instruction
  is never observed.
- No rendering, timing, VRAM or OAM. Register semantics beyond "the value the
  CPU last stored" are not modeled.
*/

use crate::ppu_bus::{PPU_REGISTER_BASE, PpuBus};

/// The eight CPU-visible PPU registers, in address order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpuRegister {
    Ctrl,
    Mask,
    Status,
    OamAddr,
    OamData,
    Scroll,
    Addr,
    Data,
}

impl PpuRegister {
    pub const ALL: [PpuRegister; 8] = [
        PpuRegister::Ctrl,
        PpuRegister::Mask,
        PpuRegister::Status,
        PpuRegister::OamAddr,
        PpuRegister::OamData,
        PpuRegister::Scroll,
        PpuRegister::Addr,
        PpuRegister::Data,
    ];

    /// Canonical CPU address ($2000-$2007).
    #[inline]
    pub const fn address(self) -> u16 {
        PPU_REGISTER_BASE + self as u16
    }

    /// Register selected by any address in the mirrored window.
    #[inline]
    pub const fn from_address(addr: u16) -> Self {
        Self::ALL[(addr & 0x7) as usize]
    }
}

#[derive(Clone, Debug, Default)]
pub struct Ppu {
    latched: [u8; 8],
    syncs: u64,
}

impl Ppu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the register window from `bus`.
    pub fn sync<B: PpuBus + ?Sized>(&mut self, bus: &B) {
        for reg in PpuRegister::ALL {
            self.latched[reg as usize] = bus.ppu_read(reg.address());
        }
        self.syncs += 1;
    }

    /// Value of `reg` as of the last `sync`.
    #[inline]
    pub fn register(&self, reg: PpuRegister) -> u8 {
        self.latched[reg as usize]
    }

    pub fn ctrl(&self) -> u8 {
        self.register(PpuRegister::Ctrl)
    }

    pub fn mask(&self) -> u8 {
        self.register(PpuRegister::Mask)
    }

    /// Number of times the latch has been refreshed.
    pub fn syncs(&self) -> u64 {
        self.syncs
    }
}
