/*!
memory.rs - CPU-visible 16-bit address space with NES mirroring.

Logical map and backing layout:

| Logical range   | Physical block        | Rule                           |
|-----------------|-----------------------|--------------------------------|
| $0000-$1FFF     | RAM, 2048 bytes       | mirrored every 2 KiB           |
| $2000-$3FFF     | PPU window, 8 bytes   | mirrored every 8 bytes         |
| $4000-$4017     | APU / IO, 24 bytes    | direct                         |
| $4018-$401F     | disabled, 8 bytes     | direct                         |
| $4020-$FFFF     | cartridge space       | direct                         |

The store is only as large as the distinct cells (51208 bytes). Every access
goes through `physical_index`, so a write through any mirror is visible from
every other address in the same mirror group.
*/

use crate::error::{CpuError, Result};

pub const RAM_SIZE: usize = 0x0800;
pub const PPU_WINDOW_SIZE: usize = 8;
pub const IO_SIZE: usize = 0x18;
pub const DISABLED_SIZE: usize = 8;
pub const CARTRIDGE_SIZE: usize = 0x1_0000 - 0x4020;

const PPU_BASE: usize = RAM_SIZE;
const IO_BASE: usize = PPU_BASE + PPU_WINDOW_SIZE;
const DISABLED_BASE: usize = IO_BASE + IO_SIZE;
const CARTRIDGE_BASE: usize = DISABLED_BASE + DISABLED_SIZE;

/// Total number of physical cells behind the 64 KiB logical space.
pub const PHYSICAL_SIZE: usize = CARTRIDGE_BASE + CARTRIDGE_SIZE;

/// Number of logical addresses (the largest loadable program).
pub const LOGICAL_SIZE: usize = 0x1_0000;

/// The shared CPU address space.
#[derive(Clone)]
pub struct AddressSpace {
    cells: Box<[u8]>,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AddressSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressSpace")
            .field("physical_size", &self.cells.len())
            .finish()
    }
}

impl AddressSpace {
    /// Create an empty (zero-filled) address space.
    pub fn new() -> Self {
        Self {
            cells: vec![0; PHYSICAL_SIZE].into_boxed_slice(),
        }
    }

    /// Create an address space pre-loaded with `program` starting at $0000.
    pub fn from_program(program: &[u8]) -> Result<Self> {
        let mut space = Self::new();
        space.load(program)?;
        Ok(space)
    }

    /// Write `program` byte by byte starting at $0000.
    ///
    /// Bytes go through `write`, so a program longer than 2 KiB folds back
    /// onto the RAM mirrors exactly as a CPU store sequence would.
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > LOGICAL_SIZE {
            return Err(CpuError::ProgramTooLarge { len: program.len() });
        }
        for (addr, &byte) in program.iter().enumerate() {
            self.write(addr as u16, byte);
        }
        log::debug!("loaded {} program bytes at $0000", program.len());
        Ok(())
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.cells[Self::physical_index(addr)]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.cells[Self::physical_index(addr)] = value;
    }

    /// Clear every cell to 0.
    pub fn reset(&mut self) {
        self.cells.fill(0);
    }

    /// Backing store (read-only), for diagnostics and hashing.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    /// Map a logical address onto its physical cell.
    #[inline]
    pub fn physical_index(addr: u16) -> usize {
        let a = addr as usize;
        match addr {
            0x0000..=0x1FFF => a & (RAM_SIZE - 1),
            0x2000..=0x3FFF => PPU_BASE + (a & (PPU_WINDOW_SIZE - 1)),
            0x4000..=0x4017 => IO_BASE + (a - 0x4000),
            0x4018..=0x401F => DISABLED_BASE + (a - 0x4018),
            0x4020..=0xFFFF => CARTRIDGE_BASE + (a - 0x4020),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_every_cell_once() {
        assert_eq!(PHYSICAL_SIZE, 51208);
        assert_eq!(AddressSpace::physical_index(0x0000), 0);
        assert_eq!(AddressSpace::physical_index(0x07FF), 0x07FF);
        assert_eq!(AddressSpace::physical_index(0x2000), 2048);
        assert_eq!(AddressSpace::physical_index(0x4000), 2056);
        assert_eq!(AddressSpace::physical_index(0x4018), 2080);
        assert_eq!(AddressSpace::physical_index(0x4020), 2088);
        assert_eq!(AddressSpace::physical_index(0xFFFF), PHYSICAL_SIZE - 1);
    }

    #[test]
    fn ram_mirrors() {
        let mut mem = AddressSpace::new();
        mem.write(0x0000, 200);
        mem.write(0x0014, 87);
        for base in [0x0000u16, 0x0800, 0x1000, 0x1800] {
            assert_eq!(mem.read(base), 200);
            assert_eq!(mem.read(base + 0x14), 87);
        }

        // Overwrite through a mirror; all views follow.
        mem.write(0x1814, 0x55);
        assert_eq!(mem.read(0x0014), 0x55);
        assert_eq!(mem.read(0x0814), 0x55);
    }

    #[test]
    fn ppu_window_mirrors_every_eight_bytes() {
        let mut mem = AddressSpace::new();
        mem.write(0x2000, 45);
        let mut addr = 0x2008u16;
        while addr < 0x4000 {
            assert_eq!(mem.read(addr), 45, "mirror at {addr:#06X}");
            addr += 8;
        }
        mem.write(0x3FFF, 0x77);
        assert_eq!(mem.read(0x2007), 0x77);
    }

    #[test]
    fn io_disabled_and_cartridge_are_distinct() {
        let mut mem = AddressSpace::new();
        mem.write(0x4000, 1);
        mem.write(0x4017, 2);
        mem.write(0x4018, 3);
        mem.write(0x401F, 4);
        mem.write(0x4020, 5);
        mem.write(0xFFFF, 6);
        assert_eq!(
            [
                mem.read(0x4000),
                mem.read(0x4017),
                mem.read(0x4018),
                mem.read(0x401F),
                mem.read(0x4020),
                mem.read(0xFFFF)
            ],
            [1, 2, 3, 4, 5, 6]
        );
        // None of those writes leaked into RAM or the PPU window.
        assert!(mem.as_slice()[..2056].iter().all(|&b| b == 0));
    }

    #[test]
    fn load_places_program_at_zero() {
        let mem = AddressSpace::from_program(&[0xA9, 0x3C, 0x02]).unwrap();
        assert_eq!(mem.read(0x0000), 0xA9);
        assert_eq!(mem.read(0x0801), 0x3C);
        assert_eq!(mem.read(0x0002), 0x02);
    }

    #[test]
    fn load_rejects_oversized_program() {
        let big = vec![0u8; LOGICAL_SIZE + 1];
        assert!(matches!(
            AddressSpace::from_program(&big),
            Err(CpuError::ProgramTooLarge { len }) if len == LOGICAL_SIZE + 1
        ));
    }
}
