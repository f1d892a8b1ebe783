#![doc = r#"
nescpu library crate.

A 6502 (NES variant) CPU core over a mirrored 16-bit address space.

Modules:
- config: behavior switches (index compares, indirect JMP, undocumented opcodes)
- cpu: 6502 CPU core (facade + state + decode tables + dispatch + execute modules)
- error: `CpuError` and the crate `Result` alias
- memory: the CPU-visible address space with RAM and PPU-window mirroring
- nes: composition object wiring CPU, PPU stub and memory together
- ppu: PPU stub latching the CPU-visible register window
- ppu_bus: Trait abstraction for PPU register reads (decouples PPU from memory)

In tests, shared setup helpers are available under `crate::test_utils`.
"#]

pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod nes;
pub mod ppu;
pub mod ppu_bus;

// Re-export commonly used types at the crate root for convenience.
pub use config::{CpuConfig, IndexCompare, IndirectJump};
pub use cpu::core::Cpu;
pub use cpu::state::{CpuState, RunState};
pub use cpu::table::{Instruction, Mnemonic};
pub use error::{CpuError, Result};
pub use memory::AddressSpace;
pub use nes::Nes;
pub use ppu::Ppu;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
