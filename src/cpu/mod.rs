/*!
cpu::mod - Public facade for the 6502 CPU core.

```text
    bits.rs         - Byte-level bit get / set / flip helpers.
    state.rs        - Registers, flag masks, run state (A-write contract).
    regs.rs         - `CpuRegs` trait the execute / dispatch layers use.
    table.rs        - Opcode -> (mnemonic, addressing mode) decode tables.
    addressing.rs   - Addressing modes and effective-address resolution.
    execute.rs      - Instruction semantic helpers (ALU, stack, shifts).
    dispatch/       - Single-step orchestration and family handlers.
    core/           - `Cpu` facade (step / run / execute).
```

Usage:
```rust
use nescpu::{AddressSpace, Cpu};

let mut mem = AddressSpace::new();
let mut cpu = Cpu::new();
cpu.run_program(&mut mem, &[0xA9, 0x01, 0x02]).unwrap();
assert_eq!(cpu.a(), 0x01);
```
*/

pub mod addressing;
pub mod bits;
pub mod core;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod regs;
pub mod state;
pub mod table;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests, snapshots, trait impls)
// - Flag constants (canonical bit masks)
pub use crate::cpu::addressing::{AddressingMode, Operand};
pub use crate::cpu::core::Cpu;
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, RunState, UNUSED, ZERO,
};
pub use crate::cpu::table::{Instruction, Mnemonic};
