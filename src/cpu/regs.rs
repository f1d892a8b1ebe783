/*!
regs.rs - `CpuRegs`: the register + flag interface instruction handlers are
generic over.

The trait does NOT include:
  - Memory access
  - Stack push/pull (see `cpu::execute`)
  - Instruction fetch (see `cpu::dispatch::source`)

Handlers take `&mut AddressSpace` explicitly next to `&mut impl CpuRegs`, so
a handler never holds more than it needs and the state type stays free of
memory concerns.
*/

use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, RunState, ZERO};

/// Minimal 6502 register + flag API used by the execute and dispatch layers.
pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;
    fn run_state(&self) -> RunState;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------

    /// Assign the accumulator. Implementations MUST recompute ZERO and
    /// NEGATIVE from `v` as part of the write.
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);
    fn set_run_state(&mut self, s: RunState);

    /// Advance PC by `delta` (wrapping at 16 bits).
    fn advance_pc(&mut self, delta: u16);

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    fn is_flag_set(&self, mask: u8) -> bool;

    fn assign_flag(&mut self, mask: u8, value: bool);

    #[inline]
    fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(OVERFLOW, overflow);
    }

    /// Carry as 0 or 1, for arithmetic.
    #[inline]
    fn carry_bit(&self) -> u8 {
        u8::from(self.is_flag_set(CARRY))
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a()
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x()
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y()
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp()
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc()
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status()
    }
    #[inline]
    fn run_state(&self) -> RunState {
        self.run_state()
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.set_a(v);
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.set_x(v);
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.set_y(v);
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.set_sp(v);
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.set_pc(v);
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.set_status(v);
    }
    #[inline]
    fn set_run_state(&mut self, s: RunState) {
        self.set_run_state(s);
    }

    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        self.advance_pc(delta);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        self.is_flag_set(mask)
    }

    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        self.assign_flag(mask, value);
    }
}
