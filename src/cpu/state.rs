/*!
state.rs - Canonical 6502 architectural state (registers, flags, run state).

Overview
========
`CpuState` is the single owner of every architecturally visible register plus
the engine's run state. It excludes:
  - Memory access (see `memory::AddressSpace`)
  - Decode / dispatch (see `cpu::table`, `cpu::dispatch`)

Accumulator Write Contract
==========================
The accumulator is private. The only way to change it is `set_a`, and every
call recomputes ZERO and NEGATIVE from the new value, whichever instruction
performed the write. Instruction helpers may set Z/N again afterwards; the
double update is part of the contract (TAX / TAY rely on `set_a(a())` to
refresh the flags).

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED
  B = BREAK (set by BRK)
  D = DECIMAL (ADC / SBC use packed BCD when set)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cpu::bits::{get_bit, set_bit};

/// Processor status flag bit masks (canonical definitions).
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Engine run state. The only transition is Running -> Halted on STP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    #[default]
    Running,
    Halted,
}

/// Registers, flags and run state of the CPU.
///
/// Power-on state is all zeroes (P = 0, SP = 0) and `Running`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CpuState {
    a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub run_state: RunState,
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Basic Accessors (Read)
    // ---------------------------------------------------------------------
    #[inline]
    pub fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    pub fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    pub fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    pub fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    pub fn status(&self) -> u8 {
        self.status
    }
    #[inline]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }
    #[inline]
    pub fn halted(&self) -> bool {
        self.run_state == RunState::Halted
    }

    // ---------------------------------------------------------------------
    // Mutators (Write)
    // ---------------------------------------------------------------------

    /// Assign the accumulator and recompute ZERO / NEGATIVE from `v`.
    #[inline]
    pub fn set_a(&mut self, v: u8) {
        self.a = v;
        self.update_zn(v);
    }
    #[inline]
    pub fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    pub fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    pub fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    pub fn set_status(&mut self, v: u8) {
        self.status = v;
    }
    #[inline]
    pub fn set_run_state(&mut self, s: RunState) {
        self.run_state = s;
    }

    /// Advance PC by `delta` with 16-bit wraparound.
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    // ---------------------------------------------------------------------
    // Flag Operations
    // ---------------------------------------------------------------------

    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    /// ZERO = (v == 0), NEGATIVE = bit 7 of `v`.
    #[inline]
    pub fn update_zn(&mut self, v: u8) {
        self.assign_flag(ZERO, v == 0);
        self.status = set_bit(self.status, 7, get_bit(v, 7));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_is_all_zero_and_running() {
        let s = CpuState::new();
        assert_eq!((s.a(), s.x(), s.y(), s.sp(), s.pc(), s.status()), (0, 0, 0, 0, 0, 0));
        assert_eq!(s.run_state(), RunState::Running);
        assert!(!s.halted());
    }

    #[test]
    fn set_a_recomputes_zero_and_negative() {
        let mut s = CpuState::new();
        s.set_a(0x00);
        assert!(s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
        s.set_a(0x80);
        assert!(!s.is_flag_set(ZERO));
        assert!(s.is_flag_set(NEGATIVE));
        s.set_a(0x7F);
        assert!(!s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn index_writes_leave_flags_alone() {
        let mut s = CpuState::new();
        s.set_x(0x00);
        s.set_y(0x80);
        s.set_sp(0xFF);
        assert_eq!(s.status(), 0);
    }

    #[test]
    fn flag_assignment() {
        let mut s = CpuState::new();
        s.assign_flag(DECIMAL, true);
        assert!(s.is_flag_set(DECIMAL));
        s.assign_flag(DECIMAL, false);
        assert!(!s.is_flag_set(DECIMAL));
        s.assign_flag(CARRY | OVERFLOW, true);
        assert_eq!(s.status(), CARRY | OVERFLOW);
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.set_pc(0xFFFF);
        s.advance_pc(1);
        assert_eq!(s.pc(), 0x0000);
        s.advance_pc(2);
        assert_eq!(s.pc(), 0x0002);
    }
}
