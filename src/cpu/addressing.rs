/*!
addressing.rs - 6502 addressing modes and effective-address resolution.

Overview
========
Given an addressing mode, the raw instruction bytes (opcode first) and the
current registers, `resolve` produces an `Operand`:
- `Address(ea)`  - a 16-bit location the executor reads and/or writes
- `Literal(v)`   - the operand is the byte itself (Immediate)
- `Implied`      - no operand (implied / accumulator forms)

Byte Order
==========
Two-byte operands are taken high byte first: `operand[1] << 8 | operand[2]`.
This applies to Absolute, the indexed Absolute forms and the Indirect pointer.
Zero-page pointers read from memory are little-endian (low byte at the lower
address).

Relative
========
The branch target is `PC + (operand[1] as i8)` with PC still pointing at the
branch opcode. The engine combines it with the instruction length (see
`dispatch::branches`).

Caller Assumptions
==================
- Resolution never mutates CPU state or memory.
- All arithmetic wraps: zero-page indexing stays inside page 0, 16-bit
  indexing wraps at $FFFF.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::IndirectJump;
use crate::cpu::regs::CpuRegs;
use crate::memory::AddressSpace;

/// Addressing modes known to the decode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddressingMode {
    /// Implied or accumulator form.
    Implied,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    Immediate,
    /// `(zp,X)`
    IndexedIndirect,
    /// `(zp),Y`
    IndirectIndexed,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

/// Operand byte count for each mode (the opcode byte is not included).
pub const fn operand_len(mode: AddressingMode) -> u16 {
    match mode {
        AddressingMode::Implied => 0,
        AddressingMode::Absolute
        | AddressingMode::AbsoluteX
        | AddressingMode::AbsoluteY
        | AddressingMode::Indirect => 2,
        AddressingMode::Relative
        | AddressingMode::Immediate
        | AddressingMode::IndexedIndirect
        | AddressingMode::IndirectIndexed
        | AddressingMode::ZeroPage
        | AddressingMode::ZeroPageX
        | AddressingMode::ZeroPageY => 1,
    }
}

/// Result of resolving an instruction's addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Address(u16),
    Literal(u8),
    Implied,
}

impl Operand {
    /// Effective address, if the operand names a memory location.
    #[inline]
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Address(a) => Some(a),
            _ => None,
        }
    }

    /// Load the operand value: the literal itself, or the byte at the
    /// effective address. Implied operands load as 0.
    #[inline]
    pub fn load(self, mem: &AddressSpace) -> u8 {
        match self {
            Operand::Address(a) => mem.read(a),
            Operand::Literal(v) => v,
            Operand::Implied => 0,
        }
    }
}

/// Resolve `mode` for the instruction whose bytes are `bytes` (opcode at
/// index 0), using the current X / Y / PC of `cpu`.
pub fn resolve<C: CpuRegs>(
    mode: AddressingMode,
    bytes: &[u8; 3],
    cpu: &C,
    mem: &AddressSpace,
    indirect_jump: IndirectJump,
) -> Operand {
    let op1 = bytes[1];
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Immediate => Operand::Literal(op1),
        AddressingMode::Absolute => Operand::Address(word_operand(bytes)),
        AddressingMode::AbsoluteX => {
            Operand::Address(word_operand(bytes).wrapping_add(cpu.x() as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(word_operand(bytes).wrapping_add(cpu.y() as u16))
        }
        AddressingMode::ZeroPage => Operand::Address(op1 as u16),
        AddressingMode::ZeroPageX => Operand::Address(op1.wrapping_add(cpu.x()) as u16),
        AddressingMode::ZeroPageY => Operand::Address(op1.wrapping_add(cpu.y()) as u16),
        AddressingMode::IndexedIndirect => {
            Operand::Address(read_word_zp(mem, op1.wrapping_add(cpu.x())))
        }
        AddressingMode::IndirectIndexed => {
            Operand::Address(read_word_zp(mem, op1).wrapping_add(cpu.y() as u16))
        }
        AddressingMode::Indirect => {
            let ptr = word_operand(bytes);
            let target = match indirect_jump {
                IndirectJump::Linear => read_word(mem, ptr),
                IndirectJump::PageWrap => read_word_indirect_bug(mem, ptr),
            };
            Operand::Address(target)
        }
        AddressingMode::Relative => {
            Operand::Address(cpu.pc().wrapping_add(op1 as i8 as u16))
        }
    }
}

/// Two-byte operand, high byte first.
#[inline]
fn word_operand(bytes: &[u8; 3]) -> u16 {
    ((bytes[1] as u16) << 8) | bytes[2] as u16
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Little-endian word at `addr`, high byte at `addr + 1` (wrapping at $FFFF).
#[inline]
pub(crate) fn read_word(mem: &AddressSpace, addr: u16) -> u16 {
    let lo = mem.read(addr) as u16;
    let hi = mem.read(addr.wrapping_add(1)) as u16;
    (hi << 8) | lo
}

/// Read a 16-bit little endian pointer from zero page; both bytes wrap
/// independently inside page 0.
#[inline]
pub(crate) fn read_word_zp(mem: &AddressSpace, base: u8) -> u16 {
    let lo = mem.read(base as u16) as u16;
    let hi = mem.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// NMOS `JMP (ind)` defect: when the pointer low byte is $FF the high byte
/// comes from the start of the same page.
#[inline]
pub(crate) fn read_word_indirect_bug(mem: &AddressSpace, addr: u16) -> u16 {
    let lo = mem.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = mem.read(hi_addr) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;

    fn setup(x: u8, y: u8, pc: u16) -> (CpuState, AddressSpace) {
        let mut cpu = CpuState::new();
        cpu.set_x(x);
        cpu.set_y(y);
        cpu.set_pc(pc);
        (cpu, AddressSpace::new())
    }

    fn at(mode: AddressingMode, b1: u8, b2: u8, cpu: &CpuState, mem: &AddressSpace) -> Operand {
        resolve(mode, &[0x00, b1, b2], cpu, mem, IndirectJump::Linear)
    }

    #[test]
    fn operand_lengths() {
        assert_eq!(operand_len(AddressingMode::Implied), 0);
        assert_eq!(operand_len(AddressingMode::Immediate), 1);
        assert_eq!(operand_len(AddressingMode::Relative), 1);
        assert_eq!(operand_len(AddressingMode::ZeroPageY), 1);
        assert_eq!(operand_len(AddressingMode::IndirectIndexed), 1);
        assert_eq!(operand_len(AddressingMode::Absolute), 2);
        assert_eq!(operand_len(AddressingMode::Indirect), 2);
    }

    #[test]
    fn absolute_is_high_byte_first() {
        let (cpu, mem) = setup(0x10, 0x20, 0);
        assert_eq!(
            at(AddressingMode::Absolute, 0x12, 0x34, &cpu, &mem),
            Operand::Address(0x1234)
        );
        assert_eq!(
            at(AddressingMode::AbsoluteX, 0x12, 0x34, &cpu, &mem),
            Operand::Address(0x1244)
        );
        assert_eq!(
            at(AddressingMode::AbsoluteY, 0xFF, 0xF0, &cpu, &mem),
            Operand::Address(0x0010)
        );
    }

    #[test]
    fn immediate_is_literal_and_implied_has_no_address() {
        let (cpu, mem) = setup(0, 0, 0);
        let imm = at(AddressingMode::Immediate, 0x42, 0, &cpu, &mem);
        assert_eq!(imm, Operand::Literal(0x42));
        assert_eq!(imm.address(), None);
        assert_eq!(imm.load(&mem), 0x42);
        assert_eq!(at(AddressingMode::Implied, 1, 2, &cpu, &mem), Operand::Implied);
    }

    #[test]
    fn zero_page_indexing_wraps_in_page_zero() {
        let (cpu, mem) = setup(0x20, 0x02, 0);
        assert_eq!(at(AddressingMode::ZeroPage, 0xF0, 0, &cpu, &mem), Operand::Address(0xF0));
        assert_eq!(at(AddressingMode::ZeroPageX, 0xF0, 0, &cpu, &mem), Operand::Address(0x10));
        assert_eq!(at(AddressingMode::ZeroPageY, 0xFF, 0, &cpu, &mem), Operand::Address(0x01));
    }

    #[test]
    fn indexed_indirect_wraps_each_pointer_byte() {
        let (cpu, mut mem) = setup(0x0F, 0, 0);
        // (0xF0 + 0x0F) = 0xFF -> low at $FF, high at $00
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(
            at(AddressingMode::IndexedIndirect, 0xF0, 0, &cpu, &mem),
            Operand::Address(0x1234)
        );
    }

    #[test]
    fn indirect_indexed_adds_y_after_pointer() {
        let (cpu, mut mem) = setup(0, 0x05, 0);
        mem.write(0x00FF, 0xFE);
        mem.write(0x0000, 0x40);
        assert_eq!(
            at(AddressingMode::IndirectIndexed, 0xFF, 0, &cpu, &mem),
            Operand::Address(0x4103)
        );
    }

    #[test]
    fn indirect_linear_vs_page_wrap() {
        let (cpu, mut mem) = setup(0, 0, 0);
        mem.write(0x40FF, 0x34);
        mem.write(0x4100, 0x12);
        mem.write(0x4000, 0x56);
        let bytes = [0x6C, 0x40, 0xFF];
        assert_eq!(
            resolve(AddressingMode::Indirect, &bytes, &cpu, &mem, IndirectJump::Linear),
            Operand::Address(0x1234)
        );
        assert_eq!(
            resolve(AddressingMode::Indirect, &bytes, &cpu, &mem, IndirectJump::PageWrap),
            Operand::Address(0x5634)
        );
    }

    #[test]
    fn relative_is_signed_from_opcode_address() {
        let (cpu, mem) = setup(0, 0, 0x0010);
        assert_eq!(at(AddressingMode::Relative, 0xFE, 0, &cpu, &mem), Operand::Address(0x000E));
        assert_eq!(at(AddressingMode::Relative, 0x05, 0, &cpu, &mem), Operand::Address(0x0015));
        let (cpu, mem) = setup(0, 0, 0x0001);
        assert_eq!(at(AddressingMode::Relative, 0x80, 0, &cpu, &mem), Operand::Address(0xFF81));
    }
}
