/*!
table.rs - Opcode decode tables (mnemonic + addressing mode per opcode).

Overview
========
Two 256-entry constant arrays indexed by opcode byte:
- `MNEMONICS` gives the operation name
- `MODES` gives the addressing mode

`Instruction::decode` combines both and is the only lookup the engine uses.
Every byte decodes to something; whether the engine can execute it is a
separate question answered by `dispatch`.

Undocumented Entries
====================
The table carries the NMOS undocumented names (SLO, RLA, SRE, RRA, SAX, LAX,
DCP, ISC, ANC, ALR, ARR, XAA, AHX, TAS, SHY, SHX, LAS, AXS) and STP for the
jam opcodes so that traces and errors can name them.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cpu::addressing::{AddressingMode, operand_len};

/// Instruction mnemonics, documented and undocumented.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    // Halts the engine.
    STP,
    // Undocumented
    SLO, RLA, SRE, RRA, SAX, LAX, DCP, ISC, ANC, ALR, ARR, XAA, AHX, TAS,
    SHY, SHX, LAS, AXS,
}

impl Mnemonic {
    /// True for opcodes outside the official NMOS instruction set.
    pub const fn is_undocumented(self) -> bool {
        use Mnemonic::*;
        matches!(
            self,
            SLO | RLA | SRE | RRA | SAX | LAX | DCP | ISC | ANC | ALR | ARR | XAA | AHX | TAS
                | SHY | SHX | LAS | AXS
        )
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// A decoded opcode: what it is and how its operand is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
}

impl Instruction {
    #[inline]
    pub const fn decode(opcode: u8) -> Self {
        Self {
            opcode,
            mnemonic: MNEMONICS[opcode as usize],
            mode: MODES[opcode as usize],
        }
    }

    /// Encoded size in bytes (opcode + operand).
    #[inline]
    pub const fn len(&self) -> u16 {
        1 + operand_len(self.mode)
    }
}

use Mnemonic::*;

#[rustfmt::skip]
pub const MNEMONICS: [Mnemonic; 256] = [
//  x0   x1   x2   x3   x4   x5   x6   x7   x8   x9   xA   xB   xC   xD   xE   xF
    BRK, ORA, STP, SLO, NOP, ORA, ASL, SLO, PHP, ORA, ASL, ANC, NOP, ORA, ASL, SLO, // 0x
    BPL, ORA, STP, SLO, NOP, ORA, ASL, SLO, CLC, ORA, NOP, SLO, NOP, ORA, ASL, SLO, // 1x
    JSR, AND, STP, RLA, BIT, AND, ROL, RLA, PLP, AND, ROL, ANC, BIT, AND, ROL, RLA, // 2x
    BMI, AND, STP, RLA, NOP, AND, ROL, RLA, SEC, AND, NOP, RLA, NOP, AND, ROL, RLA, // 3x
    RTI, EOR, STP, SRE, NOP, EOR, LSR, SRE, PHA, EOR, LSR, ALR, JMP, EOR, LSR, SRE, // 4x
    BVC, EOR, STP, SRE, NOP, EOR, LSR, SRE, CLI, EOR, NOP, SRE, NOP, EOR, LSR, SRE, // 5x
    RTS, ADC, STP, RRA, NOP, ADC, ROR, RRA, PLA, ADC, ROR, ARR, JMP, ADC, ROR, RRA, // 6x
    BVS, ADC, STP, RRA, NOP, ADC, ROR, RRA, SEI, ADC, NOP, RRA, NOP, ADC, ROR, RRA, // 7x
    NOP, STA, NOP, SAX, STY, STA, STX, SAX, DEY, NOP, TXA, XAA, STY, STA, STX, SAX, // 8x
    BCC, STA, STP, AHX, STY, STA, STX, SAX, TYA, STA, TXS, TAS, SHY, STA, SHX, AHX, // 9x
    LDY, LDA, LDX, LAX, LDY, LDA, LDX, LAX, TAY, LDA, TAX, LAX, LDY, LDA, LDX, LAX, // Ax
    BCS, LDA, STP, LAX, LDY, LDA, LDX, LAX, CLV, LDA, TSX, LAS, LDY, LDA, LDX, LAX, // Bx
    CPY, CMP, NOP, DCP, CPY, CMP, DEC, DCP, INY, CMP, DEX, AXS, CPY, CMP, DEC, DCP, // Cx
    BNE, CMP, STP, DCP, NOP, CMP, DEC, DCP, CLD, CMP, NOP, DCP, NOP, CMP, DEC, DCP, // Dx
    CPX, SBC, NOP, ISC, CPX, SBC, INC, ISC, INX, SBC, NOP, SBC, CPX, SBC, INC, ISC, // Ex
    BEQ, SBC, STP, ISC, NOP, SBC, INC, ISC, SED, SBC, NOP, ISC, NOP, SBC, INC, ISC, // Fx
];

const IMP: AddressingMode = AddressingMode::Implied;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const IMM: AddressingMode = AddressingMode::Immediate;
const IZX: AddressingMode = AddressingMode::IndexedIndirect;
const IZY: AddressingMode = AddressingMode::IndirectIndexed;
const ZP0: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;

#[rustfmt::skip]
pub const MODES: [AddressingMode; 256] = [
//  x0   x1   x2   x3   x4   x5   x6   x7   x8   x9   xA   xB   xC   xD   xE   xF
    IMP, IZX, IMP, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 0x
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 1x
    ABS, IZX, IMP, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 2x
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 3x
    IMP, IZX, IMP, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 4x
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 5x
    IMP, IZX, IMP, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, IND, ABS, ABS, ABS, // 6x
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // 7x
    IMM, IZX, IMM, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // 8x
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // 9x
    IMM, IZX, IMM, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // Ax
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPY, ZPY, IMP, ABY, IMP, ABY, ABX, ABX, ABY, ABY, // Bx
    IMM, IZX, IMM, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // Cx
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // Dx
    IMM, IZX, IMM, IZX, ZP0, ZP0, ZP0, ZP0, IMP, IMM, IMP, IMM, ABS, ABS, ABS, ABS, // Ex
    REL, IZY, IMP, IZY, ZPX, ZPX, ZPX, ZPX, IMP, ABY, IMP, ABY, ABX, ABX, ABX, ABX, // Fx
];
