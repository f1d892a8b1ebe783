/*!
misc.rs - Transfers / stack / flags / NOP / STP opcode family handler

Covers:
- Register transfers: TAX TAY TXA TYA TSX TXS
- Register increments: INX INY DEX DEY
- Stack: PHA PLA PHP PLP
- Flag set / clear: CLC SEC CLI SEI CLD SED CLV
- NOP (every opcode the table names NOP, whatever its operand length)
- STP (halts the engine)
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{
    dex, dey, inx, iny, pha, php, pla, plp, set_flag, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::TAX => tax(cpu),
        Mnemonic::TAY => tay(cpu),
        Mnemonic::TXA => txa(cpu),
        Mnemonic::TYA => tya(cpu),
        Mnemonic::TSX => tsx(cpu),
        Mnemonic::TXS => txs(cpu),
        Mnemonic::INX => inx(cpu),
        Mnemonic::INY => iny(cpu),
        Mnemonic::DEX => dex(cpu),
        Mnemonic::DEY => dey(cpu),
        Mnemonic::PHA => pha(cpu, mem),
        Mnemonic::PLA => pla(cpu, mem),
        Mnemonic::PHP => php(cpu, mem),
        Mnemonic::PLP => plp(cpu, mem),
        Mnemonic::CLC => set_flag(cpu, CARRY, false),
        Mnemonic::SEC => set_flag(cpu, CARRY, true),
        Mnemonic::CLI => set_flag(cpu, IRQ_DISABLE, false),
        Mnemonic::SEI => set_flag(cpu, IRQ_DISABLE, true),
        Mnemonic::CLD => set_flag(cpu, DECIMAL, false),
        Mnemonic::SED => set_flag(cpu, DECIMAL, true),
        Mnemonic::CLV => set_flag(cpu, OVERFLOW, false),
        Mnemonic::NOP => {}
        Mnemonic::STP => return Some(Flow::Halt),
        _ => return None,
    }
    Some(Flow::Next)
}
