/*!
logical.rs - AND / ORA / EOR / BIT family handler

AND / ORA / EOR combine the operand into A; their only flag effects are the
Z/N recompute that comes with every A write. BIT leaves A alone, sets Z
when `A & operand` is zero (never clears it), and copies operand bits 6 and 7
into V and N.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(d: &Decoded, cpu: &mut C, mem: &AddressSpace) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::AND => and(cpu, d.value(mem)),
        Mnemonic::ORA => ora(cpu, d.value(mem)),
        Mnemonic::EOR => eor(cpu, d.value(mem)),
        Mnemonic::BIT => bit(cpu, d.value(mem)),
        _ => return None,
    }
    Some(Flow::Next)
}
