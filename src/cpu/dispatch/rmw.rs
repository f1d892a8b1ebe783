/*!
rmw.rs - Shift / rotate / INC / DEC opcode family handler

Overview
========
ASL / LSR / ROL / ROR act on A when the mode is implied (accumulator form)
and on the byte at the effective address otherwise. INC / DEC always act
on memory.

Flags
=====
- Shifts set CARRY from the bit shifted out. The accumulator forms get Z/N
  from the A write; the memory forms leave Z/N unchanged.
- INC / DEC update Z/N from the stored result.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{asl, dec_value, inc_value, lsr, rmw_memory, rol, ror, shift_acc};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
) -> Option<Flow> {
    let transform: fn(&mut C, u8) -> u8 = match d.instr.mnemonic {
        Mnemonic::ASL => asl::<C>,
        Mnemonic::LSR => lsr::<C>,
        Mnemonic::ROL => rol::<C>,
        Mnemonic::ROR => ror::<C>,
        Mnemonic::INC => inc_value::<C>,
        Mnemonic::DEC => dec_value::<C>,
        _ => return None,
    };
    match d.operand.address() {
        Some(addr) => {
            rmw_memory(cpu, mem, addr, transform);
        }
        None => shift_acc(cpu, transform),
    }
    Some(Flow::Next)
}
