/*!
load_store.rs - LDA / LDX / LDY / STA / STX / STY family handler

Overview
========
Loads place the operand value in a register. LDA goes through the A write
(Z/N recomputed there); LDX / LDY update Z/N from the loaded byte.
Stores write the register to the effective address and touch no flags.

Return Contract
===============
`handle` returns `Some(Flow::Next)` if the mnemonic belongs to this family,
`None` otherwise so the dispatcher can continue down the chain.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::LDA => lda(cpu, d.value(mem)),
        Mnemonic::LDX => ldx(cpu, d.value(mem)),
        Mnemonic::LDY => ldy(cpu, d.value(mem)),
        Mnemonic::STA => store(d, mem, cpu.a()),
        Mnemonic::STX => store(d, mem, cpu.x()),
        Mnemonic::STY => store(d, mem, cpu.y()),
        _ => return None,
    }
    Some(Flow::Next)
}

#[inline]
fn store(d: &Decoded, mem: &mut AddressSpace, v: u8) {
    if let Some(addr) = d.operand.address() {
        mem.write(addr, v);
    }
}
