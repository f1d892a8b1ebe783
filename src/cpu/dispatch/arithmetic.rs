/*!
arithmetic.rs - ADC / SBC opcode family handler

Overview
========
Implements 6502 add / subtract with carry. The operand is loaded (literal or
memory) and handed to `execute::adc` / `execute::sbc`, which pick binary or
packed-BCD arithmetic from the DECIMAL flag.

Return Contract
===============
`handle` returns `Some(Flow::Next)` if the mnemonic was ADC or SBC, `None`
otherwise.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{adc, sbc};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(d: &Decoded, cpu: &mut C, mem: &AddressSpace) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::ADC => adc(cpu, d.value(mem)),
        Mnemonic::SBC => sbc(cpu, d.value(mem)),
        _ => return None,
    }
    Some(Flow::Next)
}
