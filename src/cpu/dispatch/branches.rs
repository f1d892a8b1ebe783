/*!
branches.rs - Relative branch opcode handler (BPL/BMI/BVC/BVS/BCC/BCS/BNE/BEQ)

Overview
========
The resolver hands over `target = opcode address + signed offset`. When the
condition holds the new PC is `target + 2`, i.e. the offset is applied from
the byte after the two-byte branch. A branch with offset -2 therefore loops
on itself. When the condition fails the engine performs the normal 2-byte
advance.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::get_flag;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Mnemonic;

pub(super) fn handle<C: CpuRegs>(d: &Decoded, cpu: &mut C) -> Option<Flow> {
    let take = match d.instr.mnemonic {
        Mnemonic::BPL => !get_flag(cpu, NEGATIVE),
        Mnemonic::BMI => get_flag(cpu, NEGATIVE),
        Mnemonic::BVC => !get_flag(cpu, OVERFLOW),
        Mnemonic::BVS => get_flag(cpu, OVERFLOW),
        Mnemonic::BCC => !get_flag(cpu, CARRY),
        Mnemonic::BCS => get_flag(cpu, CARRY),
        Mnemonic::BNE => !get_flag(cpu, ZERO),
        Mnemonic::BEQ => get_flag(cpu, ZERO),
        _ => return None,
    };
    match d.operand.address() {
        Some(target) if take => {
            cpu.set_pc(target.wrapping_add(d.instr.len()));
            Some(Flow::Jump)
        }
        _ => Some(Flow::Next),
    }
}
