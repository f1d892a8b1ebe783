/*!
control_flow.rs - JMP / JSR / RTS / RTI / BRK opcode family handler

Overview
========
Every instruction here sets PC itself and returns `Flow::Jump`.

| Mnemonic | Stack effect                          | New PC                     |
|----------|---------------------------------------|----------------------------|
| JMP      | none                                  | effective address          |
| JSR      | push (PC + 2), high byte first        | effective address          |
| RTS      | pull word (low byte first)            | pulled + 1                 |
| BRK      | set B, push (PC + 1), then push P     | `($FFFF << 8) \| $FFFE`    |
| RTI      | pull P, then pull word                | pulled + 1                 |

BRK does not set IRQ_DISABLE. JSR followed by RTS resumes at the byte after
the three-byte JSR.
*/

use crate::cpu::addressing::read_word;
use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{php, plp, pull_word, push_word, set_flag};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::BREAK;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

/// Low byte of the BRK / IRQ vector (high byte at +1).
pub const IRQ_VECTOR: u16 = 0xFFFE;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::JMP => {
            let target = d.operand.address()?;
            cpu.set_pc(target);
        }
        Mnemonic::JSR => {
            let target = d.operand.address()?;
            push_word(cpu, mem, d.pc.wrapping_add(2));
            cpu.set_pc(target);
        }
        Mnemonic::RTS => {
            let ret = pull_word(cpu, mem);
            cpu.set_pc(ret.wrapping_add(1));
        }
        Mnemonic::BRK => {
            set_flag(cpu, BREAK, true);
            push_word(cpu, mem, d.pc.wrapping_add(1));
            php(cpu, mem);
            cpu.set_pc(read_word(mem, IRQ_VECTOR));
        }
        Mnemonic::RTI => {
            plp(cpu, mem);
            let ret = pull_word(cpu, mem);
            cpu.set_pc(ret.wrapping_add(1));
        }
        _ => return None,
    }
    Some(Flow::Jump)
}
