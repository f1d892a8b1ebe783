/*!
compare.rs - CMP / CPX / CPY opcode family handler

Overview
========
All three go through `execute::compare`, which sets C / Z / N from the sign
of a wide `register - value` difference.

CPX / CPY Operands
==================
With `IndexCompare::Accumulator` (default) CPX computes `A - X` and CPY
computes `A - Y`; the instruction operand is not read. With
`IndexCompare::Operand` they compute `X - operand` / `Y - operand`.
*/

use crate::config::IndexCompare;
use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &AddressSpace,
    index_compare: IndexCompare,
) -> Option<Flow> {
    let (lhs, rhs) = match (d.instr.mnemonic, index_compare) {
        (Mnemonic::CMP, _) => (cpu.a(), d.value(mem)),
        (Mnemonic::CPX, IndexCompare::Accumulator) => (cpu.a(), cpu.x()),
        (Mnemonic::CPY, IndexCompare::Accumulator) => (cpu.a(), cpu.y()),
        (Mnemonic::CPX, IndexCompare::Operand) => (cpu.x(), d.value(mem)),
        (Mnemonic::CPY, IndexCompare::Operand) => (cpu.y(), d.value(mem)),
        _ => return None,
    };
    compare(cpu, lhs, rhs);
    Some(Flow::Next)
}

#[cfg(test)]
mod tests {
    use crate::config::{CpuConfig, IndexCompare};
    use crate::cpu::dispatch::source::BufferFetch;
    use crate::cpu::dispatch::step;
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::setup_state;

    fn czn(cpu: &crate::cpu::state::CpuState) -> (bool, bool, bool) {
        (cpu.is_flag_set(CARRY), cpu.is_flag_set(ZERO), cpu.is_flag_set(NEGATIVE))
    }

    #[test]
    fn cmp_immediate_cases() {
        let (mut cpu, mut mem, cfg) = setup_state();
        cpu.set_a(0x10);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xC9, 0x10])).expect("CMP");
        assert_eq!(czn(&cpu), (false, true, false));
        cpu.set_a(0x20);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xC9, 0x10])).expect("CMP");
        assert_eq!(czn(&cpu), (true, false, false));
        cpu.set_a(0x10);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xC9, 0x20])).expect("CMP");
        assert_eq!(czn(&cpu), (false, false, true));
    }

    #[test]
    fn cpx_default_compares_accumulator_with_x() {
        let (mut cpu, mut mem, cfg) = setup_state();
        cpu.set_a(0x05);
        cpu.set_x(0x05);
        // Operand 0x99 is ignored.
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xE0, 0x99])).expect("CPX #");
        assert_eq!(czn(&cpu), (false, true, false));
        assert_eq!(cpu.pc(), 2);
    }

    #[test]
    fn cpy_operand_mode_uses_operand() {
        let (mut cpu, mut mem, _) = setup_state();
        let cfg = CpuConfig::default().with_index_compare(IndexCompare::Operand);
        cpu.set_a(0x00);
        cpu.set_y(0x30);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xC0, 0x10])).expect("CPY #");
        assert_eq!(czn(&cpu), (true, false, false));
    }
}
