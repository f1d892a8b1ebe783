/*!
undocumented.rs - Stable NMOS undocumented opcodes

Only consulted when `CpuConfig::undocumented` is set.

| Mnemonic | Effect                                 |
|----------|----------------------------------------|
| LAX      | A, X <- M                              |
| SAX      | M <- A & X (no flags)                  |
| SLO      | M <- ASL M, then ORA M                 |
| RLA      | M <- ROL M, then AND M                 |
| SRE      | M <- LSR M, then EOR M                 |
| RRA      | M <- ROR M, then ADC M                 |
| DCP      | M <- DEC M, then CMP M                 |
| ISC      | M <- INC M, then SBC M                 |

ANC, ALR, ARR, XAA, AHX, TAS, SHY, SHX, LAS and AXS are not handled and
surface as `Unimplemented`.
*/

use crate::cpu::dispatch::{Decoded, Flow};
use crate::cpu::execute::{
    adc, and, asl, compare, dec_value, eor, inc_value, lsr, ora, rmw_memory, rol, ror, sbc,
};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Mnemonic;
use crate::memory::AddressSpace;

pub(super) fn handle<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
) -> Option<Flow> {
    match d.instr.mnemonic {
        Mnemonic::LAX => {
            let v = d.value(mem);
            cpu.set_a(v);
            cpu.set_x(v);
        }
        Mnemonic::SAX => {
            let addr = d.operand.address()?;
            mem.write(addr, cpu.a() & cpu.x());
        }
        Mnemonic::SLO => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, asl);
            ora(cpu, r);
        }
        Mnemonic::RLA => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, rol);
            and(cpu, r);
        }
        Mnemonic::SRE => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, lsr);
            eor(cpu, r);
        }
        Mnemonic::RRA => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, ror);
            adc(cpu, r);
        }
        Mnemonic::DCP => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, dec_value);
            let a = cpu.a();
            compare(cpu, a, r);
        }
        Mnemonic::ISC => {
            let r = rmw_memory(cpu, mem, d.operand.address()?, inc_value);
            sbc(cpu, r);
        }
        _ => return None,
    }
    Some(Flow::Next)
}

#[cfg(test)]
mod tests {
    use crate::cpu::dispatch::source::BufferFetch;
    use crate::cpu::dispatch::step;
    use crate::cpu::state::{CARRY, ZERO};
    use crate::cpu::table::Mnemonic;
    use crate::error::CpuError;
    use crate::test_utils::setup_state;

    #[test]
    fn sax_stores_a_and_x() {
        let (mut cpu, mut mem, cfg) = setup_state();
        cpu.set_a(0xF0);
        cpu.set_x(0x3C);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0x87, 0x10])).expect("SAX $10");
        assert_eq!(mem.read(0x0010), 0x30);
    }

    #[test]
    fn slo_shifts_then_ors() {
        let (mut cpu, mut mem, cfg) = setup_state();
        mem.write(0x0010, 0x81);
        cpu.set_a(0x01);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0x07, 0x10])).expect("SLO $10");
        assert_eq!(mem.read(0x0010), 0x02);
        assert_eq!(cpu.a(), 0x03);
        assert!(cpu.is_flag_set(CARRY));
    }

    #[test]
    fn dcp_decrements_then_compares() {
        let (mut cpu, mut mem, cfg) = setup_state();
        mem.write(0x0010, 0x06);
        cpu.set_a(0x05);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xC7, 0x10])).expect("DCP $10");
        assert_eq!(mem.read(0x0010), 0x05);
        assert!(cpu.is_flag_set(ZERO));
        assert!(!cpu.is_flag_set(CARRY));
    }

    #[test]
    fn isc_increments_then_subtracts() {
        let (mut cpu, mut mem, cfg) = setup_state();
        mem.write(0x0010, 0x0F);
        cpu.set_a(0x20);
        step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xE7, 0x10])).expect("ISC $10");
        assert_eq!(mem.read(0x0010), 0x10);
        assert_eq!(cpu.a(), 0x10);
        assert!(!cpu.is_flag_set(CARRY));
    }

    #[test]
    fn unstable_opcode_is_unimplemented() {
        let (mut cpu, mut mem, cfg) = setup_state();
        let err = step(&mut cpu, &mut mem, &cfg, &BufferFetch(&[0xCB, 0x01])).unwrap_err();
        assert!(matches!(err, CpuError::Unimplemented { mnemonic: Mnemonic::AXS, .. }));
        assert_eq!(cpu.pc(), 0);
    }
}
