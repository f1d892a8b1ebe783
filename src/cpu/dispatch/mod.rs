/*!
dispatch - Orchestrator for a single 6502 CPU step.

Overview
========
Coordinates a single CPU instruction step:
1. Fetch the instruction bytes at PC from an `InstructionSource`.
2. Decode (mnemonic, mode) via `table::Instruction::decode`.
3. Resolve the operand via `addressing::resolve`.
4. Offer the decoded instruction to each family handler in turn.
5. Apply the returned `Flow` (generic PC advance, PC already set, or halt).

Architecture
============
- Family handlers live in sibling modules (`load_store`, `logical`,
  `arithmetic`, `compare`, `rmw`, `branches`, `control_flow`, `misc`,
  `undocumented`). Each one returns `None` for mnemonics outside its family
  so the chain can continue.
- Handlers never advance PC for the generic case; they return `Flow::Next`
  and the orchestrator adds `1 + operand_len(mode)`. Handlers that set PC
  themselves return `Flow::Jump`.
- A mnemonic no handler claims is an `Unimplemented` error. PC and run
  state are left exactly as they were before the step.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;
pub(crate) mod source;
pub(crate) mod undocumented;

use log::{debug, error, trace};

use crate::config::CpuConfig;
use crate::cpu::addressing::{Operand, resolve};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::RunState;
use crate::cpu::table::Instruction;
use crate::error::{CpuError, Result};
use crate::memory::AddressSpace;

use self::source::InstructionSource;

/// What the engine does with PC after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    /// Advance PC by the instruction length.
    Next,
    /// PC has already been set by the handler.
    Jump,
    /// Stop the engine; PC is not advanced.
    Halt,
}

/// A fetched, decoded and resolved instruction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Decoded {
    pub instr: Instruction,
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub operand: Operand,
}

impl Decoded {
    /// Operand value: the literal, or the byte at the effective address.
    #[inline]
    pub fn value(&self, mem: &AddressSpace) -> u8 {
        self.operand.load(mem)
    }
}

/// Execute one instruction and return the run state afterwards.
///
/// A halted CPU is left untouched.
pub(crate) fn step<C: CpuRegs, S: InstructionSource>(
    cpu: &mut C,
    mem: &mut AddressSpace,
    config: &CpuConfig,
    source: &S,
) -> Result<RunState> {
    if cpu.run_state() == RunState::Halted {
        return Ok(RunState::Halted);
    }

    let pc = cpu.pc();
    let bytes = source.fetch(pc, mem);
    let instr = Instruction::decode(bytes[0]);
    let operand = resolve(instr.mode, &bytes, &*cpu, mem, config.indirect_jump);

    trace!(
        "{:04X}  {:02X} {:02X} {:02X}  {:?} {:?}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        pc,
        bytes[0],
        bytes[1],
        bytes[2],
        instr.mnemonic,
        instr.mode,
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp()
    );

    let decoded = Decoded { instr, pc, operand };
    let Some(flow) = execute_families(&decoded, cpu, mem, config) else {
        error!(
            "unimplemented instruction {:?} (opcode ${:02X}) at ${:04X}",
            instr.mnemonic, instr.opcode, pc
        );
        return Err(CpuError::Unimplemented {
            mnemonic: instr.mnemonic,
            opcode: instr.opcode,
            address: pc,
        });
    };

    match flow {
        Flow::Next => cpu.advance_pc(instr.len()),
        Flow::Jump => {}
        Flow::Halt => {
            cpu.set_run_state(RunState::Halted);
            debug!("STP at ${pc:04X}; engine halted");
        }
    }
    Ok(cpu.run_state())
}

/// Offer the instruction to each family; the first to claim it runs it.
fn execute_families<C: CpuRegs>(
    d: &Decoded,
    cpu: &mut C,
    mem: &mut AddressSpace,
    config: &CpuConfig,
) -> Option<Flow> {
    if let Some(flow) = load_store::handle(d, cpu, mem) {
        return Some(flow);
    }
    if let Some(flow) = logical::handle(d, cpu, mem) {
        return Some(flow);
    }
    if let Some(flow) = arithmetic::handle(d, cpu, mem) {
        return Some(flow);
    }
    if let Some(flow) = compare::handle(d, cpu, mem, config.index_compare) {
        return Some(flow);
    }
    if let Some(flow) = rmw::handle(d, cpu, mem) {
        return Some(flow);
    }
    if let Some(flow) = branches::handle(d, cpu) {
        return Some(flow);
    }
    if let Some(flow) = control_flow::handle(d, cpu, mem) {
        return Some(flow);
    }
    if let Some(flow) = misc::handle(d, cpu, mem) {
        return Some(flow);
    }
    if config.undocumented {
        return undocumented::handle(d, cpu, mem);
    }
    None
}
