/*!
core::Cpu - Canonical 6502 CPU facade wrapping `CpuState`.

Design
======
- `Cpu` stores the architectural state plus the `CpuConfig` it runs under.
- The address space is never owned here; every entry point borrows it, so a
  composition object (see `nes::Nes`) can hand the same memory to other
  collaborators between steps.
- Both entry points route through `dispatch::step`:
  * `step` / `run_from` / `run_program` / `run_for` fetch from memory at PC.
  * `execute` runs one caller-supplied instruction buffer at the current PC.

Stopping
========
`run_from` and `run_program` always start Running, even after an earlier
STP; `step` and `execute` on a halted engine are no-ops.
A run ends when STP halts the engine (`Ok(RunState::Halted)`) or when an
instruction has no semantic action (`Err(CpuError::Unimplemented)`).
`run_for` additionally stops after a step budget and reports `Running`.
*/

use log::debug;

use crate::config::CpuConfig;
use crate::cpu::dispatch::{
    self,
    source::{BufferFetch, MemoryFetch},
};
use crate::cpu::state::{CpuState, RunState};
use crate::error::{CpuError, Result};
use crate::memory::AddressSpace;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
    config: CpuConfig,
}

impl Cpu {
    /// Construct a new CPU with power-on defaults (everything zero, Running).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            state: CpuState::new(),
            config,
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Return mutable reference to internal state.
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CpuConfig) {
        self.config = config;
    }

    /// Return to the power-on state. The configuration is kept.
    pub fn reset(&mut self) {
        self.state = CpuState::new();
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state()
    }

    /// True once STP has executed.
    pub fn is_halted(&self) -> bool {
        self.state.halted()
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a()
    }
    pub fn x(&self) -> u8 {
        self.state.x()
    }
    pub fn y(&self) -> u8 {
        self.state.y()
    }
    pub fn sp(&self) -> u8 {
        self.state.sp()
    }
    pub fn pc(&self) -> u16 {
        self.state.pc()
    }
    pub fn status(&self) -> u8 {
        self.state.status()
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------

    /// Assign A (recomputes ZERO / NEGATIVE).
    pub fn set_a(&mut self, v: u8) {
        self.state.set_a(v);
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.set_x(v);
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.set_y(v);
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.set_sp(v);
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.set_pc(v);
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.set_status(v);
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------
    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Fetch, decode and execute the instruction at PC.
    pub fn step(&mut self, mem: &mut AddressSpace) -> Result<RunState> {
        dispatch::step(&mut self.state, mem, &self.config, &MemoryFetch)
    }

    /// Execute one pre-fetched instruction (opcode first) as if it sat at
    /// the current PC. Operand bytes beyond the buffer read as zero.
    pub fn execute(&mut self, mem: &mut AddressSpace, instruction: &[u8]) -> Result<RunState> {
        if instruction.is_empty() {
            return Err(CpuError::EmptyInstruction);
        }
        dispatch::step(&mut self.state, mem, &self.config, &BufferFetch(instruction))
    }

    /// Set PC to `pc`, re-arm a halted engine and step until halted. Never
    /// returns on a program that neither halts nor faults; use `run_for` for
    /// a bounded run.
    pub fn run_from(&mut self, mem: &mut AddressSpace, pc: u16) -> Result<RunState> {
        self.state.set_pc(pc);
        self.state.set_run_state(RunState::Running);
        loop {
            if self.step(mem)? == RunState::Halted {
                return Ok(RunState::Halted);
            }
        }
    }

    /// Load `program` at address 0 and run it from there until halted.
    pub fn run_program(&mut self, mem: &mut AddressSpace, program: &[u8]) -> Result<RunState> {
        mem.load(program)?;
        self.run_from(mem, 0)
    }

    /// Step at most `max_steps` times from the current PC.
    pub fn run_for(&mut self, mem: &mut AddressSpace, max_steps: usize) -> Result<RunState> {
        for _ in 0..max_steps {
            if self.step(mem)? == RunState::Halted {
                return Ok(RunState::Halted);
            }
        }
        debug!(
            "step budget of {max_steps} exhausted at ${:04X}",
            self.state.pc()
        );
        Ok(self.state.run_state())
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::{CARRY, ZERO};
    use crate::test_utils::setup;

    #[test]
    fn construction_is_power_on_state() {
        let cpu = Cpu::new();
        assert_eq!((cpu.a(), cpu.x(), cpu.y(), cpu.sp(), cpu.pc()), (0, 0, 0, 0, 0));
        assert_eq!(cpu.status(), 0);
        assert_eq!(cpu.run_state(), RunState::Running);
    }

    #[test]
    fn run_program_end_to_end() {
        let (mut cpu, mut mem) = setup();
        // LDA #$3C ; ADC #$1E ; STA $07 ; STP
        let st = cpu
            .run_program(&mut mem, &[0xA9, 0x3C, 0x69, 0x1E, 0x85, 0x07, 0x02])
            .expect("program runs");
        assert_eq!(st, RunState::Halted);
        assert_eq!(cpu.a(), 0x5A);
        assert_eq!(mem.read(0x0007), 0x5A);
        assert_eq!(cpu.pc(), 6);
    }

    #[test]
    fn execute_uses_current_pc_and_rejects_empty() {
        let (mut cpu, mut mem) = setup();
        cpu.set_pc(0x0400);
        cpu.execute(&mut mem, &[0xA2, 0x07]).expect("LDX #");
        assert_eq!(cpu.x(), 0x07);
        assert_eq!(cpu.pc(), 0x0402);
        assert_eq!(cpu.execute(&mut mem, &[]), Err(CpuError::EmptyInstruction));
    }

    #[test]
    fn run_for_stops_on_budget() {
        let (mut cpu, mut mem) = setup();
        // BEQ -2 with Z set loops forever.
        mem.load(&[0xF0, 0xFE]).expect("load");
        cpu.set_flag(ZERO, true);
        let st = cpu.run_for(&mut mem, 100).expect("bounded");
        assert_eq!(st, RunState::Running);
        assert_eq!(cpu.pc(), 0);
    }

    #[test]
    fn run_from_propagates_unimplemented() {
        let (mut cpu, mut mem) = setup();
        mem.write(0x0200, 0x38); // SEC
        mem.write(0x0201, 0x6B); // ARR #
        let err = cpu.run_from(&mut mem, 0x0200).unwrap_err();
        assert!(matches!(err, CpuError::Unimplemented { address: 0x0201, .. }));
        assert!(cpu.get_flag(CARRY));
        assert_eq!(cpu.run_state(), RunState::Running);
    }

    #[test]
    fn run_program_restarts_after_halt() {
        let (mut cpu, mut mem) = setup();
        assert_eq!(cpu.run_program(&mut mem, &[0x02]).expect("halts"), RunState::Halted);
        assert!(cpu.is_halted());
        // LDA #$07 ; STP
        assert_eq!(
            cpu.run_program(&mut mem, &[0xA9, 0x07, 0x02]).expect("halts"),
            RunState::Halted
        );
        assert_eq!(cpu.a(), 0x07);
        assert_eq!(cpu.pc(), 0x0002);
    }

    #[test]
    fn reset_keeps_config() {
        let mut cpu = Cpu::with_config(CpuConfig::hardware());
        cpu.set_a(0x12);
        cpu.reset();
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.config(), &CpuConfig::hardware());
    }
}
