/*!
nes.rs - Composition object wiring CPU, PPU stub and shared memory.

The three parts are public fields so an external driver can borrow each one
independently. `step` serializes access: the CPU runs one whole instruction
with exclusive access to `memory`, then the PPU gets a read-only look.
*/

use crate::config::CpuConfig;
use crate::cpu::core::Cpu;
use crate::cpu::state::RunState;
use crate::error::Result;
use crate::memory::AddressSpace;
use crate::ppu::Ppu;

#[derive(Debug, Clone, Default)]
pub struct Nes {
    pub cpu: Cpu,
    pub ppu: Ppu,
    pub memory: AddressSpace,
}

impl Nes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            cpu: Cpu::with_config(config),
            ..Self::default()
        }
    }

    /// Power-on state for all three parts. The CPU configuration is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.ppu = Ppu::new();
        self.memory.reset();
    }

    /// Write `program` at address 0.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.memory.load(program)
    }

    /// One CPU instruction, then a PPU sync.
    pub fn step(&mut self) -> Result<RunState> {
        let state = self.cpu.step(&mut self.memory)?;
        self.ppu.sync(&self.memory);
        Ok(state)
    }

    /// Re-arm the CPU and step from the current PC until it halts.
    pub fn run(&mut self) -> Result<RunState> {
        self.cpu.state_mut().set_run_state(RunState::Running);
        while self.step()? == RunState::Running {}
        Ok(RunState::Halted)
    }

    /// Step at most `max_steps` times.
    pub fn run_for(&mut self, max_steps: usize) -> Result<RunState> {
        for _ in 0..max_steps {
            if self.step()? == RunState::Halted {
                return Ok(RunState::Halted);
            }
        }
        Ok(self.cpu.run_state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppu_observes_cpu_register_writes() {
        let mut nes = Nes::new();
        // LDA #$90 ; STA $2000 ; LDA #$1E ; STA $3FF9 (mirror of $2001) ; STP
        nes.load_program(&[
            0xA9, 0x90, 0x8D, 0x20, 0x00, 0xA9, 0x1E, 0x8D, 0x3F, 0xF9, 0x02,
        ])
        .expect("load");
        assert_eq!(nes.run().expect("run"), RunState::Halted);
        assert_eq!(nes.ppu.ctrl(), 0x90);
        assert_eq!(nes.ppu.mask(), 0x1E);
        assert_eq!(nes.ppu.syncs(), 5);
    }

    #[test]
    fn ppu_sees_nothing_before_the_step_commits() {
        let mut nes = Nes::new();
        nes.load_program(&[0xA9, 0x01, 0x8D, 0x20, 0x00, 0x02])
            .expect("load");
        nes.step().expect("LDA");
        assert_eq!(nes.ppu.ctrl(), 0);
        nes.step().expect("STA");
        assert_eq!(nes.ppu.ctrl(), 0x01);
    }

    #[test]
    fn run_for_bounds_a_spinning_program() {
        let mut nes = Nes::new();
        nes.load_program(&[0x4C, 0x00, 0x00]).expect("load"); // JMP $0000
        assert_eq!(nes.run_for(10).expect("bounded"), RunState::Running);
        assert_eq!(nes.ppu.syncs(), 10);
    }

    #[test]
    fn reset_clears_memory_and_ppu_latch() {
        let mut nes = Nes::with_config(CpuConfig::hardware());
        nes.load_program(&[0xA9, 0x80, 0x8D, 0x20, 0x00, 0x02])
            .expect("load");
        nes.run().expect("run");
        nes.reset();
        assert!(nes.memory.as_slice().iter().all(|&b| b == 0));
        assert_eq!(nes.ppu.ctrl(), 0);
        assert_eq!(nes.ppu.syncs(), 0);
        assert_eq!(nes.cpu.a(), 0);
        assert_eq!(nes.cpu.run_state(), RunState::Running);
        assert_eq!(*nes.cpu.config(), CpuConfig::hardware());
    }

    #[test]
    fn run_resumes_after_a_halt() {
        let mut nes = Nes::new();
        nes.load_program(&[0x02]).expect("load");
        nes.run().expect("first run");
        // LDA #$2A ; STA $2000 ; STP
        nes.load_program(&[0xA9, 0x2A, 0x8D, 0x20, 0x00, 0x02])
            .expect("load");
        nes.cpu.set_pc(0);
        assert_eq!(nes.run().expect("second run"), RunState::Halted);
        assert_eq!(nes.cpu.a(), 0x2A);
        assert_eq!(nes.ppu.ctrl(), 0x2A);
    }
}
