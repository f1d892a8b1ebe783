//! Shared test setup for the CPU core.
//!
//! Unit tests across `cpu::dispatch` and `cpu::core` start from the same
//! place: power-on registers, an empty address space and the default
//! configuration.

use crate::config::CpuConfig;
use crate::cpu::core::Cpu;
use crate::cpu::state::CpuState;
use crate::memory::AddressSpace;

/// Facade-level setup: a fresh `Cpu` and an empty address space.
pub fn setup() -> (Cpu, AddressSpace) {
    (Cpu::new(), AddressSpace::new())
}

/// Raw-state setup for driving `dispatch::step` directly.
pub fn setup_state() -> (CpuState, AddressSpace, CpuConfig) {
    (CpuState::new(), AddressSpace::new(), CpuConfig::default())
}
