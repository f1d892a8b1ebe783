//! Error type for the CPU core.

use thiserror::Error;

use crate::cpu::table::Mnemonic;

pub type Result<T> = std::result::Result<T, CpuError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The decode table recognised the opcode but the engine has no semantic
    /// action for its mnemonic.
    #[error("instruction {mnemonic:?} (opcode ${opcode:02X}) at ${address:04X} is not implemented")]
    Unimplemented {
        mnemonic: Mnemonic,
        opcode: u8,
        address: u16,
    },

    #[error("instruction buffer is empty")]
    EmptyInstruction,

    #[error("program of {len} bytes does not fit the 64 KiB address space")]
    ProgramTooLarge { len: usize },
}
