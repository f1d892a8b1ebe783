/*!
config.rs - Behavior switches for the CPU core.

`index_compare` and `indirect_jump` default to the engine's historical
rules and can be switched to the NMOS hardware rule where the two differ.
`undocumented` is an extension: it defaults to on and runs the stable
undocumented opcodes. Turn it off to have every undocumented opcode fault
as unimplemented.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which value CPX / CPY subtract from which register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexCompare {
    /// `A - X` (CPX) and `A - Y` (CPY); the operand is ignored.
    #[default]
    Accumulator,
    /// `X - operand` / `Y - operand`, as on hardware.
    Operand,
}

/// How `JMP (ptr)` fetches the high byte of its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndirectJump {
    /// High byte at `ptr + 1`, carrying into the next page.
    #[default]
    Linear,
    /// High byte at `(ptr & 0xFF00) | ((ptr + 1) & 0x00FF)`: the NMOS defect.
    PageWrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CpuConfig {
    pub index_compare: IndexCompare,
    pub indirect_jump: IndirectJump,
    /// Execute the stable undocumented opcodes (LAX, SAX, SLO, RLA, SRE,
    /// RRA, DCP, ISC). When false they fault like the unstable ones.
    pub undocumented: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            index_compare: IndexCompare::Accumulator,
            indirect_jump: IndirectJump::Linear,
            undocumented: true,
        }
    }
}

impl CpuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hardware-faithful switches: operand compares and the JMP page wrap.
    pub fn hardware() -> Self {
        Self {
            index_compare: IndexCompare::Operand,
            indirect_jump: IndirectJump::PageWrap,
            undocumented: true,
        }
    }

    pub fn with_index_compare(mut self, mode: IndexCompare) -> Self {
        self.index_compare = mode;
        self
    }

    pub fn with_indirect_jump(mut self, mode: IndirectJump) -> Self {
        self.indirect_jump = mode;
        self
    }

    pub fn with_undocumented(mut self, enabled: bool) -> Self {
        self.undocumented = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_historical_rules_and_run_undocumented() {
        let c = CpuConfig::default();
        assert_eq!(c.index_compare, IndexCompare::Accumulator);
        assert_eq!(c.indirect_jump, IndirectJump::Linear);
        assert!(c.undocumented);
    }

    #[test]
    fn builder_overrides() {
        let c = CpuConfig::new()
            .with_index_compare(IndexCompare::Operand)
            .with_undocumented(false);
        assert_eq!(c.index_compare, IndexCompare::Operand);
        assert_eq!(c.indirect_jump, IndirectJump::Linear);
        assert!(!c.undocumented);
        assert_eq!(CpuConfig::hardware().indirect_jump, IndirectJump::PageWrap);
    }
}
