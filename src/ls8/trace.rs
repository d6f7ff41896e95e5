// ls8/trace.rs
use std::fmt;

use super::{memory::Bus, registers::{Cpu, REGISTER_COUNT}};

/// Read-only view of the machine taken between two cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuState {
    pub pc: usize,
    pub fl: u8,
    /// bytes at PC, PC+1, PC+2 (`None` past the end of memory)
    pub window: [Option<u8>; 3],
    pub reg: [u8; REGISTER_COUNT],
}

impl CpuState {
    pub fn capture<B: Bus>(cpu: &Cpu, mem: &B) -> Self {
        Self {
            pc: cpu.pc,
            fl: cpu.fl,
            window: [mem.peek(cpu.pc), mem.peek(cpu.pc + 1), mem.peek(cpu.pc + 2)],
            reg: cpu.reg,
        }
    }
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TRACE: {:02X} | {:02X} |", self.pc, self.fl)?;
        for cell in self.window {
            match cell {
                Some(b) => write!(f, " {b:02X}")?,
                None => f.write_str(" --")?,
            }
        }
        f.write_str(" |")?;
        for r in self.reg {
            write!(f, " {r:02X}")?;
        }
        Ok(())
    }
}
