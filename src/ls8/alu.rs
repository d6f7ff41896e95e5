// ls8/alu.rs
use std::fmt;

use super::{arch::*, errors::Ls8Error, registers::{Cpu, FL_EQ}};

/// Operations the ALU can be asked for. Not all of them are wired up yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Cmp,
}

impl AluOp {
    /// ALU operation named by an ALU-family opcode.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        Some(match opcode {
            OPC_ADD => AluOp::Add,
            OPC_SUB => AluOp::Sub,
            OPC_MUL => AluOp::Mul,
            OPC_DIV => AluOp::Div,
            OPC_CMP => AluOp::Cmp,
            _ => return None,
        })
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::Div => "DIV",
            AluOp::Cmp => "CMP",
        };
        f.write_str(name)
    }
}

/// Applies `op` to registers `ra` and `rb`, writing back into `ra`.
///
/// `Mul` also returns the product it stored. `Cmp` only ever sets the
/// equal flag; an unequal compare leaves the previous flag in place.
pub fn alu(cpu: &mut Cpu, op: AluOp, ra: u8, rb: u8) -> Result<Option<u8>, Ls8Error> {
    let a = cpu.read(ra)?;
    let b = cpu.read(rb)?;
    match op {
        AluOp::Add => {
            cpu.write(ra, a.wrapping_add(b))?;
            Ok(None)
        }
        AluOp::Mul => {
            let v = a.wrapping_mul(b);
            cpu.write(ra, v)?;
            Ok(Some(v))
        }
        AluOp::Cmp => {
            if a == b {
                cpu.fl |= FL_EQ;
            }
            Ok(None)
        }
        AluOp::Sub | AluOp::Div => Err(Ls8Error::UnsupportedAluOp(op)),
    }
}
