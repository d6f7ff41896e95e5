// ls8/instruction.rs
use super::arch::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Ldi { reg: u8, imm: u8 },
    Prn { reg: u8 },
    Pra { reg: u8 },

    // ALU
    Mul { ra: u8, rb: u8 },
    Cmp { ra: u8, rb: u8 },

    // stack
    Push { reg: u8 },
    Pop { reg: u8 },

    // control flow
    Jmp { reg: u8 },
    Jeq { reg: u8 },
    Jne { reg: u8 },

    Hlt,
}

impl Instruction {
    pub fn opcode(&self) -> u8 {
        match self {
            Instruction::Ldi { .. } => OPC_LDI,
            Instruction::Prn { .. } => OPC_PRN,
            Instruction::Pra { .. } => OPC_PRA,
            Instruction::Mul { .. } => OPC_MUL,
            Instruction::Cmp { .. } => OPC_CMP,
            Instruction::Push { .. } => OPC_PUSH,
            Instruction::Pop { .. } => OPC_POP,
            Instruction::Jmp { .. } => OPC_JMP,
            Instruction::Jeq { .. } => OPC_JEQ,
            Instruction::Jne { .. } => OPC_JNE,
            Instruction::Hlt => OPC_HLT,
        }
    }

    /// Bytes occupied in memory, i.e. the PC step when no jump is taken.
    pub fn width(&self) -> usize {
        1 + operand_count(self.opcode()) as usize
    }
}
