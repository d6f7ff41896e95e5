// ls8/decoder/mod.rs
mod disasm;

pub use disasm::disasm;

use crate::ls8::alu::AluOp;
use crate::ls8::arch::*;
use crate::ls8::errors::Ls8Error;
use crate::ls8::instruction::Instruction;

/// Decodes the opcode at PC together with the two bytes after it.
/// Operands the opcode does not use are ignored.
pub fn decode(opcode: u8, a: u8, b: u8) -> Result<Instruction, Ls8Error> {
    Ok(match opcode {
        OPC_LDI => Instruction::Ldi { reg: a, imm: b },
        OPC_PRN => Instruction::Prn { reg: a },
        OPC_PRA => Instruction::Pra { reg: a },
        OPC_PUSH => Instruction::Push { reg: a },
        OPC_POP => Instruction::Pop { reg: a },
        OPC_JMP => Instruction::Jmp { reg: a },
        OPC_JEQ => Instruction::Jeq { reg: a },
        OPC_JNE => Instruction::Jne { reg: a },
        OPC_HLT => Instruction::Hlt,
        // only MUL and CMP have handlers; ADD/SUB/DIV stay unknown
        _ => match AluOp::from_opcode(opcode) {
            Some(AluOp::Mul) => Instruction::Mul { ra: a, rb: b },
            Some(AluOp::Cmp) => Instruction::Cmp { ra: a, rb: b },
            _ => return Err(Ls8Error::UnknownInstruction(opcode)),
        },
    })
}
