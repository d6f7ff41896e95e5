use super::decode;
use crate::ls8::instruction::Instruction;

pub fn disasm(opcode: u8, a: u8, b: u8) -> String {
    match decode(opcode, a, b) {
        Ok(i) => match i {
            Instruction::Ldi { reg, imm } => format!("LDI  R{reg}, {imm}"),
            Instruction::Prn { reg } => format!("PRN  R{reg}"),
            Instruction::Pra { reg } => format!("PRA  R{reg}"),
            Instruction::Mul { ra, rb } => format!("MUL  R{ra}, R{rb}"),
            Instruction::Cmp { ra, rb } => format!("CMP  R{ra}, R{rb}"),
            Instruction::Push { reg } => format!("PUSH R{reg}"),
            Instruction::Pop { reg } => format!("POP  R{reg}"),
            Instruction::Jmp { reg } => format!("JMP  R{reg}"),
            Instruction::Jeq { reg } => format!("JEQ  R{reg}"),
            Instruction::Jne { reg } => format!("JNE  R{reg}"),
            Instruction::Hlt => "HLT".into(),
        },
        Err(e) => format!(".byte 0x{opcode:02x} ; {e}"),
    }
}
