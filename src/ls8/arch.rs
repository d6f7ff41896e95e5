// ls8/arch.rs
// Opcode layout: AABCDDDD
//   AA   number of operand bytes that follow
//   B    routed through the ALU
//   C    instruction sets the PC itself
//   DDDD instruction id

pub const OPC_HLT: u8 = 0b0000_0001;
pub const OPC_LDI: u8 = 0b1000_0010;
pub const OPC_PRN: u8 = 0b0100_0111;
pub const OPC_PRA: u8 = 0b0100_1000;
pub const OPC_PUSH: u8 = 0b0100_0101;
pub const OPC_POP: u8 = 0b0100_0110;
pub const OPC_JMP: u8 = 0b0101_0100;
pub const OPC_JEQ: u8 = 0b0101_0101;
pub const OPC_JNE: u8 = 0b0101_0110;

// ALU
pub const OPC_ADD: u8 = 0b1010_0000;
pub const OPC_SUB: u8 = 0b1010_0001;
pub const OPC_MUL: u8 = 0b1010_0010;
pub const OPC_DIV: u8 = 0b1010_0011;
pub const OPC_CMP: u8 = 0b1010_0111;

#[inline]
pub fn bits(v: u8, hi: u8, lo: u8) -> u8 {
    (v >> lo) & ((1u16 << (hi - lo + 1)) - 1) as u8
}

/// Operand bytes following `opcode`.
#[inline]
pub fn operand_count(opcode: u8) -> u8 {
    bits(opcode, 7, 6)
}
