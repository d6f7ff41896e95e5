use std::path::PathBuf;

use thiserror::Error;

use super::alu::AluOp;

/// Errors raised while the LS-8 machine is executing.
#[derive(Error, Debug)]
pub enum Ls8Error {
    /// No handler is registered for the fetched opcode.
    #[error("Instruction unknown {0}")]
    UnknownInstruction(u8),

    /// Memory access outside `0..MEMORY_SIZE`.
    #[error("Bus error: address {addr:#06x} out of range")]
    Bus { addr: usize },

    /// Register operand outside `R0..R7`.
    #[error("Invalid register R{0}")]
    InvalidRegister(u8),

    /// The dispatcher asked the ALU for an operation it does not implement.
    #[error("Unsupported ALU operation: {0}")]
    UnsupportedAluOp(AluOp),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while turning program text into memory contents.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{} was not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: invalid byte literal `{text}`")]
    Parse { line: usize, text: String },

    #[error("program is {len} bytes, memory holds {capacity}")]
    TooLarge { len: usize, capacity: usize },
}
