pub mod alu;
pub mod arch;
pub mod decoder;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod memory;
pub mod program;
pub mod registers;
pub mod trace;

#[cfg(test)]
mod tests;

pub use errors::LoadError;
pub use memory::Ram;
pub use registers::Cpu;
