// ls8/registers.rs
use super::errors::Ls8Error;

pub const REGISTER_COUNT: usize = 8;
/// R7 holds the stack pointer.
pub const SP: u8 = 7;
/// Initial top of stack; the stack grows down from here.
pub const STACK_TOP: u8 = 0xF4;
/// Equal bit of the flags register.
pub const FL_EQ: u8 = 0b0000_0001;

#[derive(Clone)]
pub struct Cpu {
    pub reg: [u8; REGISTER_COUNT], // R0..R7
    pub pc: usize,
    pub fl: u8,
    /// emulated STDOUT, drained by whoever drives the loop
    pub stdout: Vec<u8>,
}

impl Default for Cpu {
    fn default() -> Self {
        let mut reg = [0; REGISTER_COUNT];
        reg[SP as usize] = STACK_TOP;
        Self { reg, pc: 0, fl: 0, stdout: Vec::new() }
    }
}

impl Cpu {
    #[inline]
    pub fn read(&self, r: u8) -> Result<u8, Ls8Error> {
        self.reg.get(r as usize).copied().ok_or(Ls8Error::InvalidRegister(r))
    }

    #[inline]
    pub fn write(&mut self, r: u8, v: u8) -> Result<(), Ls8Error> {
        let slot = self.reg.get_mut(r as usize).ok_or(Ls8Error::InvalidRegister(r))?;
        *slot = v;
        Ok(())
    }

    #[inline]
    pub fn sp(&self) -> u8 {
        self.reg[SP as usize]
    }

    #[inline]
    pub fn set_sp(&mut self, v: u8) {
        self.reg[SP as usize] = v;
    }

    #[inline]
    pub fn equal(&self) -> bool {
        self.fl & FL_EQ != 0
    }

    /// Takes everything printed so far.
    pub fn take_stdout(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.stdout)
    }
}
