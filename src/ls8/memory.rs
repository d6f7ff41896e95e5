// ls8/memory.rs
use super::errors::Ls8Error;

pub const MEMORY_SIZE: usize = 256;

/// Byte-addressed storage the CPU fetches from and the stack lives in.
pub trait Bus {
    fn load8(&self, addr: usize) -> Result<u8, Ls8Error>;
    fn store8(&mut self, addr: usize, value: u8) -> Result<(), Ls8Error>;

    /// Non-failing read for observers; `None` past the end.
    fn peek(&self, addr: usize) -> Option<u8> {
        self.load8(addr).ok()
    }

    fn capacity(&self) -> usize;
}

#[derive(Clone)]
pub struct Ram {
    mem: Vec<u8>,
}

impl Ram {
    pub fn new() -> Self {
        Self { mem: vec![0; MEMORY_SIZE] }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Ram {
    #[inline]
    fn load8(&self, addr: usize) -> Result<u8, Ls8Error> {
        self.mem.get(addr).copied().ok_or(Ls8Error::Bus { addr })
    }

    #[inline]
    fn store8(&mut self, addr: usize, value: u8) -> Result<(), Ls8Error> {
        let cell = self.mem.get_mut(addr).ok_or(Ls8Error::Bus { addr })?;
        *cell = value;
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.mem.len()
    }
}
