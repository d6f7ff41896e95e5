// ls8/program/loader.rs
use std::{fs, io, path::Path};

use tracing::info;

use crate::ls8::{errors::LoadError, memory::Bus};

/// Turns LS-8 program text into bytes.
///
/// One base-2 byte literal per line; `#` starts a comment and lines left
/// empty after stripping it are skipped.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let code = raw.split('#').next().unwrap_or("").trim();
        if code.is_empty() {
            continue;
        }
        let b = u8::from_str_radix(code, 2).map_err(|_| LoadError::Parse {
            line: idx + 1,
            text: code.to_string(),
        })?;
        bytes.push(b);
    }
    Ok(bytes)
}

pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
        _ => LoadError::Io { path: path.to_path_buf(), source: e },
    })?;
    let bytes = parse_program(&text)?;
    info!(bytes = bytes.len(), path = %path.display(), "program read");
    Ok(bytes)
}

/// Loads raw bytes at `base`.
pub fn load_bytes(mem: &mut impl Bus, base: usize, bytes: &[u8]) -> Result<(), LoadError> {
    let capacity = mem.capacity();
    let len = base + bytes.len();
    if len > capacity {
        return Err(LoadError::TooLarge { len, capacity });
    }
    for (addr, &b) in (base..).zip(bytes) {
        mem.store8(addr, b).map_err(|_| LoadError::TooLarge { len, capacity })?;
    }
    Ok(())
}
