pub mod loader;

pub use loader::{load_bytes, read_program};
