pub mod editing;
pub mod io;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{draft::*, export::*, node::*, store::*, transaction::*};
pub use io::*;
