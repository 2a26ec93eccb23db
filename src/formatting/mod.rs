//! Rendering documents back to text

pub mod formatter;
mod renderer;
mod syntax;

// Re-export all public symbols
pub use renderer::*;
pub use syntax::*;
