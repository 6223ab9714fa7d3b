/// Renderer module - backend seams and deferred command recording

// Module declarations
pub mod color;
pub mod handles;
pub mod texture;
pub mod property;
pub mod command_encoder;
pub mod command_sequence;
pub mod backend;

// Re-export everything
pub use color::*;
pub use handles::*;
pub use texture::*;
pub use property::*;
pub use command_encoder::*;
pub use command_sequence::*;
pub use backend::*;

// Mock backend for tests (no GPU required)
#[cfg(test)]
pub mod mock_backend;
