pub mod prompt;
pub mod render;

pub use prompt::{LineSource, Prompt, ScriptedLines};
pub use render::Palette;
