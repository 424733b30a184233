pub mod handler;

pub use handler::{InputMapper, KeyAction};
