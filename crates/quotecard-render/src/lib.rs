pub mod error;
mod background;
mod fonts;
mod layout;
pub mod renderer;

pub use error::RenderError;
pub use renderer::{CardRenderer, RenderedCard, MAX_FILE_SIZE};
