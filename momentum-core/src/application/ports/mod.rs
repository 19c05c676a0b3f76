pub mod renderer;

pub use renderer::ContextRenderer;
