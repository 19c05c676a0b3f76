// momentum-core/src/application/mod.rs

pub mod agent;
pub mod context;
pub mod ports;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use momentum_core::application::{MomentumAgent, MomentumReport};`

pub use agent::{FALLBACK_CONFIDENCE, MomentumAgent, MomentumReport};
pub use context::{MOMENTUM_CONTEXT_TEMPLATE, build_context, format_momentum_context};
pub use ports::ContextRenderer;
