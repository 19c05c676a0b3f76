pub mod replay;
pub mod snapshots;

pub use replay::{ReplayClock, ReplayFetcher};
pub use snapshots::load_snapshots;
