// momentum-core/src/ports/mod.rs

pub mod clock;
pub mod fetcher;

pub use clock::{Clock, FixedClock, SystemClock};
pub use fetcher::MomentumFetcher;
