// momentum/src/commands/mod.rs

pub mod breakdown;
pub mod display;
pub mod run;
pub mod series;
pub mod weights;
