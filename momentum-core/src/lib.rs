// momentum-core/src/lib.rs

#![allow(missing_docs)]
// 1. Memory safety
#![deny(unsafe_code)]
// 2. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 3. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the outside world: snapshot fetchers, clocks.
pub mod ports;

// 2. Domain (Business core)
// Snapshots, scoring, anomaly detection, rolling series.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Config files, snapshot replay, template rendering.
pub mod infrastructure;

// 4. Application (Use Cases)
// Tick orchestration and narrative context assembly.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::MomentumError;
