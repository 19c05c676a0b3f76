// momentum-core/src/infrastructure/adapters/replay.rs

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::{MomentumData, ProjectConfig};
use crate::error::MomentumError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{Clock, MomentumFetcher};

/// Serves recorded snapshots one `fetch` at a time, oldest first.
pub struct ReplayFetcher {
    queue: Mutex<VecDeque<MomentumData>>,
}

impl ReplayFetcher {
    pub fn new(snapshots: Vec<MomentumData>) -> Self {
        Self {
            queue: Mutex::new(snapshots.into()),
        }
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl MomentumFetcher for ReplayFetcher {
    async fn fetch(&self, project: &ProjectConfig) -> Result<MomentumData, MomentumError> {
        let mut queue = self.queue.lock().await;
        let next = queue
            .pop_front()
            .ok_or(InfrastructureError::SnapshotsExhausted)?;
        debug!(project = %project.name, timestamp = next.timestamp, left = queue.len(), "Replaying snapshot");
        Ok(next)
    }
}

/// Clock driven by the replay loop: each tick runs at the timestamp of the
/// snapshot being replayed. Clones share the same instant.
#[derive(Debug, Clone, Default)]
pub struct ReplayClock(Arc<AtomicI64>);

impl ReplayClock {
    pub fn new(start_ms: i64) -> Self {
        Self(Arc::new(AtomicI64::new(start_ms)))
    }

    pub fn advance_to(&self, ms: i64) {
        self.0.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ReplayClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}
