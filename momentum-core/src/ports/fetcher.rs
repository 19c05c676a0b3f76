// momentum-core/src/ports/fetcher.rs

// Where snapshots come from. The engine only knows it can ask for the
// current state of a project; live APIs, replay files and mocks plug in here.

use crate::domain::{MomentumData, ProjectConfig};
use crate::error::MomentumError;
use async_trait::async_trait;

#[async_trait]
pub trait MomentumFetcher: Send + Sync {
    /// Current cross-domain snapshot for `project`.
    async fn fetch(&self, project: &ProjectConfig) -> Result<MomentumData, MomentumError>;
}
