// momentum-core/src/domain/series.rs

use std::collections::{HashMap, VecDeque};

use crate::domain::metrics::MomentumData;
use crate::domain::scoring::MAX_SERIES_LEN;

/// Rolling, per-project snapshot history.
///
/// Each project owns an independent buffer capped at `capacity` points,
/// evicting the oldest first.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    capacity: usize,
    series: HashMap<String, VecDeque<MomentumData>>,
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::with_capacity(MAX_SERIES_LEN)
    }
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            series: HashMap::new(),
        }
    }

    /// Appends `point`, keeping the buffer ordered by timestamp.
    /// Returns the buffer length after eviction.
    pub fn append(&mut self, project_id: &str, point: MomentumData) -> usize {
        let buffer = self.series.entry(project_id.to_string()).or_default();

        // Ticks normally arrive in order; late points are slotted in place.
        let position = buffer.partition_point(|d| d.timestamp <= point.timestamp);
        buffer.insert(position, point);

        while buffer.len() > self.capacity {
            buffer.pop_front();
        }
        buffer.len()
    }

    /// Contiguous view of a project's series (empty if unknown).
    pub fn series(&mut self, project_id: &str) -> &[MomentumData] {
        match self.series.get_mut(project_id) {
            Some(buffer) => buffer.make_contiguous(),
            None => &[],
        }
    }

    pub fn len(&self, project_id: &str) -> usize {
        self.series.get(project_id).map_or(0, VecDeque::len)
    }

    pub fn is_empty(&self, project_id: &str) -> bool {
        self.len(project_id) == 0
    }

    pub fn latest(&self, project_id: &str) -> Option<&MomentumData> {
        self.series.get(project_id).and_then(VecDeque::back)
    }

    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn clear(&mut self, project_id: &str) {
        self.series.remove(project_id);
    }
}
