use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes popped from the fringe and expanded
    expanded_nodes: usize,
    /// Number of successor nodes added to the fringe
    generated_nodes: usize,
    /// Number of successors skipped as duplicates
    pruned_nodes: usize,
    /// Largest fringe size seen, the fringe starts out with the root node
    max_fringe_size: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            max_fringe_size: 1,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    /// Record that a node was expanded, leaving the fringe at `fringe_size`.
    pub fn register_expansion(&mut self, fringe_size: usize) {
        self.expanded_nodes += 1;
        self.max_fringe_size = self.max_fringe_size.max(fringe_size);
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_pruned_nodes(&mut self, num_nodes: usize) {
        self.pruned_nodes += num_nodes;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn max_fringe_size(&self) -> usize {
        self.max_fringe_size
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn log(&self) {
        let memory_usage_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        info!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            max_fringe_size = self.max_fringe_size,
            memory_usage_mb = memory_usage_mb,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(
            search_duration = %humantime::format_duration(self.elapsed()),
        );
    }
}
