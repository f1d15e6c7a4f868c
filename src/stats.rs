use std::fmt;

/// Read-only snapshot of the counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of moves on the solution path (depth of the goal node).
    pub solution_length: u64,
    /// Cumulative move cost of the solution path.
    pub solution_cost: u64,
    /// Number of nodes removed from the frontier, goal included.
    pub nodes_explored: u64,
    /// Largest frontier size observed before a removal.
    pub max_frontier_size: u64,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Length = {} ; Cost = {} ; Time = {} ; Space = {}",
            self.solution_length, self.solution_cost, self.nodes_explored, self.max_frontier_size
        )
    }
}

/// Accumulates search counters.
///
/// Only a running strategy writes to the collector; callers read the result through
/// `StatsCollector::summary`.
#[derive(Clone, Debug, Default)]
pub struct StatsCollector {
    statistics: SearchStatistics,
}

impl StatsCollector {
    /// Creates a collector with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_explored_count(&mut self, count: u64) {
        self.statistics.nodes_explored += count;
    }

    #[inline]
    pub fn add_solution_path_length(&mut self, length: u64) {
        self.statistics.solution_length += length;
    }

    #[inline]
    pub fn add_solution_cost(&mut self, cost: u64) {
        self.statistics.solution_cost += cost;
    }

    /// Keeps the larger of the stored peak and `size`.
    #[inline]
    pub fn record_max_frontier_size(&mut self, size: usize) {
        self.statistics.max_frontier_size = self.statistics.max_frontier_size.max(size as u64);
    }

    /// Nodes explored so far.
    pub fn nodes_explored(&self) -> u64 {
        self.statistics.nodes_explored
    }

    /// Snapshot of all counters.
    pub fn summary(&self) -> SearchStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collector_is_zeroed() {
        let collector = StatsCollector::new();
        assert_eq!(collector.summary(), SearchStatistics::default());
    }

    #[test]
    fn test_counters_accumulate() {
        let mut collector = StatsCollector::new();
        collector.add_explored_count(1);
        collector.add_explored_count(1);
        collector.add_solution_path_length(5);
        collector.add_solution_cost(17);
        assert_eq!(collector.nodes_explored(), 2);
        let summary = collector.summary();
        assert_eq!(summary.solution_length, 5);
        assert_eq!(summary.solution_cost, 17);
    }

    #[test]
    fn test_max_frontier_keeps_peak() {
        let mut collector = StatsCollector::new();
        collector.record_max_frontier_size(3);
        collector.record_max_frontier_size(10);
        collector.record_max_frontier_size(4);
        assert_eq!(collector.summary().max_frontier_size, 10);
    }

    #[test]
    fn test_display() {
        let statistics = SearchStatistics {
            solution_length: 5,
            solution_cost: 17,
            nodes_explored: 43,
            max_frontier_size: 30,
        };
        assert_eq!(
            statistics.to_string(),
            "Length = 5 ; Cost = 17 ; Time = 43 ; Space = 30"
        );
    }
}
