//! Training statistics.

/// Statistics for one completed episode
#[derive(Debug, Clone)]
pub struct EpisodeStats {
    /// Episode index, starting at zero
    pub episode: usize,
    /// Number of interaction steps taken
    pub steps: usize,
    /// Sum of rewards over the episode
    pub total_reward: f64,
    /// Whether the episode ended on a terminal transition rather than the
    /// step cap
    pub terminated: bool,
}

/// Per-episode statistics accumulated over a training run
#[derive(Debug, Clone, Default)]
pub struct TrainingMetrics {
    episodes: Vec<EpisodeStats>,
}

impl TrainingMetrics {
    /// Create an empty metrics accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed episode
    pub fn record(&mut self, stats: EpisodeStats) {
        self.episodes.push(stats);
    }

    /// Number of recorded episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether any episodes have been recorded
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// All recorded episodes, in order
    pub fn episodes(&self) -> &[EpisodeStats] {
        &self.episodes
    }

    /// Mean episode return
    pub fn mean_return(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(|e| e.total_reward).sum::<f64>() / self.episodes.len() as f64
    }

    /// Best episode return
    pub fn best_return(&self) -> f64 {
        self.episodes
            .iter()
            .map(|e| e.total_reward)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Mean episode length in steps
    pub fn mean_steps(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().map(|e| e.steps).sum::<usize>() as f64
            / self.episodes.len() as f64
    }

    /// Fraction of episodes that ended on a terminal transition
    pub fn termination_rate(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        self.episodes.iter().filter(|e| e.terminated).count() as f64
            / self.episodes.len() as f64
    }
}
