pub struct MCTSOptions {
    pub(crate) budget: usize,
    pub(crate) exploration_constant: f64,
    pub(crate) progress_every: usize,
}

impl MCTSOptions {
    pub fn new(budget: usize, exploration_constant: f64, progress_every: usize) -> Self {
        MCTSOptions {
            budget,
            exploration_constant,
            progress_every,
        }
    }
}

impl Default for MCTSOptions {
    fn default() -> Self {
        MCTSOptions::new(1000, 1.0, 100)
    }
}
