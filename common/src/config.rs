use std::time::Duration;

/// Number of candidates resolved at the same time unless told otherwise.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Upper bound on a single forward lookup.
pub const DEFAULT_RESOLVE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum number of candidates in flight at once. Never below one.
    pub concurrency: usize,
    /// How long a lookup may block before the candidate is treated as unresolved.
    pub resolve_timeout: Duration,
    /// 0 prints everything, 1 hides headers and banner, 2 prints results only.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            resolve_timeout: DEFAULT_RESOLVE_TIMEOUT,
            quiet: 0,
            no_banner: false,
        }
    }
}
