/// Receives a notification each time a candidate finishes processing.
///
/// Purely observational: implementations must not influence the run.
/// `completed` grows by exactly one per call and ends at `total`.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, completed: usize, total: usize);
}

impl<F> ProgressObserver for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn on_progress(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}
