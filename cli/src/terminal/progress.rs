use indicatif::ProgressStyle;
use nimbus_common::progress::ProgressObserver;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TEMPLATE: &str = "{spinner:.blue} Progress [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})";

/// Drives the progress bar attached to a run's span.
pub struct SpanProgress {
    span: Span,
}

impl SpanProgress {
    pub fn new(span: Span, total: usize) -> Self {
        let style: ProgressStyle = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▆▁");
        span.pb_set_style(&style);
        span.pb_set_length(total as u64);
        Self { span }
    }
}

impl ProgressObserver for SpanProgress {
    fn on_progress(&self, _completed: usize, _total: usize) {
        self.span.pb_inc(1);
    }
}
