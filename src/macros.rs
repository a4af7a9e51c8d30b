/// Compile a regex literal once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Time one pipeline stage and, when a trace is being collected, record the
/// stage's output under `$name`.
macro_rules! stage {
    ($trace:expr, $name:expr, $body:expr) => {{
        let started = std::time::Instant::now();
        let text: String = $body;
        tracing::trace!(stage = $name, text = %text, "stage complete");
        if let Some(trace) = $trace.as_mut() {
            trace.push($crate::engine::StageMetrics::new($name, text.clone(), started.elapsed()));
        }
        text
    }};
}
