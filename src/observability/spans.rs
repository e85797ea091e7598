//! Structured span definitions for tool calls.

use std::time::Instant;

use tracing::{Level, Span, span};

/// Span wrapping one MCP tool call.
pub fn tool_span(tool_name: &'static str) -> Span {
    span!(
        Level::INFO,
        "tool.execute",
        tool_name = tool_name,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
        otel.name = format!("tool.{}", tool_name),
    )
}

/// Tool-call span that records outcome and duration when finished.
pub struct ToolCallSpan {
    span: Span,
    start: Instant,
}

impl ToolCallSpan {
    pub fn new(tool_name: &'static str) -> Self {
        Self {
            span: tool_span(tool_name),
            start: Instant::now(),
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn finish(self, success: bool) {
        let duration_ms = self.start.elapsed().as_millis() as u64;
        self.span
            .record("status", if success { "success" } else { "error" });
        self.span.record("duration_ms", duration_ms);
        let _guard = self.span.enter();
        tracing::info!(success, duration_ms, "Tool call finished");
    }
}
