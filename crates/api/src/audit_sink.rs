use labtrack_core::audit::{AuditEntry, AuditSink};

/// Emits every audit entry as a structured `tracing` event on the `audit`
/// target. Route the target to a dedicated writer with the subscriber filter.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, entry: &AuditEntry) {
        tracing::info!(
            target: "audit",
            actor_role = entry.actor_role(),
            actor_id = entry.actor_id(),
            action = entry.action(),
            object_name = entry.object_name(),
            object_id = entry.object_id(),
            status = entry.status(),
            "Audit entry recorded"
        );
    }
}
