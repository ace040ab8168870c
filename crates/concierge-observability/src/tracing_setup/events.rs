//! Structured log events for each decision the engine makes.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log a belief-state update.
pub fn belief_updated(leader: &str, margin: f64, prior_scale: f64, language_mass: f64) {
    tracing::info!(
        event = "belief_updated",
        leader = %leader,
        margin = margin,
        prior_scale = prior_scale,
        language_mass = language_mass,
        "belief updated"
    );
}

/// Log the resolver outcome. `primary` is `None` when inconclusive.
pub fn archetype_resolved(primary: Option<&str>, margin: f64, override_used: bool, signals: usize) {
    tracing::info!(
        event = "archetype_resolved",
        primary = primary.unwrap_or("none"),
        margin = margin,
        override_used = override_used,
        signals = signals,
        "archetype resolved"
    );
}

/// Log a retrieval-gate decision.
pub fn retrieval_gated(retrieve: bool, reason: &str, matched: Option<&str>) {
    tracing::info!(
        event = "retrieval_gated",
        retrieve = retrieve,
        reason = %reason,
        matched = matched.unwrap_or(""),
        "retrieval gated"
    );
}

/// Log a reply replaced by a safe message.
pub fn guardrail_blocked(category: &str, rule_ids: &[String]) {
    tracing::warn!(
        event = "guardrail_blocked",
        category = %category,
        rule_ids = ?rule_ids,
        "reply blocked"
    );
}

/// Log disclosure annotations added to a reply.
pub fn guardrail_annotated(label_injected: bool, qualifier_injected: bool, rule_ids: &[String]) {
    tracing::info!(
        event = "guardrail_annotated",
        label_injected = label_injected,
        qualifier_injected = qualifier_injected,
        rule_ids = ?rule_ids,
        "reply annotated"
    );
}

/// Log a guardrail pattern that failed to compile.
pub fn pattern_degraded(pattern: &str, group: &str, reason: &str) {
    tracing::warn!(
        event = "pattern_degraded",
        pattern = %pattern,
        group = %group,
        reason = %reason,
        "guardrail pattern degraded"
    );
}
