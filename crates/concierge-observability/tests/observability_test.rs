use std::io::Write;
use std::sync::{Arc, Mutex};

use concierge_observability::tracing_setup::{events, spans};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<serde_json::Value> {
    let cap = Capture::default();
    let writer = cap.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    cap.lines()
}

// ── Events ────────────────────────────────────────────────────────────────

#[test]
fn every_event_carries_its_name() {
    let lines = capture(|| {
        events::belief_updated("legacy", 0.11, 0.25, 0.78);
        events::archetype_resolved(Some("legacy"), 0.11, false, 4);
        events::retrieval_gated(true, "domain_signal", Some("sovereign"));
        events::guardrail_blocked("pricing_claim", &["pricing_claim.currency_amount".to_string()]);
        events::guardrail_annotated(true, false, &["annotation.disclosure_label".to_string()]);
        events::pattern_degraded("legal_claim.exempt", "legal_claim", "regex compilation failed");
    });
    let names: Vec<&str> = lines
        .iter()
        .map(|l| l["fields"]["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "belief_updated",
            "archetype_resolved",
            "retrieval_gated",
            "guardrail_blocked",
            "guardrail_annotated",
            "pattern_degraded",
        ]
    );
}

#[test]
fn warnings_use_warn_level() {
    let lines = capture(|| {
        events::guardrail_blocked("legal_claim", &[]);
        events::pattern_degraded("p", "g", "r");
        events::retrieval_gated(false, "small_talk", None);
    });
    let levels: Vec<&str> = lines.iter().map(|l| l["level"].as_str().unwrap()).collect();
    assert_eq!(levels, vec!["WARN", "WARN", "INFO"]);
}

#[test]
fn inconclusive_resolution_logs_none() {
    let lines = capture(|| events::archetype_resolved(None, 0.01, false, 0));
    assert_eq!(lines[0]["fields"]["primary"], "none");
    assert_eq!(lines[0]["fields"]["override_used"], false);
}

// ── Spans ─────────────────────────────────────────────────────────────────

#[test]
fn turn_span_attaches_to_events() {
    let lines = capture(|| {
        let span = concierge_observability::turn_span!("s-42");
        let _guard = span.enter();
        events::retrieval_gated(true, "default_retrieve", None);
    });
    assert_eq!(lines[0]["span"]["name"], spans::names::TURN);
    assert_eq!(lines[0]["span"]["session_id"], "s-42");
}

// ── Init ──────────────────────────────────────────────────────────────────

#[test]
fn init_is_idempotent() {
    concierge_observability::init_tracing_with_filter("warn");
    concierge_observability::init_tracing();
    concierge_observability::init_tracing();
}
