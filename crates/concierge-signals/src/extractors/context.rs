//! Context priors: explicit mode, current page, and viewed model.

use std::sync::LazyLock;

use concierge_core::{DeltaVector, TurnContext};

use crate::catalogue::context::{MODEL_FAMILIES, MODE_PRIORS, PAGE_PRIORS};
use crate::engine::{FiredSignal, SignalSource};
use crate::text::{tokenize, Phrase};

static PAGE_PHRASES: LazyLock<Vec<Vec<Phrase>>> = LazyLock::new(|| {
    PAGE_PRIORS
        .iter()
        .map(|p| p.segments.iter().map(|s| Phrase::new(s)).collect())
        .collect()
});

/// Apply mode, page, and model priors to `delta`.
pub fn extract(ctx: &TurnContext, delta: &mut DeltaVector, fired: &mut Vec<FiredSignal>) {
    if let Some(mode) = ctx.mode.as_deref() {
        extract_mode(mode, delta, fired);
    }
    if let Some(url) = ctx.page_url.as_deref() {
        extract_page(url, delta, fired);
    }
    if let Some(model) = ctx.model_id.as_deref() {
        extract_model(model, delta, fired);
    }
}

fn extract_mode(mode: &str, delta: &mut DeltaVector, fired: &mut Vec<FiredSignal>) {
    let mode = mode.trim().to_ascii_lowercase();
    let Some(prior) = MODE_PRIORS.iter().find(|m| m.mode == mode) else {
        return;
    };
    for &(archetype, weight) in prior.contributions {
        delta.add(archetype, weight);
        fired.push(FiredSignal::new(
            format!("{}.{}", prior.id, archetype),
            archetype,
            weight,
            SignalSource::Mode,
        ));
    }
}

fn extract_page(url: &str, delta: &mut DeltaVector, fired: &mut Vec<FiredSignal>) {
    let tokens = tokenize(page_path(url));
    if tokens.is_empty() {
        return;
    }
    for (prior, phrases) in PAGE_PRIORS.iter().zip(PAGE_PHRASES.iter()) {
        if phrases.iter().any(|p| p.matches(&tokens)) {
            delta.add(prior.archetype, prior.weight);
            fired.push(FiredSignal::new(
                prior.id,
                prior.archetype,
                prior.weight,
                SignalSource::Page,
            ));
        }
    }
}

fn extract_model(model_id: &str, delta: &mut DeltaVector, fired: &mut Vec<FiredSignal>) {
    let tokens = tokenize(model_id);
    for family in MODEL_FAMILIES {
        if family.names.iter().any(|n| tokens.iter().any(|t| t == n)) {
            delta.add(family.archetype, family.weight);
            fired.push(FiredSignal::new(
                family.id,
                family.archetype,
                family.weight,
                SignalSource::Model,
            ));
        }
    }
}

/// Path portion of a URL: scheme and host removed, query and fragment
/// dropped. Bare paths pass through unchanged.
pub fn page_path(url: &str) -> &str {
    let url = url.trim();
    let without_scheme = match url.find("://") {
        Some(idx) => {
            let rest = &url[idx + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        None => url,
    };
    let end = without_scheme
        .find(['?', '#'])
        .unwrap_or(without_scheme.len());
    &without_scheme[..end]
}
