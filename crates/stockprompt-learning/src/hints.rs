//! Human-readable preference hints for the remote proposer.

use stockprompt_core::catalog::ParameterCatalog;

use crate::profile::PreferenceProfile;

/// Summarize liked and disliked values in catalog order.
pub fn preference_hints(catalog: &ParameterCatalog, profile: &PreferenceProfile) -> String {
    if profile.is_empty() {
        return "No preference signal yet.".to_string();
    }

    let liked = section(catalog, |c| profile.liked(c));
    let disliked = section(catalog, |c| profile.disliked(c));

    let mut parts = Vec::new();
    if !liked.is_empty() {
        parts.push(format!("Prefer {}.", liked.join("; ")));
    }
    if !disliked.is_empty() {
        parts.push(format!("Avoid {}.", disliked.join("; ")));
    }
    parts.join(" ")
}

fn section<'p>(catalog: &ParameterCatalog, pick: impl Fn(&str) -> Vec<&'p str>) -> Vec<String> {
    catalog
        .categories()
        .iter()
        .filter_map(|c| {
            let values = pick(&c.name);
            (!values.is_empty()).then(|| format!("{}: {}", c.name, values.join(", ")))
        })
        .collect()
}
