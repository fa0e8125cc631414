//! Scope resolution.
//!
//! A stack's effective configuration is the project-wide mapping with the
//! stack's overrides laid on top.

use std::borrow::Cow;

use tracing::trace;

use crate::core::types::ConfigMap;

/// Overlay `overrides` onto `project`.
///
/// Neither input is modified. When one side is absent or empty the other is
/// returned borrowed; only a real overlay allocates.
pub fn resolve<'a>(
    project: Option<&'a ConfigMap>,
    overrides: Option<&'a ConfigMap>,
) -> Cow<'a, ConfigMap> {
    let project = project.filter(|map| !map.is_empty());
    let overrides = overrides.filter(|map| !map.is_empty());

    match (project, overrides) {
        (project, None) => project.map_or_else(|| Cow::Owned(ConfigMap::new()), Cow::Borrowed),
        (None, Some(overrides)) => Cow::Borrowed(overrides),
        (Some(project), Some(overrides)) => {
            trace!(
                project = project.len(),
                overrides = overrides.len(),
                "merging stack overrides"
            );
            let mut merged = project.clone();
            merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
            Cow::Owned(merged)
        }
    }
}
