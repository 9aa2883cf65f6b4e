//! Parameter resolution — pure data transformation.
//!
//! Combines parent-exported outputs with the operator's persisted overrides
//! and derives the parameter list submitted with a creation request. No
//! knowledge of the remote API or the filesystem.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::error::TemplateError;
use crate::domain::stack::Parameter;

/// Keys of the parameters declared by a stack template.
///
/// The template is a JSON document; its optional top-level `Parameters`
/// object names the inputs the stack accepts. A template with no
/// `Parameters` section accepts none.
///
/// # Errors
///
/// Returns `TemplateError::Invalid` if the body is not a JSON object.
pub fn template_parameter_keys(template_body: &str) -> Result<BTreeSet<String>, TemplateError> {
    let doc: serde_json::Value = serde_json::from_str(template_body)
        .map_err(|e| TemplateError::Invalid(e.to_string()))?;
    let root = doc
        .as_object()
        .ok_or_else(|| TemplateError::Invalid("template root is not an object".to_owned()))?;
    Ok(root
        .get("Parameters")
        .and_then(serde_json::Value::as_object)
        .map(|params| params.keys().cloned().collect())
        .unwrap_or_default())
}

/// Merge parent-exported outputs into the existing override map.
///
/// Only outputs whose key is a declared template parameter are imported, and
/// an existing override is never replaced by a parent value — overrides carry
/// operator intent across repeated runs. The result is a superset of the
/// existing overrides.
#[must_use]
pub fn import_parent_outputs(
    parent_outputs: &BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
    template_keys: &BTreeSet<String>,
) -> BTreeMap<String, String> {
    let mut merged = overrides.clone();
    for (key, value) in parent_outputs {
        if template_keys.contains(key) && !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Derive the submitted parameter list from the merged override map.
///
/// One entry per merged key the template declares, in stable key order. Keys
/// the template does not declare are kept in the file for the operator but
/// never submitted — the remote API rejects undeclared parameters.
#[must_use]
pub fn parameter_list(
    merged: &BTreeMap<String, String>,
    template_keys: &BTreeSet<String>,
) -> Vec<Parameter> {
    merged
        .iter()
        .filter(|(key, _)| template_keys.contains(*key))
        .map(|(key, value)| Parameter {
            key: key.clone(),
            value: value.clone(),
        })
        .collect()
}
