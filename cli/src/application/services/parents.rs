//! Parent stack output resolution.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::application::ports::StackApi;

/// Collect the outputs of every parent stack into one candidate map.
///
/// Parents are queried sequentially, in list order. A parent that does not
/// exist, or exists with no recorded outputs, contributes nothing — a parent
/// may legitimately export zero outputs. When two parents export the same
/// key, the parent later in the list wins.
///
/// # Errors
///
/// Remote failures other than "stack does not exist" propagate.
pub async fn resolve(
    api: &impl StackApi,
    parent_names: &[String],
) -> Result<BTreeMap<String, String>> {
    let mut outputs = BTreeMap::new();
    for name in parent_names {
        let Some(description) = api.describe_stack(name).await? else {
            continue;
        };
        for output in description.outputs {
            outputs.insert(output.key, output.value);
        }
    }
    Ok(outputs)
}
