use k8s_openapi::serde_json::{Map, Value};
use kube::ResourceExt;
use kube::api::DynamicObject;

#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Gets [`DynamicObject`]'s UID.
pub fn get_object_uid(object: &DynamicObject) -> String {
    object.uid().unwrap_or_else(|| {
        format!(
            "_{}{}_",
            object.name_any(),
            object.metadata.namespace.as_deref().unwrap_or_default()
        )
    })
}

/// Converts labels map to string.
pub fn labels_to_string(labels: &Map<String, Value>) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v.as_str().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Returns pod label selector of the workload.\
/// **Note** that both `spec.selector.matchLabels` and the plain map selector used by replication controllers
/// are supported, match expressions are ignored.
pub fn get_pod_selector(object: &DynamicObject) -> Option<String> {
    let selector = &object.data["spec"]["selector"];
    let labels = selector["matchLabels"].as_object().or_else(|| {
        selector
            .as_object()
            .filter(|s| !s.contains_key("matchLabels") && !s.contains_key("matchExpressions"))
    })?;

    if labels.is_empty() {
        None
    } else {
        Some(labels_to_string(labels))
    }
}

/// Returns `true` if `object` has an owner reference pointing to `owner_uid`.
pub fn is_owned_by(object: &DynamicObject, owner_uid: &str) -> bool {
    object.owner_references().iter().any(|o| o.uid == owner_uid)
}

/// Returns annotation value parsed as integer.
pub fn get_annotation_i64(object: &DynamicObject, key: &str) -> Option<i64> {
    object.annotations().get(key).and_then(|v| v.trim().parse().ok())
}

/// Returns integer value found under `path` in the object's data.
pub fn get_i64(object: &DynamicObject, path: &[&str]) -> Option<i64> {
    path.iter().try_fold(&object.data, |value, key| value.get(key))?.as_i64()
}
