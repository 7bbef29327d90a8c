use kube::api::DynamicObject;

use crate::utils::get_i64;

#[cfg(test)]
#[path = "./workload.tests.rs"]
mod workload_tests;

/// Point-in-time view of a workload controller's replica counts.\
/// **Note** that every count is optional, absent values are treated as zero during label derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadSnapshot {
    pub kind: String,
    pub current_number_scheduled: Option<i64>,
    pub desired_number_scheduled: Option<i64>,
    pub ready_replicas: Option<i64>,
    pub replicas: Option<i64>,
}

impl From<&DynamicObject> for WorkloadSnapshot {
    fn from(object: &DynamicObject) -> Self {
        Self {
            kind: object.types.as_ref().map(|t| t.kind.clone()).unwrap_or_default(),
            current_number_scheduled: get_i64(object, &["status", "currentNumberScheduled"]),
            desired_number_scheduled: get_i64(object, &["status", "desiredNumberScheduled"]),
            ready_replicas: get_i64(object, &["status", "readyReplicas"]),
            replicas: get_i64(object, &["spec", "replicas"]),
        }
    }
}

/// Point-in-time view of a horizontal pod autoscaler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoscalerSnapshot {
    pub desired_replicas: Option<i64>,
    pub current_replicas: Option<i64>,
}

impl AutoscalerSnapshot {
    /// Returns `true` if the autoscaler represented by `object` scales workload `name` of kind `kind`.
    pub fn targets(object: &DynamicObject, kind: &str, name: &str) -> bool {
        let target = &object.data["spec"]["scaleTargetRef"];
        target["kind"].as_str() == Some(kind) && target["name"].as_str() == Some(name)
    }
}

impl From<&DynamicObject> for AutoscalerSnapshot {
    fn from(object: &DynamicObject) -> Self {
        Self {
            desired_replicas: get_i64(object, &["status", "desiredReplicas"]),
            current_replicas: get_i64(object, &["status", "currentReplicas"]),
        }
    }
}
