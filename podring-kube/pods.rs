use k8s_openapi::serde_json::Value;
use kube::ResourceExt;
use kube::api::DynamicObject;
use std::fmt::Display;

#[cfg(test)]
#[path = "./pods.tests.rs"]
mod pods_tests;

pub const PHASE_PENDING: &str = "Pending";
pub const PHASE_RUNNING: &str = "Running";

/// Derived status of a pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodStatus {
    Running,
    NotReady,
    Pending,
    Succeeded,
    Failed,
    CrashLoopBackOff,
    Terminating,
    Unknown,
}

impl PodStatus {
    /// Classifies pod represented by the [`DynamicObject`].
    pub fn from_object(object: &DynamicObject) -> Self {
        if object.metadata.deletion_timestamp.is_some() {
            return PodStatus::Terminating;
        }

        let status = &object.data["status"];
        let containers = status["containerStatuses"].as_array().map(Vec::as_slice).unwrap_or_default();
        if containers.iter().any(is_container_looping) {
            return PodStatus::CrashLoopBackOff;
        }

        if containers.iter().any(is_container_failed) {
            return PodStatus::Failed;
        }

        match status["phase"].as_str() {
            Some(PHASE_RUNNING) if containers.iter().all(|c| c["ready"].as_bool().unwrap_or_default()) => {
                PodStatus::Running
            },
            Some(PHASE_RUNNING) => PodStatus::NotReady,
            Some(PHASE_PENDING) => PodStatus::Pending,
            Some("Succeeded") => PodStatus::Succeeded,
            Some("Failed") => PodStatus::Failed,
            _ => PodStatus::Unknown,
        }
    }

    /// Returns `true` if the pod is failing (either failed or in a crash loop).
    pub fn is_failing(&self) -> bool {
        matches!(self, PodStatus::Failed | PodStatus::CrashLoopBackOff)
    }

    /// Returns status as string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            PodStatus::Running => "Running",
            PodStatus::NotReady => "Not Ready",
            PodStatus::Pending => "Pending",
            PodStatus::Succeeded => "Succeeded",
            PodStatus::Failed => "Failed",
            PodStatus::CrashLoopBackOff => "CrashLoopBackOff",
            PodStatus::Terminating => "Terminating",
            PodStatus::Unknown => "Unknown",
        }
    }
}

impl Display for PodStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of a pod used to derive pod ring labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodView {
    pub name: String,
    pub phase: Option<String>,
    pub status: PodStatus,
}

impl PodView {
    /// Creates new [`PodView`] instance.
    pub fn new(name: impl Into<String>, phase: Option<&str>, status: PodStatus) -> Self {
        Self {
            name: name.into(),
            phase: phase.map(String::from),
            status,
        }
    }

    /// Returns `true` if pod's raw phase equals `phase`.
    pub fn is_phase(&self, phase: &str) -> bool {
        self.phase.as_deref() == Some(phase)
    }
}

impl From<&DynamicObject> for PodView {
    fn from(object: &DynamicObject) -> Self {
        Self {
            name: object.name_any(),
            phase: object.data["status"]["phase"].as_str().map(String::from),
            status: PodStatus::from_object(object),
        }
    }
}

fn is_container_failed(container: &Value) -> bool {
    container["state"]["terminated"]["exitCode"]
        .as_i64()
        .is_some_and(|code| code != 0)
}

fn is_container_looping(container: &Value) -> bool {
    container["state"]["waiting"]["reason"].as_str() == Some("CrashLoopBackOff")
}
