use kube::api::DynamicObject;
use podring_kube::{ParseKindError, WorkloadKind, WorkloadResources};
use serde::Deserialize;
use std::path::Path;

#[cfg(test)]
#[path = "./snapshot.tests.rs"]
mod snapshot_tests;

/// Possible errors when loading a snapshot file.
#[derive(thiserror::Error, Debug)]
pub enum SnapshotError {
    /// Cannot read snapshot file.
    #[error("cannot read snapshot file")]
    IoError(#[from] std::io::Error),

    /// Cannot deserialize snapshot.
    #[error("cannot deserialize snapshot")]
    SerializationError(#[from] serde_yaml::Error),

    /// Snapshot does not name a supported workload kind.
    #[error(transparent)]
    KindError(#[from] ParseKindError),
}

/// Workload captured in a YAML document.\
/// **Note** that `kind` can be omitted when the workload object carries its own `kind`.
#[derive(Deserialize)]
struct Snapshot {
    kind: Option<String>,
    workload: DynamicObject,
    #[serde(default)]
    pods: Vec<DynamicObject>,
    #[serde(default)]
    autoscaler: Option<DynamicObject>,
}

/// Loads workload resources from the snapshot file.
pub async fn load(path: &Path) -> Result<WorkloadResources, SnapshotError> {
    let snapshot = tokio::fs::read_to_string(path).await?;
    parse(&snapshot)
}

/// Parses workload resources from the YAML snapshot.
pub fn parse(snapshot: &str) -> Result<WorkloadResources, SnapshotError> {
    let snapshot = serde_yaml::from_str::<Snapshot>(snapshot)?;
    let kind = snapshot
        .kind
        .as_deref()
        .or_else(|| snapshot.workload.types.as_ref().map(|t| t.kind.as_str()))
        .unwrap_or_default()
        .parse::<WorkloadKind>()?;

    Ok(WorkloadResources {
        kind,
        workload: snapshot.workload,
        pods: snapshot.pods,
        autoscaler: snapshot.autoscaler,
    })
}
