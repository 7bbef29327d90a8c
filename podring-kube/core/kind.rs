use kube::api::ApiResource;
use kube::core::GroupVersionKind;
use std::fmt::Display;
use std::str::FromStr;

#[cfg(test)]
#[path = "./kind.tests.rs"]
mod kind_tests;

/// Error returned when a string does not name any supported workload kind.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unsupported workload kind: '{0}'")]
pub struct ParseKindError(pub String);

/// Workload controllers that can be presented as a pod ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Pod,
    Job,
    CronJob,
    ReplicaSet,
    ReplicationController,
    Deployment,
    DeploymentConfig,
    StatefulSet,
    DaemonSet,
    Revision,
}

impl WorkloadKind {
    /// All supported workload kinds.
    pub const ALL: [WorkloadKind; 10] = [
        WorkloadKind::Pod,
        WorkloadKind::Job,
        WorkloadKind::CronJob,
        WorkloadKind::ReplicaSet,
        WorkloadKind::ReplicationController,
        WorkloadKind::Deployment,
        WorkloadKind::DeploymentConfig,
        WorkloadKind::StatefulSet,
        WorkloadKind::DaemonSet,
        WorkloadKind::Revision,
    ];

    /// Returns kind name as it appears in the resource's `kind` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Pod => "Pod",
            WorkloadKind::Job => "Job",
            WorkloadKind::CronJob => "CronJob",
            WorkloadKind::ReplicaSet => "ReplicaSet",
            WorkloadKind::ReplicationController => "ReplicationController",
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::DeploymentConfig => "DeploymentConfig",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::DaemonSet => "DaemonSet",
            WorkloadKind::Revision => "Revision",
        }
    }

    /// Returns API group of the kind (empty for the core group).
    pub fn group(&self) -> &'static str {
        match self {
            WorkloadKind::Pod | WorkloadKind::ReplicationController => "",
            WorkloadKind::Job | WorkloadKind::CronJob => "batch",
            WorkloadKind::ReplicaSet
            | WorkloadKind::Deployment
            | WorkloadKind::StatefulSet
            | WorkloadKind::DaemonSet => "apps",
            WorkloadKind::DeploymentConfig => "apps.openshift.io",
            WorkloadKind::Revision => "serving.knative.dev",
        }
    }

    /// Returns API version of the kind.
    pub fn version(&self) -> &'static str {
        "v1"
    }

    /// Returns lowercase plural resource name.
    pub fn plural(&self) -> &'static str {
        match self {
            WorkloadKind::Pod => "pods",
            WorkloadKind::Job => "jobs",
            WorkloadKind::CronJob => "cronjobs",
            WorkloadKind::ReplicaSet => "replicasets",
            WorkloadKind::ReplicationController => "replicationcontrollers",
            WorkloadKind::Deployment => "deployments",
            WorkloadKind::DeploymentConfig => "deploymentconfigs",
            WorkloadKind::StatefulSet => "statefulsets",
            WorkloadKind::DaemonSet => "daemonsets",
            WorkloadKind::Revision => "revisions",
        }
    }

    /// Returns short names accepted on the command line.
    pub fn short_names(&self) -> &'static [&'static str] {
        match self {
            WorkloadKind::Pod => &["po"],
            WorkloadKind::Job => &[],
            WorkloadKind::CronJob => &["cj"],
            WorkloadKind::ReplicaSet => &["rs"],
            WorkloadKind::ReplicationController => &["rc"],
            WorkloadKind::Deployment => &["deploy"],
            WorkloadKind::DeploymentConfig => &["dc"],
            WorkloadKind::StatefulSet => &["sts"],
            WorkloadKind::DaemonSet => &["ds"],
            WorkloadKind::Revision => &["rev"],
        }
    }

    /// Returns [`ApiResource`] that can be used to build a dynamic API for this kind.
    pub fn api_resource(&self) -> ApiResource {
        let gvk = GroupVersionKind::gvk(self.group(), self.version(), self.as_str());
        ApiResource::from_gvk_with_plural(&gvk, self.plural())
    }

    /// Returns the resource collection that holds workloads of this kind in a pod ring resource set.\
    /// **Note** that only kinds with a collection can be transformed into pod ring data.
    pub fn collection(&self) -> Option<ResourceCollection> {
        match self {
            WorkloadKind::Pod => Some(ResourceCollection::Pods),
            WorkloadKind::ReplicaSet => Some(ResourceCollection::ReplicaSets),
            WorkloadKind::ReplicationController => Some(ResourceCollection::ReplicationControllers),
            WorkloadKind::Deployment => Some(ResourceCollection::Deployments),
            WorkloadKind::DeploymentConfig => Some(ResourceCollection::DeploymentConfigs),
            WorkloadKind::StatefulSet => Some(ResourceCollection::StatefulSets),
            WorkloadKind::DaemonSet => Some(ResourceCollection::DaemonSets),
            WorkloadKind::Job | WorkloadKind::CronJob | WorkloadKind::Revision => None,
        }
    }

    /// Returns `true` if a horizontal pod autoscaler can target this kind.
    pub fn is_autoscalable(&self) -> bool {
        matches!(
            self,
            WorkloadKind::ReplicaSet
                | WorkloadKind::ReplicationController
                | WorkloadKind::Deployment
                | WorkloadKind::DeploymentConfig
                | WorkloadKind::StatefulSet
        )
    }

    fn matches(&self, value: &str) -> bool {
        let name = value.split_once('.').map_or(value, |(name, _)| name);
        name.eq_ignore_ascii_case(self.as_str())
            || name.eq_ignore_ascii_case(self.plural())
            || self.short_names().iter().any(|s| name.eq_ignore_ascii_case(s))
    }
}

impl Display for WorkloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadKind {
    type Err = ParseKindError;

    /// Parses kind name, plural name or short name (case insensitive), optionally followed by a group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkloadKind::ALL
            .into_iter()
            .find(|kind| kind.matches(s))
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

/// Named collections of resources that make up a pod ring resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCollection {
    Pods,
    ReplicaSets,
    ReplicationControllers,
    Deployments,
    DeploymentConfigs,
    StatefulSets,
    DaemonSets,
}

impl ResourceCollection {
    /// Returns collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCollection::Pods => "pods",
            ResourceCollection::ReplicaSets => "replicaSets",
            ResourceCollection::ReplicationControllers => "replicationControllers",
            ResourceCollection::Deployments => "deployments",
            ResourceCollection::DeploymentConfigs => "deploymentConfigs",
            ResourceCollection::StatefulSets => "statefulSets",
            ResourceCollection::DaemonSets => "daemonSets",
        }
    }
}

impl Display for ResourceCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
