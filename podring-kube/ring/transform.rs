use kube::ResourceExt;
use kube::api::DynamicObject;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use crate::utils::{get_annotation_i64, get_object_uid, is_owned_by};
use crate::{PodView, ResourceCollection, WorkloadKind};

#[cfg(test)]
#[path = "./transform.tests.rs"]
mod transform_tests;

const DEPLOYMENT_REVISION: &str = "deployment.kubernetes.io/revision";
const DEPLOYMENT_CONFIG_VERSION: &str = "openshift.io/deployment-config.latest-version";

/// Possible errors from transforming resources into pod ring data.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PodRingError {
    /// Workload kind has no resource collection in the pod ring resource set.
    #[error("invalid target resource for kind '{0}'")]
    UnsupportedKind(WorkloadKind),
}

/// Resource set that pod ring data is built from.
#[derive(Default, Debug, Clone)]
pub struct PodRingResources {
    collections: HashMap<ResourceCollection, Vec<DynamicObject>>,
}

impl PodRingResources {
    /// Creates new empty [`PodRingResources`] instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets objects for the specified collection and returns the resource set.
    pub fn with(mut self, collection: ResourceCollection, objects: Vec<DynamicObject>) -> Self {
        self.insert(collection, objects);
        self
    }

    /// Sets objects for the specified collection.
    pub fn insert(&mut self, collection: ResourceCollection, objects: Vec<DynamicObject>) {
        self.collections.insert(collection, objects);
    }

    /// Returns objects of the specified collection.
    pub fn get(&self, collection: ResourceCollection) -> &[DynamicObject] {
        self.collections.get(&collection).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Replica controller (replica set or replication controller) that is part of a workload rollout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRevision {
    pub uid: String,
    pub name: String,
    pub revision: Option<i64>,
    pub pods: Vec<PodView>,
}

/// Pods of a single workload together with its rollout state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodRingEntry {
    pub pods: Vec<PodView>,
    pub current: Option<ControllerRevision>,
    pub previous: Option<ControllerRevision>,
    pub is_rolling_out: bool,
}

/// Pod ring data keyed by workload UID.
pub type PodRingData = BTreeMap<String, PodRingEntry>;

/// Groups pods of every workload of the specified `kind` found in `resources`.
pub fn transform_pod_ring_data(resources: &PodRingResources, kind: WorkloadKind) -> Result<PodRingData, PodRingError> {
    let collection = kind.collection().ok_or(PodRingError::UnsupportedKind(kind))?;
    let workloads = resources.get(collection);
    if workloads.is_empty() {
        return Ok(PodRingData::new());
    }

    let pods = resources.get(ResourceCollection::Pods);
    let data = match kind {
        WorkloadKind::Deployment => {
            let replica_sets = resources.get(ResourceCollection::ReplicaSets);
            collect_entries(workloads, |w| rollout_entry(w, replica_sets, pods, DEPLOYMENT_REVISION))
        },
        WorkloadKind::DeploymentConfig => {
            let controllers = resources.get(ResourceCollection::ReplicationControllers);
            collect_entries(workloads, |w| rollout_entry(w, controllers, pods, DEPLOYMENT_CONFIG_VERSION))
        },
        WorkloadKind::StatefulSet | WorkloadKind::DaemonSet => collect_entries(workloads, |w| PodRingEntry {
            pods: owned_pods(pods, &get_object_uid(w)),
            ..Default::default()
        }),
        WorkloadKind::Pod
        | WorkloadKind::ReplicaSet
        | WorkloadKind::ReplicationController
        | WorkloadKind::Job
        | WorkloadKind::CronJob
        | WorkloadKind::Revision => PodRingData::new(),
    };

    Ok(data)
}

fn collect_entries(workloads: &[DynamicObject], entry: impl Fn(&DynamicObject) -> PodRingEntry) -> PodRingData {
    workloads.iter().map(|w| (get_object_uid(w), entry(w))).collect()
}

fn rollout_entry(
    workload: &DynamicObject,
    controllers: &[DynamicObject],
    pods: &[DynamicObject],
    revision_key: &str,
) -> PodRingEntry {
    let workload_uid = get_object_uid(workload);
    let mut owned = controllers
        .iter()
        .filter(|c| is_owned_by(c, &workload_uid))
        .map(|c| ControllerRevision {
            uid: get_object_uid(c),
            name: c.name_any(),
            revision: get_annotation_i64(c, revision_key),
            pods: Vec::new(),
        })
        .collect::<Vec<_>>();
    owned.sort_by_key(|c| Reverse(c.revision));

    let mut owned = owned.into_iter().map(|mut c| {
        c.pods = owned_pods(pods, &c.uid);
        c
    });
    let current = owned.next();
    let previous = owned.find(|c| !c.pods.is_empty());

    let pods = current
        .iter()
        .chain(previous.iter())
        .flat_map(|c| c.pods.iter().cloned())
        .collect();

    PodRingEntry {
        pods,
        is_rolling_out: current.is_some() && previous.is_some(),
        current,
        previous,
    }
}

fn owned_pods(pods: &[DynamicObject], owner_uid: &str) -> Vec<PodView> {
    pods.iter()
        .filter(|p| is_owned_by(p, owner_uid))
        .map(PodView::from)
        .collect()
}
