use kube::api::{ApiResource, DynamicObject, ListParams};
use kube::core::GroupVersionKind;
use kube::{Api, ResourceExt};
use tracing::{debug, warn};

use crate::client::KubernetesClient;
use crate::utils::{get_object_uid, get_pod_selector, is_owned_by};
use crate::{
    AutoscalerSnapshot, PodRingError, PodRingResources, PodView, ResourceCollection, WorkloadKind, WorkloadSnapshot,
};

const KNATIVE_REVISION_LABEL: &str = "serving.knative.dev/revision";

/// Possible errors when fetching workload resources.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Cannot get the workload itself.
    #[error("cannot get {kind} '{name}'")]
    Workload {
        kind: WorkloadKind,
        name: String,
        #[source]
        source: kube::Error,
    },

    /// Cannot list pods or their owners.
    #[error("cannot list pods of {kind} '{name}'")]
    Pods {
        kind: WorkloadKind,
        name: String,
        #[source]
        source: kube::Error,
    },

    /// Workload does not select its pods by labels.
    #[error("{kind} '{name}' has no pod selector")]
    NoSelector { kind: WorkloadKind, name: String },

    /// Cannot list resources of the collection.
    #[error("cannot list {collection} in '{namespace}'")]
    Collection {
        collection: ResourceCollection,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    /// Workload kind cannot be presented for the whole namespace.
    #[error(transparent)]
    PodRing(#[from] PodRingError),
}

/// Workload together with its pods and the autoscaler that controls it.
#[derive(Debug, Clone)]
pub struct WorkloadResources {
    pub kind: WorkloadKind,
    pub workload: DynamicObject,
    pub pods: Vec<DynamicObject>,
    pub autoscaler: Option<DynamicObject>,
}

impl WorkloadResources {
    /// Returns snapshot of the workload.
    pub fn workload_snapshot(&self) -> WorkloadSnapshot {
        WorkloadSnapshot::from(&self.workload)
    }

    /// Returns views of the workload pods.
    pub fn pod_views(&self) -> Vec<PodView> {
        self.pods.iter().map(PodView::from).collect()
    }

    /// Returns snapshot of the autoscaler if there is one.
    pub fn autoscaler_snapshot(&self) -> Option<AutoscalerSnapshot> {
        self.autoscaler.as_ref().map(AutoscalerSnapshot::from)
    }
}

/// Pod ring resource set of a namespace together with its autoscalers.
#[derive(Debug, Clone)]
pub struct NamespaceResources {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub resources: PodRingResources,
    pub autoscalers: Vec<DynamicObject>,
}

impl NamespaceResources {
    /// Returns workloads of the kind held by the resource set.
    pub fn workloads(&self) -> &[DynamicObject] {
        self.kind.collection().map(|c| self.resources.get(c)).unwrap_or_default()
    }

    /// Returns snapshot of the autoscaler that controls workload `name`.
    pub fn autoscaler_for(&self, name: &str) -> Option<AutoscalerSnapshot> {
        self.autoscalers
            .iter()
            .find(|a| AutoscalerSnapshot::targets(a, self.kind.as_str(), name))
            .map(AutoscalerSnapshot::from)
    }
}

/// Fetches workload `name` of the specified `kind` from `namespace` together with its pods.\
/// **Note** that the autoscaler is looked up only when `with_autoscaler` is set and the kind can be autoscaled,
/// a failed autoscaler lookup is logged and ignored.
pub async fn fetch_workload_resources(
    client: &KubernetesClient,
    kind: WorkloadKind,
    name: &str,
    namespace: &str,
    with_autoscaler: bool,
) -> Result<WorkloadResources, FetchError> {
    let workload = client
        .get_api(&kind.api_resource(), namespace)
        .get(name)
        .await
        .map_err(|source| FetchError::Workload {
            kind,
            name: name.to_owned(),
            source,
        })?;

    let (pods, autoscaler) = futures::join!(
        fetch_pods(client, kind, &workload, namespace),
        fetch_autoscaler(client, kind, name, namespace, with_autoscaler && kind.is_autoscalable()),
    );
    let pods = pods?;
    debug!("Found {} pod(s) for {} '{}'", pods.len(), kind, name);

    Ok(WorkloadResources {
        kind,
        workload,
        pods,
        autoscaler,
    })
}

/// Fetches all workloads of the specified `kind` from `namespace` together with the resources needed
/// to group their pods.
pub async fn fetch_namespace_resources(
    client: &KubernetesClient,
    kind: WorkloadKind,
    namespace: &str,
    with_autoscaler: bool,
) -> Result<NamespaceResources, FetchError> {
    let collection = kind.collection().ok_or(PodRingError::UnsupportedKind(kind))?;
    let controllers = match kind {
        WorkloadKind::Deployment => Some((ResourceCollection::ReplicaSets, WorkloadKind::ReplicaSet)),
        WorkloadKind::DeploymentConfig => Some((
            ResourceCollection::ReplicationControllers,
            WorkloadKind::ReplicationController,
        )),
        _ => None,
    };

    let (workloads, pods, controller_objects, autoscaler_objects) = futures::join!(
        list_collection(client, collection, kind, namespace),
        list_collection(client, ResourceCollection::Pods, WorkloadKind::Pod, namespace),
        async {
            match controllers {
                Some((collection, kind)) => list_collection(client, collection, kind, namespace).await.map(Some),
                None => Ok(None),
            }
        },
        fetch_autoscalers(client, namespace, with_autoscaler && kind.is_autoscalable()),
    );

    let mut resources = PodRingResources::new()
        .with(collection, workloads?)
        .with(ResourceCollection::Pods, pods?);
    if let Some((collection, _)) = controllers
        && let Some(objects) = controller_objects?
    {
        resources.insert(collection, objects);
    }

    Ok(NamespaceResources {
        kind,
        namespace: namespace.to_owned(),
        resources,
        autoscalers: autoscaler_objects,
    })
}

async fn list_collection(
    client: &KubernetesClient,
    collection: ResourceCollection,
    kind: WorkloadKind,
    namespace: &str,
) -> Result<Vec<DynamicObject>, FetchError> {
    list(&client.get_api(&kind.api_resource(), namespace), None)
        .await
        .map_err(|source| FetchError::Collection {
            collection,
            namespace: namespace.to_owned(),
            source,
        })
}

async fn fetch_pods(
    client: &KubernetesClient,
    kind: WorkloadKind,
    workload: &DynamicObject,
    namespace: &str,
) -> Result<Vec<DynamicObject>, FetchError> {
    let name = workload.name_any();
    let pods_error = |source: kube::Error| FetchError::Pods {
        kind,
        name: name.clone(),
        source,
    };
    let pods_api = client.get_api(&WorkloadKind::Pod.api_resource(), namespace);

    match kind {
        WorkloadKind::Pod => Ok(vec![workload.clone()]),
        WorkloadKind::Revision => {
            let selector = format!("{KNATIVE_REVISION_LABEL}={name}");
            list(&pods_api, Some(&selector)).await.map_err(pods_error)
        },
        WorkloadKind::CronJob => {
            let cron_job_uid = get_object_uid(workload);
            let jobs = list(&client.get_api(&WorkloadKind::Job.api_resource(), namespace), None)
                .await
                .map_err(pods_error)?;
            let job_uids = jobs
                .iter()
                .filter(|j| is_owned_by(j, &cron_job_uid))
                .map(get_object_uid)
                .collect::<Vec<_>>();

            let pods = list(&pods_api, None).await.map_err(pods_error)?;
            Ok(pods
                .into_iter()
                .filter(|p| job_uids.iter().any(|uid| is_owned_by(p, uid)))
                .collect())
        },
        WorkloadKind::Job
        | WorkloadKind::ReplicaSet
        | WorkloadKind::ReplicationController
        | WorkloadKind::Deployment
        | WorkloadKind::DeploymentConfig
        | WorkloadKind::StatefulSet
        | WorkloadKind::DaemonSet => {
            let selector = get_pod_selector(workload).ok_or_else(|| FetchError::NoSelector {
                kind,
                name: name.clone(),
            })?;
            list(&pods_api, Some(&selector)).await.map_err(pods_error)
        },
    }
}

async fn fetch_autoscaler(
    client: &KubernetesClient,
    kind: WorkloadKind,
    name: &str,
    namespace: &str,
    enabled: bool,
) -> Option<DynamicObject> {
    fetch_autoscalers(client, namespace, enabled)
        .await
        .into_iter()
        .find(|a| AutoscalerSnapshot::targets(a, kind.as_str(), name))
}

async fn fetch_autoscalers(client: &KubernetesClient, namespace: &str, enabled: bool) -> Vec<DynamicObject> {
    if !enabled {
        return Vec::new();
    }

    match list(&client.get_api(&autoscaler_api_resource(), namespace), None).await {
        Ok(autoscalers) => autoscalers,
        Err(error) => {
            warn!("Cannot list autoscalers in '{}': {}", namespace, error);
            Vec::new()
        },
    }
}

async fn list(api: &Api<DynamicObject>, selector: Option<&str>) -> Result<Vec<DynamicObject>, kube::Error> {
    let params = match selector {
        Some(selector) => ListParams::default().labels(selector),
        None => ListParams::default(),
    };

    Ok(api.list(&params).await?.items)
}

fn autoscaler_api_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk("autoscaling", "v2", "HorizontalPodAutoscaler");
    ApiResource::from_gvk_with_plural(&gvk, "horizontalpodautoscalers")
}
