pub use self::access::{AccessStatus, check_scale_access, is_scaling_allowed};
pub use self::core::{ParseKindError, ResourceCollection, WorkloadKind};
pub use self::fetch::{
    FetchError, NamespaceResources, WorkloadResources, fetch_namespace_resources, fetch_workload_resources,
};
pub use self::pods::{PodStatus, PodView};
pub use self::ring::{
    ControllerRevision, LabelData, PodRingData, PodRingEntry, PodRingError, PodRingResources, TitleData,
    count_failed_pods, derive_autoscaled_label, derive_generic_label, derive_label, derive_pending_state, pod_noun,
    pod_ring_label, transform_pod_ring_data,
};
pub use self::workload::{AutoscalerSnapshot, WorkloadSnapshot};

pub mod client;
pub mod utils;

mod access;
mod core;
mod fetch;
mod pods;
mod ring;
mod workload;
