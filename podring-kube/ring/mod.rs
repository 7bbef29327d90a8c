pub use self::label::{
    LabelData, TitleData, count_failed_pods, derive_autoscaled_label, derive_generic_label, derive_label,
    derive_pending_state, pod_noun, pod_ring_label,
};
pub use self::transform::{
    ControllerRevision, PodRingData, PodRingEntry, PodRingError, PodRingResources, transform_pod_ring_data,
};

mod label;
mod transform;
