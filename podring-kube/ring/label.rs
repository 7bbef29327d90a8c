use serde::Serialize;

use crate::pods::{PHASE_PENDING, PHASE_RUNNING};
use crate::{AutoscalerSnapshot, PodView, WorkloadKind, WorkloadSnapshot};

#[cfg(test)]
#[path = "./label.tests.rs"]
mod label_tests;

const POD_LABEL: &str = "Pod";
const POD_PLURAL: &str = "Pods";

/// Text and layout hints painted inside a pod ring.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelData {
    pub title: String,
    pub sub_title: String,
    pub long_title: bool,
    pub long_subtitle: bool,
    pub reversed: bool,
}

/// Title part of the [`LabelData`] produced by [`derive_generic_label`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleData {
    pub title: String,
    pub sub_title: String,
    pub long_title: bool,
    pub long_subtitle: bool,
}

/// Returns lowercase pod noun, singular only when `count` is exactly `1`.
pub fn pod_noun(count: i64) -> String {
    (if count == 1 { POD_LABEL } else { POD_PLURAL }).to_lowercase()
}

/// Returns `true` if the first pod is still being scheduled or pods are requested but none is present yet.
pub fn derive_pending_state(pods: &[PodView], current: i64, desired: i64) -> bool {
    matches!(pods, [pod] if pod.is_phase(PHASE_PENDING)) || (current == 0 && desired > 0)
}

/// Counts pods that are failed or in a crash loop.
pub fn count_failed_pods(pods: &[PodView]) -> i64 {
    pods.iter().filter(|p| p.status.is_failing()).count() as i64
}

/// Derives title and subtitle from current and desired pod counts.
pub fn derive_generic_label(current: i64, desired: i64, pending: bool) -> TitleData {
    if current == 0 {
        // first pod is coming up or the workload is scaled to zero
        let (sub_title, long_subtitle) = if desired > 0 {
            (scaling_to(desired), true)
        } else {
            (String::new(), false)
        };

        TitleData {
            title: if pending { "0" } else { "Scaled to 0" }.to_owned(),
            sub_title,
            long_title: !pending,
            long_subtitle,
        }
    } else if current == desired {
        TitleData {
            title: current.to_string(),
            sub_title: pod_noun(current),
            long_title: false,
            long_subtitle: false,
        }
    } else {
        TitleData {
            title: current.to_string(),
            sub_title: scaling_to(desired),
            long_title: false,
            long_subtitle: true,
        }
    }
}

/// Derives [`LabelData`] for the workload of the specified `kind`.
pub fn derive_label(kind: WorkloadKind, resource: &WorkloadSnapshot, pods: &[PodView]) -> LabelData {
    let failed = count_failed_pods(pods);

    match kind {
        WorkloadKind::DaemonSet => {
            let current = resource.current_number_scheduled.unwrap_or_default().saturating_add(failed);
            let desired = resource.desired_number_scheduled.unwrap_or_default();
            let pending = derive_pending_state(pods, current, desired);
            let data = derive_generic_label(current, desired, pending);

            LabelData {
                title: data.title,
                sub_title: data.sub_title,
                long_subtitle: data.long_subtitle,
                ..Default::default()
            }
        },
        WorkloadKind::Revision => {
            let current = resource.ready_replicas.unwrap_or_default().saturating_add(failed);
            let desired = resource.replicas.unwrap_or_default();
            let pending = derive_pending_state(pods, current, desired);

            if !pending && desired == 0 {
                LabelData {
                    title: "Autoscaled".to_owned(),
                    sub_title: "to 0".to_owned(),
                    reversed: true,
                    ..Default::default()
                }
            } else if pending {
                LabelData {
                    title: "0".to_owned(),
                    sub_title: scaling_to(desired),
                    ..Default::default()
                }
            } else {
                LabelData {
                    title: current.to_string(),
                    sub_title: pod_noun(current),
                    ..Default::default()
                }
            }
        },
        WorkloadKind::Pod | WorkloadKind::Job => LabelData {
            title: "1".to_owned(),
            sub_title: POD_LABEL.to_owned(),
            ..Default::default()
        },
        WorkloadKind::CronJob => {
            let count = pods.len() as i64;
            LabelData {
                title: count.to_string(),
                sub_title: pod_noun(count),
                ..Default::default()
            }
        },
        WorkloadKind::ReplicaSet
        | WorkloadKind::ReplicationController
        | WorkloadKind::Deployment
        | WorkloadKind::DeploymentConfig
        | WorkloadKind::StatefulSet => {
            let current = resource.ready_replicas.unwrap_or_default().saturating_add(failed);
            let desired = resource.replicas.unwrap_or_default();
            let pending = derive_pending_state(pods, current, desired);
            let data = derive_generic_label(current, desired, pending);

            LabelData {
                title: data.title,
                sub_title: data.sub_title,
                long_title: data.long_title,
                long_subtitle: data.long_subtitle,
                reversed: false,
            }
        },
    }
}

/// Derives [`LabelData`] for the workload scaled by a horizontal pod autoscaler.
pub fn derive_autoscaled_label(
    resource: &WorkloadSnapshot,
    autoscaler: &AutoscalerSnapshot,
    pods: &[PodView],
) -> LabelData {
    let desired = autoscaler.desired_replicas.or(resource.replicas).unwrap_or_default();
    let current = autoscaler.current_replicas.unwrap_or_default();
    let scaling = (current == 0 && desired > 0) || !pods.iter().all(|p| p.is_phase(PHASE_RUNNING));

    LabelData {
        title: if scaling { "Autoscaling" } else { "Autoscaled" }.to_owned(),
        sub_title: format!("to {desired}"),
        long_title: false,
        long_subtitle: false,
        reversed: true,
    }
}

/// Derives [`LabelData`] for the pod ring of a workload.\
/// **Note** that the autoscaler, when present, takes precedence over the workload kind.
pub fn pod_ring_label(
    resource: &WorkloadSnapshot,
    kind: WorkloadKind,
    pods: &[PodView],
    autoscaler: Option<&AutoscalerSnapshot>,
) -> LabelData {
    match autoscaler {
        Some(autoscaler) => derive_autoscaled_label(resource, autoscaler, pods),
        None => derive_label(kind, resource, pods),
    }
}

fn scaling_to(desired: i64) -> String {
    format!("scaling to {desired}")
}
