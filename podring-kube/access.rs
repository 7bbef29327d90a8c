use k8s_openapi::api::authorization::v1::{ResourceAttributes, SelfSubjectAccessReview, SelfSubjectAccessReviewSpec};
use kube::api::PostParams;
use kube::{Api, Client};
use tracing::{debug, warn};

use crate::WorkloadKind;

#[cfg(test)]
#[path = "./access.tests.rs"]
mod access_tests;

/// Outcome of the scale access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Allowed,
    Denied,
    CheckFailed,
}

impl AccessStatus {
    /// Maps the access review result to [`AccessStatus`].
    pub fn from_review(review: Result<SelfSubjectAccessReview, kube::Error>) -> Self {
        match review {
            Ok(review) if review.status.as_ref().is_some_and(|s| s.allowed) => AccessStatus::Allowed,
            Ok(_) => AccessStatus::Denied,
            Err(error) => {
                warn!("Cannot check scale access: {}", error);
                AccessStatus::CheckFailed
            },
        }
    }
}

/// Checks if the current user can scale the workload `name` of the specified `kind`.\
/// **Note** that this never fails, an API error results in [`AccessStatus::CheckFailed`].
pub async fn check_scale_access(client: Client, kind: WorkloadKind, name: &str, namespace: Option<&str>) -> AccessStatus {
    let review = SelfSubjectAccessReview {
        spec: SelfSubjectAccessReviewSpec {
            resource_attributes: Some(scale_attributes(kind, name, namespace)),
            ..Default::default()
        },
        ..Default::default()
    };

    let api: Api<SelfSubjectAccessReview> = Api::all(client);
    let status = AccessStatus::from_review(api.create(&PostParams::default(), &review).await);
    debug!("Scale access for {} '{}': {:?}", kind, name, status);

    status
}

/// Returns `true` if scaling of the workload should be offered.\
/// Only [`AccessStatus::Allowed`] permits scaling, a failed check is treated as denied.
pub fn is_scaling_allowed(kind: WorkloadKind, status: AccessStatus, enable_scaling: bool) -> bool {
    let editable = match status {
        AccessStatus::Allowed => true,
        AccessStatus::Denied | AccessStatus::CheckFailed => false,
    };

    kind != WorkloadKind::Revision && editable && enable_scaling
}

fn scale_attributes(kind: WorkloadKind, name: &str, namespace: Option<&str>) -> ResourceAttributes {
    ResourceAttributes {
        group: Some(kind.group().to_owned()),
        resource: Some(kind.plural().to_owned()),
        subresource: Some("scale".to_owned()),
        verb: Some("patch".to_owned()),
        name: Some(name.to_owned()),
        namespace: namespace.map(String::from),
        ..Default::default()
    }
}
