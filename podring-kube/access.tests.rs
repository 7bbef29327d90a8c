use k8s_openapi::api::authorization::v1::SubjectAccessReviewStatus;
use rstest::rstest;

use super::*;

fn review(allowed: Option<bool>) -> SelfSubjectAccessReview {
    SelfSubjectAccessReview {
        status: allowed.map(|allowed| SubjectAccessReviewStatus {
            allowed,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn from_review_test() {
    assert_eq!(AccessStatus::Allowed, AccessStatus::from_review(Ok(review(Some(true)))));
    assert_eq!(AccessStatus::Denied, AccessStatus::from_review(Ok(review(Some(false)))));
    assert_eq!(AccessStatus::Denied, AccessStatus::from_review(Ok(review(None))));
    assert_eq!(
        AccessStatus::CheckFailed,
        AccessStatus::from_review(Err(kube::Error::SerdeError(
            k8s_openapi::serde_json::from_str::<bool>("{").unwrap_err()
        )))
    );
}

#[rstest]
#[case(WorkloadKind::Deployment, AccessStatus::Allowed, true, true)]
#[case(WorkloadKind::Deployment, AccessStatus::Allowed, false, false)]
#[case(WorkloadKind::Deployment, AccessStatus::Denied, true, false)]
#[case(WorkloadKind::Deployment, AccessStatus::CheckFailed, true, false)]
#[case(WorkloadKind::StatefulSet, AccessStatus::Allowed, true, true)]
#[case(WorkloadKind::Revision, AccessStatus::Allowed, true, false)]
fn is_scaling_allowed_test(
    #[case] kind: WorkloadKind,
    #[case] status: AccessStatus,
    #[case] enable_scaling: bool,
    #[case] expected: bool,
) {
    assert_eq!(expected, is_scaling_allowed(kind, status, enable_scaling));
}

#[test]
fn scale_attributes_test() {
    let attributes = scale_attributes(WorkloadKind::Deployment, "web", Some("shop"));

    assert_eq!(Some("apps"), attributes.group.as_deref());
    assert_eq!(Some("deployments"), attributes.resource.as_deref());
    assert_eq!(Some("scale"), attributes.subresource.as_deref());
    assert_eq!(Some("patch"), attributes.verb.as_deref());
    assert_eq!(Some("web"), attributes.name.as_deref());
    assert_eq!(Some("shop"), attributes.namespace.as_deref());
}
