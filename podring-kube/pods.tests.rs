use k8s_openapi::serde_json::{self, json};
use rstest::rstest;

use super::*;

fn pod(status: Value) -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": "web-1", "namespace": "default" },
        "status": status
    }))
    .unwrap()
}

#[rstest]
#[case(json!({ "phase": "Pending" }), PodStatus::Pending)]
#[case(json!({ "phase": "Succeeded" }), PodStatus::Succeeded)]
#[case(json!({ "phase": "Failed" }), PodStatus::Failed)]
#[case(json!({}), PodStatus::Unknown)]
#[case(json!({ "phase": "Running", "containerStatuses": [{ "ready": true }] }), PodStatus::Running)]
#[case(json!({ "phase": "Running", "containerStatuses": [{ "ready": true }, { "ready": false }] }), PodStatus::NotReady)]
#[case(
    json!({ "phase": "Running", "containerStatuses": [{ "ready": false, "state": { "waiting": { "reason": "CrashLoopBackOff" } } }] }),
    PodStatus::CrashLoopBackOff
)]
#[case(
    json!({ "phase": "Running", "containerStatuses": [{ "ready": false, "state": { "terminated": { "exitCode": 137 } } }] }),
    PodStatus::Failed
)]
#[case(
    json!({ "phase": "Running", "containerStatuses": [
        { "ready": false, "state": { "terminated": { "exitCode": 1 } } },
        { "ready": false, "state": { "waiting": { "reason": "CrashLoopBackOff" } } }
    ] }),
    PodStatus::CrashLoopBackOff
)]
#[case(
    json!({ "phase": "Succeeded", "containerStatuses": [{ "ready": false, "state": { "terminated": { "exitCode": 0 } } }] }),
    PodStatus::Succeeded
)]
fn pod_status_test(#[case] status: Value, #[case] expected: PodStatus) {
    assert_eq!(expected, PodStatus::from_object(&pod(status)));
}

#[test]
fn terminating_pod_status_test() {
    let object: DynamicObject = serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": "web-1", "deletionTimestamp": "2024-05-01T10:00:00Z" },
        "status": { "phase": "Running", "containerStatuses": [{ "ready": true }] }
    }))
    .unwrap();

    assert_eq!(PodStatus::Terminating, PodStatus::from_object(&object));
}

#[test]
fn pod_view_from_object_test() {
    let view = PodView::from(&pod(json!({ "phase": "Pending" })));

    assert_eq!("web-1", view.name);
    assert!(view.is_phase(PHASE_PENDING));
    assert!(!view.is_phase(PHASE_RUNNING));
    assert!(!view.status.is_failing());
}
