use k8s_openapi::serde_json::{self, json};

use super::*;

fn object(value: Value) -> DynamicObject {
    serde_json::from_value(value).unwrap()
}

#[test]
fn get_pod_selector_match_labels_test() {
    let deployment = object(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": { "name": "web" },
        "spec": { "selector": { "matchLabels": { "app": "web", "tier": "front" } } }
    }));

    assert_eq!(Some("app=web,tier=front".to_owned()), get_pod_selector(&deployment));
}

#[test]
fn get_pod_selector_plain_map_test() {
    let controller = object(json!({
        "apiVersion": "v1",
        "kind": "ReplicationController",
        "metadata": { "name": "web-1" },
        "spec": { "selector": { "deployment": "web-1" } }
    }));

    assert_eq!(Some("deployment=web-1".to_owned()), get_pod_selector(&controller));
}

#[test]
fn get_pod_selector_missing_test() {
    let pod = object(json!({ "apiVersion": "v1", "kind": "Pod", "metadata": { "name": "p" } }));
    let expressions_only = object(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": { "name": "web" },
        "spec": { "selector": { "matchExpressions": [{ "key": "app", "operator": "Exists" }] } }
    }));

    assert_eq!(None, get_pod_selector(&pod));
    assert_eq!(None, get_pod_selector(&expressions_only));
}

#[test]
fn ownership_and_annotations_test() {
    let replica_set = object(json!({
        "apiVersion": "apps/v1",
        "kind": "ReplicaSet",
        "metadata": {
            "name": "web-abc",
            "namespace": "default",
            "annotations": { "deployment.kubernetes.io/revision": "7" },
            "ownerReferences": [{ "apiVersion": "apps/v1", "kind": "Deployment", "name": "web", "uid": "dep-1" }]
        },
        "status": { "readyReplicas": 2 }
    }));

    assert!(is_owned_by(&replica_set, "dep-1"));
    assert!(!is_owned_by(&replica_set, "dep-2"));
    assert_eq!(Some(7), get_annotation_i64(&replica_set, "deployment.kubernetes.io/revision"));
    assert_eq!(None, get_annotation_i64(&replica_set, "missing"));
    assert_eq!(Some(2), get_i64(&replica_set, &["status", "readyReplicas"]));
    assert_eq!(None, get_i64(&replica_set, &["spec", "replicas"]));
    assert_eq!("_web-abcdefault_", get_object_uid(&replica_set));
}
