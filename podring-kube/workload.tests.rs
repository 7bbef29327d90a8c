use k8s_openapi::serde_json::{self, json};

use super::*;

fn autoscaler() -> DynamicObject {
    serde_json::from_value(json!({
        "apiVersion": "autoscaling/v2",
        "kind": "HorizontalPodAutoscaler",
        "metadata": { "name": "web", "namespace": "default" },
        "spec": {
            "minReplicas": 1,
            "maxReplicas": 5,
            "scaleTargetRef": { "apiVersion": "apps/v1", "kind": "Deployment", "name": "web" }
        },
        "status": { "desiredReplicas": 4, "currentReplicas": 2 }
    }))
    .unwrap()
}

#[test]
fn autoscaler_snapshot_from_object_test() {
    assert_eq!(
        AutoscalerSnapshot {
            desired_replicas: Some(4),
            current_replicas: Some(2),
        },
        AutoscalerSnapshot::from(&autoscaler())
    );
}

#[test]
fn autoscaler_targets_test() {
    let autoscaler = autoscaler();

    assert!(AutoscalerSnapshot::targets(&autoscaler, "Deployment", "web"));
    assert!(!AutoscalerSnapshot::targets(&autoscaler, "StatefulSet", "web"));
    assert!(!AutoscalerSnapshot::targets(&autoscaler, "Deployment", "api"));
}
