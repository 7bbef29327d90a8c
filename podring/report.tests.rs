use kube::api::DynamicObject;
use podring_kube::{PodRingResources, ResourceCollection, WorkloadKind};
use fixtures::*;

use super::*;

mod fixtures {
    use k8s_openapi::serde_json::{self, Value, json};
    use kube::api::DynamicObject;

    pub fn object(value: Value) -> DynamicObject {
        serde_json::from_value(value).unwrap()
    }

    pub fn stateful_set(name: &str, uid: &str, ready: i64, replicas: i64) -> DynamicObject {
        object(json!({
            "apiVersion": "apps/v1",
            "kind": "StatefulSet",
            "metadata": { "name": name, "namespace": "shop", "uid": uid },
            "spec": { "replicas": replicas },
            "status": { "readyReplicas": ready }
        }))
    }

    pub fn pod(name: &str, owner_uid: &str, phase: &str) -> DynamicObject {
        object(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": name,
                "namespace": "shop",
                "ownerReferences": [{ "apiVersion": "apps/v1", "kind": "StatefulSet", "name": "owner", "uid": owner_uid }]
            },
            "status": { "phase": phase }
        }))
    }

    pub fn autoscaler(target: &str, desired: i64, current: i64) -> DynamicObject {
        object(json!({
            "apiVersion": "autoscaling/v2",
            "kind": "HorizontalPodAutoscaler",
            "metadata": { "name": target, "namespace": "shop" },
            "spec": { "scaleTargetRef": { "apiVersion": "apps/v1", "kind": "StatefulSet", "name": target } },
            "status": { "desiredReplicas": desired, "currentReplicas": current }
        }))
    }
}

fn namespace_resources(kind: WorkloadKind, autoscalers: Vec<DynamicObject>) -> NamespaceResources {
    let resources = PodRingResources::new()
        .with(
            ResourceCollection::StatefulSets,
            vec![stateful_set("db", "sts-1", 0, 2), stateful_set("cache", "sts-2", 3, 3)],
        )
        .with(
            ResourceCollection::Pods,
            vec![pod("db-0", "sts-1", "Pending"), pod("cache-0", "sts-2", "Running")],
        );

    NamespaceResources {
        kind,
        namespace: "shop".to_owned(),
        resources,
        autoscalers,
    }
}

#[test]
fn for_namespace_test() {
    let reports = Report::for_namespace(&namespace_resources(WorkloadKind::StatefulSet, Vec::new())).unwrap();

    assert_eq!(2, reports.len());
    assert_eq!("db", reports[0].name);
    assert_eq!("0", reports[0].label.title);
    assert_eq!("scaling to 2", reports[0].label.sub_title);
    assert!(reports[0].label.long_subtitle);
    assert_eq!("cache", reports[1].name);
    assert_eq!("3", reports[1].label.title);
    assert_eq!("pods", reports[1].label.sub_title);
}

#[test]
fn for_namespace_with_autoscaler_test() {
    let resources = namespace_resources(WorkloadKind::StatefulSet, vec![autoscaler("cache", 3, 3)]);
    let reports = Report::for_namespace(&resources).unwrap();

    assert_eq!("0", reports[0].label.title);
    assert_eq!("Autoscaled", reports[1].label.title);
    assert_eq!("to 3", reports[1].label.sub_title);
    assert!(reports[1].label.reversed);
}

#[test]
fn for_namespace_unsupported_kind_test() {
    let resources = namespace_resources(WorkloadKind::CronJob, Vec::new());

    assert_eq!(
        Err(PodRingError::UnsupportedKind(WorkloadKind::CronJob)),
        Report::for_namespace(&resources)
    );
}

#[test]
fn render_text_test() {
    let mut reports = Report::for_namespace(&namespace_resources(WorkloadKind::StatefulSet, Vec::new())).unwrap();
    reports[1].scaling_allowed = Some(false);

    assert_eq!(
        "StatefulSet db (ns: shop): 0 scaling to 2\nStatefulSet cache (ns: shop): 3 pods\n  scaling: not allowed\n",
        render(&reports, OutputFormat::Text).unwrap()
    );
}

#[test]
fn render_yaml_test() {
    let reports = Report::for_namespace(&namespace_resources(WorkloadKind::StatefulSet, Vec::new())).unwrap();
    let yaml = render(&reports[1..], OutputFormat::Yaml).unwrap();

    assert!(yaml.starts_with("kind: StatefulSet\n"));
    assert!(yaml.contains("subTitle: pods"));
    assert!(yaml.contains("longSubtitle: false"));
    assert!(!yaml.contains("scalingAllowed"));
}
