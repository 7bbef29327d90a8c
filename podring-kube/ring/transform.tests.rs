use k8s_openapi::serde_json::{self, Value, json};

use crate::PodStatus;

use super::*;

fn object(api_version: &str, kind: &str, name: &str, uid: &str, owner: Option<&str>, extra: Value) -> DynamicObject {
    let mut value = json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "name": name, "namespace": "default", "uid": uid },
    });
    if let Some(owner) = owner {
        value["metadata"]["ownerReferences"] = json!([{ "apiVersion": "apps/v1", "kind": "Owner", "name": "owner", "uid": owner }]);
    }
    if let Some(extra) = extra.as_object() {
        for (key, val) in extra {
            value[key] = val.clone();
        }
    }

    serde_json::from_value(value).unwrap()
}

fn pod(name: &str, owner: &str, phase: &str) -> DynamicObject {
    object("v1", "Pod", name, &format!("pod-{name}"), Some(owner), json!({ "status": { "phase": phase } }))
}

fn replica_set(name: &str, uid: &str, owner: &str, revision: &str) -> DynamicObject {
    let mut rs = object("apps/v1", "ReplicaSet", name, uid, Some(owner), json!({}));
    rs.metadata.annotations = Some([(DEPLOYMENT_REVISION.to_owned(), revision.to_owned())].into());
    rs
}

fn replication_controller(name: &str, uid: &str, owner: &str, version: &str) -> DynamicObject {
    let mut rc = object("v1", "ReplicationController", name, uid, Some(owner), json!({}));
    rc.metadata.annotations = Some([(DEPLOYMENT_CONFIG_VERSION.to_owned(), version.to_owned())].into());
    rc
}

#[test]
fn unsupported_kind_test() {
    let resources = PodRingResources::new();

    for kind in [WorkloadKind::Job, WorkloadKind::CronJob, WorkloadKind::Revision] {
        assert_eq!(
            Err(PodRingError::UnsupportedKind(kind)),
            transform_pod_ring_data(&resources, kind)
        );
    }
}

#[test]
fn empty_collection_test() {
    let resources = PodRingResources::new().with(ResourceCollection::Pods, vec![pod("a", "ds-1", "Running")]);

    assert_eq!(Ok(PodRingData::new()), transform_pod_ring_data(&resources, WorkloadKind::DaemonSet));
}

#[test]
fn daemon_set_pods_test() {
    let resources = PodRingResources::new()
        .with(
            ResourceCollection::DaemonSets,
            vec![
                object("apps/v1", "DaemonSet", "agent", "ds-1", None, json!({})),
                object("apps/v1", "DaemonSet", "logs", "ds-2", None, json!({})),
            ],
        )
        .with(
            ResourceCollection::Pods,
            vec![
                pod("agent-a", "ds-1", "Running"),
                pod("agent-b", "ds-1", "Pending"),
                pod("other", "rs-9", "Running"),
            ],
        );

    let data = transform_pod_ring_data(&resources, WorkloadKind::DaemonSet).unwrap();

    assert_eq!(2, data.len());
    let agent = &data["ds-1"];
    assert_eq!(vec!["agent-a", "agent-b"], agent.pods.iter().map(|p| p.name.as_str()).collect::<Vec<_>>());
    assert_eq!(PodStatus::Pending, agent.pods[1].status);
    assert!(agent.current.is_none());
    assert!(!agent.is_rolling_out);
    assert!(data["ds-2"].pods.is_empty());
}

#[test]
fn deployment_rollout_test() {
    let resources = PodRingResources::new()
        .with(
            ResourceCollection::Deployments,
            vec![object("apps/v1", "Deployment", "web", "dep-1", None, json!({}))],
        )
        .with(
            ResourceCollection::ReplicaSets,
            vec![
                replica_set("web-old", "rs-1", "dep-1", "1"),
                replica_set("web-new", "rs-3", "dep-1", "3"),
                replica_set("web-mid", "rs-2", "dep-1", "2"),
                replica_set("api", "rs-4", "dep-2", "9"),
            ],
        )
        .with(
            ResourceCollection::Pods,
            vec![
                pod("web-new-a", "rs-3", "Pending"),
                pod("web-old-a", "rs-1", "Running"),
                pod("api-a", "rs-4", "Running"),
            ],
        );

    let data = transform_pod_ring_data(&resources, WorkloadKind::Deployment).unwrap();
    let web = &data["dep-1"];

    let current = web.current.as_ref().unwrap();
    assert_eq!("web-new", current.name);
    assert_eq!(Some(3), current.revision);

    let previous = web.previous.as_ref().unwrap();
    assert_eq!("web-old", previous.name);
    assert!(web.is_rolling_out);
    assert_eq!(
        vec!["web-new-a", "web-old-a"],
        web.pods.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn deployment_without_previous_pods_test() {
    let resources = PodRingResources::new()
        .with(
            ResourceCollection::Deployments,
            vec![object("apps/v1", "Deployment", "web", "dep-1", None, json!({}))],
        )
        .with(
            ResourceCollection::ReplicaSets,
            vec![
                replica_set("web-old", "rs-1", "dep-1", "1"),
                replica_set("web-new", "rs-2", "dep-1", "2"),
            ],
        )
        .with(ResourceCollection::Pods, vec![pod("web-new-a", "rs-2", "Running")]);

    let data = transform_pod_ring_data(&resources, WorkloadKind::Deployment).unwrap();
    let web = &data["dep-1"];

    assert_eq!("web-new", web.current.as_ref().unwrap().name);
    assert!(web.previous.is_none());
    assert!(!web.is_rolling_out);
    assert_eq!(1, web.pods.len());
}

#[test]
fn deployment_config_rollout_test() {
    let resources = PodRingResources::new()
        .with(
            ResourceCollection::DeploymentConfigs,
            vec![object("apps.openshift.io/v1", "DeploymentConfig", "web", "dc-1", None, json!({}))],
        )
        .with(
            ResourceCollection::ReplicationControllers,
            vec![
                replication_controller("web-1", "rc-1", "dc-1", "1"),
                replication_controller("web-2", "rc-2", "dc-1", "2"),
            ],
        )
        .with(
            ResourceCollection::Pods,
            vec![pod("web-1-a", "rc-1", "Running"), pod("web-2-a", "rc-2", "Pending")],
        );

    let data = transform_pod_ring_data(&resources, WorkloadKind::DeploymentConfig).unwrap();
    let web = &data["dc-1"];

    let current = web.current.as_ref().unwrap();
    assert_eq!("web-2", current.name);
    assert_eq!(Some(2), current.revision);
    assert_eq!("web-1", web.previous.as_ref().unwrap().name);
    assert!(web.is_rolling_out);
    assert_eq!(
        vec!["web-2-a", "web-1-a"],
        web.pods.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
    );
}

#[test]
fn replica_set_kind_yields_no_entries_test() {
    let resources = PodRingResources::new().with(
        ResourceCollection::ReplicaSets,
        vec![replica_set("web-new", "rs-2", "dep-1", "2")],
    );

    assert_eq!(Ok(PodRingData::new()), transform_pod_ring_data(&resources, WorkloadKind::ReplicaSet));
}
