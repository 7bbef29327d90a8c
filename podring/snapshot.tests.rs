use podring_kube::pod_ring_label;

use super::*;

const DAEMON_SET: &str = r#"
workload:
  apiVersion: apps/v1
  kind: DaemonSet
  metadata:
    name: node-agent
    namespace: kube-system
  status:
    currentNumberScheduled: 2
    desiredNumberScheduled: 3
pods:
  - apiVersion: v1
    kind: Pod
    metadata:
      name: node-agent-a
    status:
      phase: Running
      containerStatuses:
        - ready: true
  - apiVersion: v1
    kind: Pod
    metadata:
      name: node-agent-b
    status:
      phase: Running
      containerStatuses:
        - ready: false
          state:
            waiting:
              reason: CrashLoopBackOff
"#;

#[test]
fn parse_daemon_set_snapshot_test() {
    let resources = parse(DAEMON_SET).unwrap();

    assert_eq!(WorkloadKind::DaemonSet, resources.kind);
    assert_eq!(2, resources.pods.len());
    assert!(resources.autoscaler.is_none());

    let label = pod_ring_label(
        &resources.workload_snapshot(),
        resources.kind,
        &resources.pod_views(),
        resources.autoscaler_snapshot().as_ref(),
    );
    assert_eq!("3", label.title);
    assert_eq!("pods", label.sub_title);
    assert!(!label.long_title);
}

#[test]
fn parse_explicit_kind_snapshot_test() {
    let snapshot = r#"
kind: rev
workload:
  apiVersion: serving.knative.dev/v1
  kind: Revision
  metadata:
    name: hello-00001
"#;
    let resources = parse(snapshot).unwrap();

    assert_eq!(WorkloadKind::Revision, resources.kind);
    assert!(resources.pods.is_empty());
}

#[test]
fn parse_unsupported_kind_snapshot_test() {
    let snapshot = r#"
workload:
  apiVersion: v1
  kind: Service
  metadata:
    name: web
"#;

    assert!(matches!(parse(snapshot), Err(SnapshotError::KindError(_))));
}

#[tokio::test]
async fn load_demo_snapshots_test() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");

    let deployment = load(&demos.join("deployment.yaml")).await.unwrap();
    let label = pod_ring_label(
        &deployment.workload_snapshot(),
        deployment.kind,
        &deployment.pod_views(),
        None,
    );
    assert_eq!("1", label.title);
    assert_eq!("scaling to 3", label.sub_title);

    let autoscaled = load(&demos.join("autoscaled.yaml")).await.unwrap();
    let label = pod_ring_label(
        &autoscaled.workload_snapshot(),
        autoscaled.kind,
        &autoscaled.pod_views(),
        autoscaled.autoscaler_snapshot().as_ref(),
    );
    assert_eq!("Autoscaled", label.title);
    assert_eq!("to 4", label.sub_title);
    assert!(label.reversed);
}
