use rstest::rstest;

use super::*;

#[rstest]
#[case("DaemonSet", WorkloadKind::DaemonSet)]
#[case("daemonsets", WorkloadKind::DaemonSet)]
#[case("ds", WorkloadKind::DaemonSet)]
#[case("deploy", WorkloadKind::Deployment)]
#[case("deployments.apps", WorkloadKind::Deployment)]
#[case("dc", WorkloadKind::DeploymentConfig)]
#[case("revisions.serving.knative.dev", WorkloadKind::Revision)]
#[case("CRONJOB", WorkloadKind::CronJob)]
#[case("po", WorkloadKind::Pod)]
fn parse_kind_test(#[case] input: &str, #[case] expected: WorkloadKind) {
    assert_eq!(Ok(expected), input.parse::<WorkloadKind>());
}

#[test]
fn parse_unknown_kind_test() {
    assert_eq!(
        Err(ParseKindError("services".to_owned())),
        "services".parse::<WorkloadKind>()
    );
}

#[test]
fn kind_round_trips_through_name_test() {
    for kind in WorkloadKind::ALL {
        assert_eq!(Ok(kind), kind.as_str().parse::<WorkloadKind>());
        assert_eq!(Ok(kind), kind.plural().parse::<WorkloadKind>());
    }
}

#[rstest]
#[case(WorkloadKind::Pod, Some("pods"))]
#[case(WorkloadKind::ReplicaSet, Some("replicaSets"))]
#[case(WorkloadKind::ReplicationController, Some("replicationControllers"))]
#[case(WorkloadKind::Deployment, Some("deployments"))]
#[case(WorkloadKind::DeploymentConfig, Some("deploymentConfigs"))]
#[case(WorkloadKind::StatefulSet, Some("statefulSets"))]
#[case(WorkloadKind::DaemonSet, Some("daemonSets"))]
#[case(WorkloadKind::Job, None)]
#[case(WorkloadKind::CronJob, None)]
#[case(WorkloadKind::Revision, None)]
fn collection_test(#[case] kind: WorkloadKind, #[case] expected: Option<&str>) {
    assert_eq!(expected, kind.collection().map(|c| c.as_str()));
}

#[test]
fn api_resource_test() {
    let ar = WorkloadKind::DaemonSet.api_resource();
    assert_eq!("apps", ar.group);
    assert_eq!("apps/v1", ar.api_version);
    assert_eq!("daemonsets", ar.plural);

    let ar = WorkloadKind::Pod.api_resource();
    assert_eq!("", ar.group);
    assert_eq!("v1", ar.api_version);
    assert_eq!("Pod", ar.kind);
}
