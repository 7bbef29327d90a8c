use rstest::rstest;

use crate::PodStatus;

use super::*;

fn pod(phase: &str, status: PodStatus) -> PodView {
    PodView::new("pod", Some(phase), status)
}

fn running(count: usize) -> Vec<PodView> {
    (0..count).map(|_| pod("Running", PodStatus::Running)).collect()
}

fn workload(ready: Option<i64>, replicas: Option<i64>) -> WorkloadSnapshot {
    WorkloadSnapshot {
        kind: "Deployment".to_owned(),
        ready_replicas: ready,
        replicas,
        ..Default::default()
    }
}

fn daemon_set(current: Option<i64>, desired: Option<i64>) -> WorkloadSnapshot {
    WorkloadSnapshot {
        kind: "DaemonSet".to_owned(),
        current_number_scheduled: current,
        desired_number_scheduled: desired,
        ..Default::default()
    }
}

#[rstest]
#[case(0, "pods")]
#[case(1, "pod")]
#[case(2, "pods")]
#[case(3, "pods")]
fn pod_noun_test(#[case] count: i64, #[case] expected: &str) {
    assert_eq!(expected, pod_noun(count));
}

#[test]
fn derive_pending_state_test() {
    assert!(derive_pending_state(&[pod("Pending", PodStatus::Pending)], 1, 1));
    assert!(derive_pending_state(&[], 0, 2));
    assert!(!derive_pending_state(&[], 0, 0));
    assert!(!derive_pending_state(&running(1), 1, 1));
    assert!(!derive_pending_state(
        &[pod("Pending", PodStatus::Pending), pod("Pending", PodStatus::Pending)],
        2,
        2
    ));
}

#[test]
fn count_failed_pods_test() {
    assert_eq!(0, count_failed_pods(&[]));

    let pods = [
        pod("Running", PodStatus::Running),
        pod("Pending", PodStatus::Pending),
        pod("Succeeded", PodStatus::Succeeded),
        pod("Running", PodStatus::CrashLoopBackOff),
        pod("Failed", PodStatus::Failed),
        pod("Running", PodStatus::NotReady),
    ];
    assert_eq!(2, count_failed_pods(&pods));
}

#[rstest]
#[case(0, 0, true, "0", "", false, false)]
#[case(0, 0, false, "Scaled to 0", "", true, false)]
#[case(0, 3, true, "0", "scaling to 3", false, true)]
#[case(0, 3, false, "Scaled to 0", "scaling to 3", true, true)]
#[case(1, 1, false, "1", "pod", false, false)]
#[case(3, 3, true, "3", "pods", false, false)]
#[case(2, 5, false, "2", "scaling to 5", false, true)]
#[case(4, 1, true, "4", "scaling to 1", false, true)]
#[case(2, 0, false, "2", "scaling to 0", false, true)]
fn derive_generic_label_test(
    #[case] current: i64,
    #[case] desired: i64,
    #[case] pending: bool,
    #[case] title: &str,
    #[case] sub_title: &str,
    #[case] long_title: bool,
    #[case] long_subtitle: bool,
) {
    let expected = TitleData {
        title: title.to_owned(),
        sub_title: sub_title.to_owned(),
        long_title,
        long_subtitle,
    };

    assert_eq!(expected, derive_generic_label(current, desired, pending));
}

#[test]
fn daemon_set_label_test() {
    let label = derive_label(WorkloadKind::DaemonSet, &daemon_set(Some(3), Some(3)), &running(3));

    assert_eq!("3", label.title);
    assert_eq!("pods", label.sub_title);
    assert_eq!(pod_noun(3), label.sub_title);
    assert!(!label.long_subtitle);
    assert!(!label.reversed);
}

#[rstest]
#[case(None, Some(2))]
#[case(Some(0), Some(0))]
#[case(Some(0), None)]
#[case(Some(1), Some(4))]
fn daemon_set_label_never_long_title_test(#[case] current: Option<i64>, #[case] desired: Option<i64>) {
    let label = derive_label(WorkloadKind::DaemonSet, &daemon_set(current, desired), &[]);

    assert!(!label.long_title);
}

#[test]
fn daemon_set_label_counts_failed_pods_test() {
    let pods = [
        pod("Running", PodStatus::Running),
        pod("Running", PodStatus::CrashLoopBackOff),
    ];
    let label = derive_label(WorkloadKind::DaemonSet, &daemon_set(Some(1), Some(2)), &pods);

    assert_eq!("2", label.title);
    assert_eq!("pods", label.sub_title);
}

#[rstest]
#[case(WorkloadKind::Deployment, workload(Some(i64::MAX), Some(1)), "scaling to 1")]
#[case(WorkloadKind::Revision, workload(Some(i64::MAX), Some(1)), "pods")]
#[case(WorkloadKind::DaemonSet, daemon_set(Some(i64::MAX), Some(1)), "scaling to 1")]
fn label_current_count_saturates_test(
    #[case] kind: WorkloadKind,
    #[case] resource: WorkloadSnapshot,
    #[case] sub_title: &str,
) {
    let label = derive_label(kind, &resource, &[pod("Running", PodStatus::CrashLoopBackOff)]);

    assert_eq!(i64::MAX.to_string(), label.title);
    assert_eq!(sub_title, label.sub_title);
}

#[test]
fn generic_label_pending_first_pod_test() {
    let label = derive_label(
        WorkloadKind::Deployment,
        &workload(Some(0), Some(2)),
        &[pod("Pending", PodStatus::Pending)],
    );

    assert_eq!("0", label.title);
    assert_eq!("scaling to 2", label.sub_title);
    assert!(label.long_subtitle);
    assert!(!label.long_title);
}

#[test]
fn generic_label_scaled_to_zero_test() {
    let label = derive_label(WorkloadKind::StatefulSet, &workload(None, Some(0)), &[]);

    assert_eq!(
        LabelData {
            title: "Scaled to 0".to_owned(),
            sub_title: String::new(),
            long_title: true,
            long_subtitle: false,
            reversed: false,
        },
        label
    );
}

#[test]
fn generic_label_missing_fields_test() {
    let label = derive_label(WorkloadKind::ReplicaSet, &WorkloadSnapshot::default(), &[]);

    assert_eq!("Scaled to 0", label.title);
    assert_eq!("", label.sub_title);
}

#[test]
fn generic_label_single_pod_test() {
    let label = derive_label(WorkloadKind::DeploymentConfig, &workload(Some(1), Some(1)), &running(1));

    assert_eq!("1", label.title);
    assert_eq!("pod", label.sub_title);
}

#[test]
fn revision_autoscaled_to_zero_test() {
    let label = derive_label(WorkloadKind::Revision, &workload(None, None), &[]);

    assert_eq!(
        LabelData {
            title: "Autoscaled".to_owned(),
            sub_title: "to 0".to_owned(),
            long_title: false,
            long_subtitle: false,
            reversed: true,
        },
        label
    );
}

#[test]
fn revision_label_test() {
    let pending = derive_label(
        WorkloadKind::Revision,
        &workload(Some(0), Some(1)),
        &[pod("Pending", PodStatus::Pending)],
    );
    assert_eq!("0", pending.title);
    assert_eq!("scaling to 1", pending.sub_title);
    assert!(!pending.reversed);

    let ready = derive_label(WorkloadKind::Revision, &workload(Some(2), Some(2)), &running(2));
    assert_eq!("2", ready.title);
    assert_eq!("pods", ready.sub_title);
    assert!(!ready.reversed);
}

#[rstest]
#[case(WorkloadKind::Pod)]
#[case(WorkloadKind::Job)]
fn single_pod_label_test(#[case] kind: WorkloadKind) {
    let label = derive_label(kind, &workload(Some(5), Some(5)), &running(3));

    assert_eq!("1", label.title);
    assert_eq!("Pod", label.sub_title);
}

#[rstest]
#[case(0, "0", "pods")]
#[case(1, "1", "pod")]
#[case(4, "4", "pods")]
fn cron_job_label_test(#[case] pods: usize, #[case] title: &str, #[case] sub_title: &str) {
    let label = derive_label(WorkloadKind::CronJob, &WorkloadSnapshot::default(), &running(pods));

    assert_eq!(title, label.title);
    assert_eq!(sub_title, label.sub_title);
}

#[rstest]
#[case(Some(2), Some(2), 2, "Autoscaled", "to 2")]
#[case(Some(3), Some(2), 2, "Autoscaled", "to 3")]
#[case(Some(2), None, 0, "Autoscaling", "to 2")]
#[case(Some(2), Some(0), 0, "Autoscaling", "to 2")]
#[case(None, Some(1), 1, "Autoscaled", "to 4")]
fn autoscaled_label_test(
    #[case] desired: Option<i64>,
    #[case] current: Option<i64>,
    #[case] pods: usize,
    #[case] title: &str,
    #[case] sub_title: &str,
) {
    let autoscaler = AutoscalerSnapshot {
        desired_replicas: desired,
        current_replicas: current,
    };
    let label = derive_autoscaled_label(&workload(Some(1), Some(4)), &autoscaler, &running(pods));

    assert_eq!(title, label.title);
    assert_eq!(sub_title, label.sub_title);
    assert!(label.reversed);
    assert!(!label.long_title);
    assert!(!label.long_subtitle);
}

#[test]
fn autoscaled_label_not_running_pod_test() {
    let autoscaler = AutoscalerSnapshot {
        desired_replicas: Some(2),
        current_replicas: Some(2),
    };
    let pods = [pod("Running", PodStatus::Running), pod("Pending", PodStatus::Pending)];
    let label = derive_autoscaled_label(&workload(Some(1), Some(2)), &autoscaler, &pods);

    assert_eq!("Autoscaling", label.title);
    assert!(label.reversed);
}

#[test]
fn pod_ring_label_prefers_autoscaler_test() {
    let resource = workload(Some(2), Some(2));
    let autoscaler = AutoscalerSnapshot {
        desired_replicas: Some(2),
        current_replicas: Some(2),
    };

    let label = pod_ring_label(&resource, WorkloadKind::Deployment, &running(2), Some(&autoscaler));
    assert_eq!("Autoscaled", label.title);
    assert_eq!("to 2", label.sub_title);

    let label = pod_ring_label(&resource, WorkloadKind::Deployment, &running(2), None);
    assert_eq!("2", label.title);
    assert_eq!("pods", label.sub_title);
}

#[test]
fn label_data_serialization_test() {
    let label = derive_label(WorkloadKind::Revision, &WorkloadSnapshot::default(), &[]);
    let json = k8s_openapi::serde_json::to_value(&label).unwrap();

    assert_eq!("Autoscaled", json["title"]);
    assert_eq!("to 0", json["subTitle"]);
    assert_eq!(false, json["longTitle"]);
    assert_eq!(false, json["longSubtitle"]);
    assert_eq!(true, json["reversed"]);
}
