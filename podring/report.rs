use kube::ResourceExt;
use podring_config::OutputFormat;
use podring_kube::utils::get_object_uid;
use podring_kube::{
    LabelData, NamespaceResources, PodRingError, WorkloadResources, WorkloadSnapshot, pod_ring_label,
    transform_pod_ring_data,
};
use serde::Serialize;
use std::fmt::Write;

#[cfg(test)]
#[path = "./report.tests.rs"]
mod report_tests;

/// Pod ring label of a single workload ready to be printed.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub label: LabelData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_allowed: Option<bool>,
}

impl Report {
    /// Creates new [`Report`] for the fetched workload.
    pub fn new(resources: &WorkloadResources, scaling_allowed: Option<bool>) -> Self {
        let label = pod_ring_label(
            &resources.workload_snapshot(),
            resources.kind,
            &resources.pod_views(),
            resources.autoscaler_snapshot().as_ref(),
        );

        Self {
            kind: resources.kind.as_str().to_owned(),
            name: resources.workload.name_any(),
            namespace: resources.workload.namespace(),
            label,
            scaling_allowed,
        }
    }

    /// Creates reports for every workload in the namespace resource set.
    pub fn for_namespace(resources: &NamespaceResources) -> Result<Vec<Self>, PodRingError> {
        let data = transform_pod_ring_data(&resources.resources, resources.kind)?;

        let reports = resources
            .workloads()
            .iter()
            .map(|workload| {
                let name = workload.name_any();
                let pods = data
                    .get(&get_object_uid(workload))
                    .map(|entry| entry.pods.as_slice())
                    .unwrap_or_default();
                let label = pod_ring_label(
                    &WorkloadSnapshot::from(workload),
                    resources.kind,
                    pods,
                    resources.autoscaler_for(&name).as_ref(),
                );

                Self {
                    kind: resources.kind.as_str().to_owned(),
                    name,
                    namespace: Some(resources.namespace.clone()),
                    label,
                    scaling_allowed: None,
                }
            })
            .collect();

        Ok(reports)
    }
}

/// Renders reports in the specified format.
pub fn render(reports: &[Report], format: OutputFormat) -> Result<String, serde_yaml::Error> {
    match format {
        OutputFormat::Yaml => match reports {
            [report] => serde_yaml::to_string(report),
            _ => serde_yaml::to_string(reports),
        },
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

fn render_text(reports: &[Report]) -> String {
    let mut text = String::new();
    for report in reports {
        let _ = write!(text, "{} {}", report.kind, report.name);
        if let Some(namespace) = &report.namespace {
            let _ = write!(text, " (ns: {namespace})");
        }

        let _ = writeln!(text, ": {}", label_text(&report.label));
        if let Some(allowed) = report.scaling_allowed {
            let _ = writeln!(text, "  scaling: {}", if allowed { "allowed" } else { "not allowed" });
        }
    }

    text
}

fn label_text(label: &LabelData) -> String {
    if label.sub_title.is_empty() {
        label.title.clone()
    } else {
        format!("{} {}", label.title, label.sub_title)
    }
}
