use clap::{Parser, ValueEnum};
use podring_config::OutputFormat;
use podring_kube::WorkloadKind;
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cli.tests.rs"]
mod cli_tests;

/// podring shows pod ring labels for Kubernetes workloads.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the kubeconfig file (defaults to $HOME/.kube/config).
    #[arg(long, env = "KUBECONFIG")]
    pub kube_config: Option<String>,

    /// Context to use from the kubeconfig file.
    #[arg(long)]
    pub context: Option<String>,

    /// Workload kind (e.g. deployments, ds, statefulset).
    #[arg(required_unless_present = "file")]
    pub kind: Option<WorkloadKind>,

    /// Workload name, all workloads of the kind are shown when omitted.
    #[arg()]
    pub name: Option<String>,

    /// Namespace of the workload (defaults to the context namespace).
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// Derive the label from a YAML snapshot file instead of a cluster.
    #[arg(long, short, conflicts_with_all = ["kind", "name", "namespace", "context", "no_autoscaler"])]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, short, value_enum)]
    pub output: Option<Output>,

    /// User to impersonate.
    #[arg(long)]
    pub impersonate: Option<String>,

    /// Ignore horizontal pod autoscalers.
    #[arg(long)]
    pub no_autoscaler: bool,

    /// Skip the scale access check.
    #[arg(long)]
    pub no_access_check: bool,

    /// Skip TLS certificate verification (insecure).
    #[arg(long)]
    pub insecure: bool,
}

impl Args {
    /// Returns output format or default if output is `None`.
    pub fn output(&self, default: OutputFormat) -> OutputFormat {
        self.output.map(OutputFormat::from).unwrap_or(default)
    }

    /// Returns user to impersonate or default if impersonate is `None`.
    pub fn impersonate<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        if self.impersonate.is_some() {
            self.impersonate.as_deref()
        } else {
            default
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Output {
    Text,
    Yaml,
}

impl From<Output> for OutputFormat {
    fn from(value: Output) -> Self {
        match value {
            Output::Text => OutputFormat::Text,
            Output::Yaml => OutputFormat::Yaml,
        }
    }
}
