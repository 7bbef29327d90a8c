use anyhow::{Result, anyhow};
use clap::Parser;
use podring_config::{APP_NAME, APP_VERSION, Config};
use podring_kube::client::{ClientOptions, KubernetesClient};
use podring_kube::{
    WorkloadKind, check_scale_access, fetch_namespace_resources, fetch_workload_resources, is_scaling_allowed,
};
use report::Report;
use tokio::runtime::Builder;
use tracing::{error, info, warn};

pub mod cli;
pub mod report;
pub mod snapshot;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = podring_common::logging::initialize(APP_NAME)?;
    info!("{} v{} started", APP_NAME, APP_VERSION);

    if let Err(error) = run_application(&args) {
        error!("{} v{} terminated with an error: {}", APP_NAME, APP_VERSION, error);
        Err(error)
    } else {
        info!("{} v{} stopped", APP_NAME, APP_VERSION);
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;

    let config = rt.block_on(Config::load_or_create()).unwrap_or_else(|error| {
        warn!("Cannot load configuration, using defaults: {}", error);
        Config::default()
    });

    let reports = if let Some(path) = &args.file {
        let resources = rt.block_on(snapshot::load(path))?;
        vec![Report::new(&resources, None)]
    } else {
        rt.block_on(derive_from_cluster(args, &config))?
    };

    print!("{}", report::render(&reports, args.output(config.output))?);

    Ok(())
}

async fn derive_from_cluster(args: &cli::Args, config: &Config) -> Result<Vec<Report>> {
    let kind = args.kind.ok_or_else(|| anyhow!("workload kind is required"))?;

    let options = ClientOptions {
        allow_insecure: args.insecure,
        impersonate: args.impersonate(config.impersonate.as_deref()).map(String::from),
    };
    let client = KubernetesClient::new(args.kube_config.as_deref(), args.context.as_deref(), options).await?;
    let namespace = args.namespace.as_deref().unwrap_or(client.default_namespace());
    info!("Deriving pod ring for {} in '{}' ({})", kind, namespace, client.context());
    let with_autoscaler = !args.no_autoscaler;

    let Some(name) = args.name.as_deref() else {
        let resources = fetch_namespace_resources(&client, kind, namespace, with_autoscaler).await?;
        return Ok(Report::for_namespace(&resources)?);
    };

    let resources = fetch_workload_resources(&client, kind, name, namespace, with_autoscaler).await?;
    let scaling_allowed = if config.check_access && !args.no_access_check {
        Some(scaling_allowed(&client, kind, name, namespace, config.enable_scaling).await)
    } else {
        None
    };

    Ok(vec![Report::new(&resources, scaling_allowed)])
}

async fn scaling_allowed(
    client: &KubernetesClient,
    kind: WorkloadKind,
    name: &str,
    namespace: &str,
    enable_scaling: bool,
) -> bool {
    let status = check_scale_access(client.get_client(), kind, name, Some(namespace)).await;
    is_scaling_allowed(kind, status, enable_scaling)
}
