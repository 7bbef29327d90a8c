use kube::api::{ApiResource, DynamicObject};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use tracing::info;

/// Possible errors from building kubernetes client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Failed to process kube configuration.
    #[error("failed to process kube configuration")]
    KubeconfigError(#[from] kube::config::KubeconfigError),

    /// Failed to build kubernetes client.
    #[error("failed to build kubernetes client")]
    KubeError(#[from] kube::Error),
}

/// Options used when creating new [`KubernetesClient`].
#[derive(Default, Debug, Clone)]
pub struct ClientOptions {
    /// Skip TLS certificate verification.
    pub allow_insecure: bool,

    /// User to impersonate in every request.
    pub impersonate: Option<String>,
}

/// Wrapper for the kubernetes [`Client`].
pub struct KubernetesClient {
    client: Client,
    context: String,
    default_namespace: String,
}

impl KubernetesClient {
    /// Creates new [`KubernetesClient`] instance.
    pub async fn new(
        kube_config_path: Option<&str>,
        kube_context: Option<&str>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let (config, context) = get_config(kube_config_path, kube_context, &options).await?;
        let default_namespace = config.default_namespace.clone();
        let client = Client::try_from(config)?;
        let k8s_version = client.apiserver_version().await?.git_version;
        info!("Connected to '{}' (kubernetes {})", context, k8s_version);

        Ok(Self {
            client,
            context,
            default_namespace,
        })
    }

    /// Returns cloned kubernetes client that can be consumed.
    pub fn get_client(&self) -> Client {
        self.client.clone()
    }

    /// Returns namespaced [`Api`] for the specified resource.
    pub fn get_api(&self, ar: &ApiResource, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, ar)
    }

    /// Returns kube context name for the currently held kubernetes client.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns namespace configured for the kube context.
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }
}

/// Builds client configuration for the provided context or the current one from kube config.
async fn get_config(
    kube_config_path: Option<&str>,
    kube_context: Option<&str>,
    options: &ClientOptions,
) -> Result<(Config, String), ClientError> {
    let kube_config = match kube_config_path {
        Some(path) => Kubeconfig::read_from(path)?,
        None => Kubeconfig::read()?,
    };

    let context = kube_context
        .map(String::from)
        .or_else(|| kube_config.current_context.clone())
        .unwrap_or_default();
    let kube_config_options = KubeConfigOptions {
        context: Some(context.clone()),
        user: None,
        cluster: None,
    };

    let mut config = Config::from_custom_kubeconfig(kube_config, &kube_config_options).await?;
    if options.allow_insecure {
        config.accept_invalid_certs = true;
    }

    if options.impersonate.is_some() {
        config.auth_info.impersonate = options.impersonate.clone();
    }

    Ok((config, context))
}
