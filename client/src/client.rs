use log::{debug, trace, warn};
use reqwest::{
    Client, Method, Response,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    config::ClientConfig,
    endpoints::service::ServiceEndpoint,
    error::{ConnectWiseError, Result},
    params::RequestParams,
    responses::PaginationSignal,
};

/// Response of `GET /login/companyinfo/{company}`, used to discover the codebase.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompanyInfo {
    pub company_name: Option<String>,
    pub codebase: String,
    pub version_code: Option<String>,
    pub is_cloud: Option<bool>,
}

/// A client for the ConnectWise Manage REST API
///
/// Wraps a reqwest::Client configured with the API member credentials and
/// the `clientId` header. Cloning is cheap; every endpoint holds its own
/// clone.
#[derive(Clone)]
pub struct ConnectWiseClient {
    pub client: Client,
    base_url: String,
    username: String,
    private_key: String,
    pagination: PaginationSignal,
}

impl ConnectWiseClient {
    /// Creates a client from a configuration that already names its codebase.
    ///
    /// # Errors
    /// Returns `ConnectWiseError::Config` when no codebase is configured; use
    /// [`ConnectWiseClient::connect`] to look it up instead.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let codebase = config.codebase.as_deref().ok_or_else(|| {
            ConnectWiseError::Config("codebase is not set; use connect() to look it up".into())
        })?;
        Self::with_base_url(config.api_base_url(codebase), config)
    }

    /// Creates a client, fetching the codebase from the company info endpoint
    /// when the configuration does not provide one.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        if config.codebase.is_some() {
            return Self::new(config);
        }

        let http = build_http_client(config)?;
        let info = fetch_company_info(&http, config).await?;
        debug!("Resolved codebase {} for {}", info.codebase, config.company_id);
        Ok(Self::from_parts(http, config.api_base_url(&info.codebase), config))
    }

    /// Creates a client that sends every request below `base_url`.
    pub fn with_base_url<S: Into<String>>(base_url: S, config: &ClientConfig) -> Result<Self> {
        Ok(Self::from_parts(build_http_client(config)?, base_url, config))
    }

    fn from_parts<S: Into<String>>(client: Client, base_url: S, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: format!("{}+{}", config.company_id, config.public_key),
            private_key: config.private_key.clone(),
            pagination: config.pagination,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn pagination_signal(&self) -> PaginationSignal {
        self.pagination
    }

    /// Root of the `/service` resource tree.
    pub fn service(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(self.clone())
    }

    /// Sends one request to `path` below the base URL.
    ///
    /// # Arguments
    /// * `method` - HTTP method to use
    /// * `path` - Resource path, starting with `/`
    /// * `data` - Optional JSON request body
    /// * `params` - Optional query string parameters
    ///
    /// # Errors
    /// Returns `ConnectWiseError::Request` when the transport fails and
    /// `ConnectWiseError::Status` when the server answers with a non-2xx status.
    pub async fn make_request(
        &self,
        method: Method,
        path: &str,
        data: Option<&Value>,
        params: Option<&RequestParams>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url} params={params:?}");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.username, Some(&self.private_key));
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(data) = data {
            trace!("Request body: {data}");
            request = request.json(data);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{method} {url} failed with {status}");
            return Err(ConnectWiseError::Status { status, body });
        }
        Ok(response)
    }
}

fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert("clientid", HeaderValue::from_str(&config.client_id)?);
    headers.insert(
        ACCEPT,
        HeaderValue::from_str(&format!(
            "application/vnd.connectwise.com+json; version={}",
            config.api_version
        ))?,
    );

    Ok(Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .default_headers(headers)
        .build()?)
}

async fn fetch_company_info(http: &Client, config: &ClientConfig) -> Result<CompanyInfo> {
    let url = format!(
        "{}/login/companyinfo/{}",
        config.manage_origin(),
        config.company_id
    );
    debug!("GET {url}");

    let response = http.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ConnectWiseError::Status { status, body });
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
