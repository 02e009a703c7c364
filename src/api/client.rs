//
//  onesky-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authenticated Request Executor
//!
//! This module provides the HTTP client for the OneSky platform API. Every endpoint
//! method funnels into [`OneSkyClient::execute`], which:
//!
//! 1. signs the request with a fresh [`AuthToken`]
//! 2. merges the caller's parameters with the authentication fields (auth wins)
//! 3. reports the request to the configured [`RequestObserver`], if any
//! 4. sends the parameters as URL query parameters, with an optional multipart file
//! 5. saves `content-disposition: attachment` responses to the download directory,
//!    and decodes everything else as JSON (empty object on failure)
//!
//! The status code is returned as data and never turned into an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::common::{ApiError, ApiResponse, Method, Outcome, Params, UploadSource, UPLOAD_FIELD};
use crate::auth::AuthToken;

/// Base URL of the OneSky platform API. Relative paths are appended to it as-is.
pub const DEFAULT_API_URL: &str = "https://platform.api.onesky.io/1/";

/// Prefix of a `content-disposition` value that marks a file download.
const ATTACHMENT_PREFIX: &str = "attachment;";

/// Callback invoked with `(method, absolute_url, params)` right before each request
/// is sent.
///
/// The observer sees the final merged parameters, authentication fields included. It
/// cannot change the request.
pub type RequestObserver = Arc<dyn Fn(Method, &str, &Params) + Send + Sync>;

/// Immutable client settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use onesky_cli::ClientConfig;
///
/// let config = ClientConfig::new("key", "secret")
///     .with_download_dir("translations")
///     .with_timeout(Duration::from_secs(30));
///
/// assert_eq!(config.api_url(), "https://platform.api.onesky.io/1/");
/// assert_eq!(config.download_dir().to_str(), Some("translations"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    api_url: String,
    api_key: String,
    api_secret: String,
    download_dir: PathBuf,
    observer: Option<RequestObserver>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a configuration for the default API URL, saving downloads to the
    /// current directory.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            download_dir: PathBuf::from("."),
            observer: None,
            timeout: None,
        }
    }

    /// Overrides the base URL. It must end the way relative paths expect, normally
    /// with a `/`.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the directory attachments are saved to.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Installs a request observer.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(Method, &str, &Params) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Applies a total timeout to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("download_dir", &self.download_dir)
            .field("observer", &self.observer.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// The OneSky platform API client.
///
/// Holds only immutable configuration and the underlying HTTP client. Each call to
/// [`execute`](Self::execute) performs exactly one round trip.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use onesky_cli::{ClientConfig, OneSkyClient};
///
/// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
/// # Ok::<(), onesky_cli::ApiError>(())
/// ```
#[derive(Debug)]
pub struct OneSkyClient {
    /// The underlying HTTP client
    http: Client,
    /// Immutable session settings
    config: ClientConfig,
}

impl OneSkyClient {
    /// Creates a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client could not be built (for
    /// example when the TLS backend fails to initialise).
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(format!("onesky/{}", crate::VERSION));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns `api_url + relative_path`, with no slash normalization.
    ///
    /// ```rust,no_run
    /// use onesky_cli::{ClientConfig, OneSkyClient};
    ///
    /// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
    /// assert_eq!(
    ///     client.absolute_url("project-groups"),
    ///     "https://platform.api.onesky.io/1/project-groups"
    /// );
    /// # Ok::<(), onesky_cli::ApiError>(())
    /// ```
    pub fn absolute_url(&self, relative_path: &str) -> String {
        format!("{}{}", self.config.api_url, relative_path)
    }

    /// Sends one signed request and normalizes the response.
    ///
    /// # Parameters
    ///
    /// * `relative_path` - Appended to the base URL (e.g. `"projects/42/files"`)
    /// * `method` - The HTTP verb
    /// * `params` - Caller parameters; sent as query parameters for every verb
    /// * `upload` - Optional file sent as a `multipart/form-data` body under `file`
    ///
    /// # Returns
    ///
    /// The status code, unchanged, together with the [`Outcome`]:
    /// - `Outcome::Downloaded` when `content-disposition` starts with `attachment;`
    /// - `Outcome::Json` otherwise, an empty object if the body is not JSON
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] for connection, timeout or body transfer failures
    /// - [`ApiError::Io`] if an upload cannot be read or a download cannot be written
    /// - [`ApiError::InvalidAttachment`] for an attachment header without a filename
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use onesky_cli::{ClientConfig, Method, OneSkyClient, Params};
    ///
    /// # async fn example() -> Result<(), onesky_cli::ApiError> {
    /// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
    /// let params = Params::new().with("page", 2);
    /// let response = client.execute("project-groups", Method::Get, params, None).await?;
    /// if !response.is_success() {
    ///     eprintln!("request failed with {}", response.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(
        &self,
        relative_path: &str,
        method: Method,
        mut params: Params,
        upload: Option<UploadSource>,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.absolute_url(relative_path);

        AuthToken::generate(&self.config.api_key, &self.config.api_secret)
            .apply_to_params(&mut params);

        if let Some(observer) = &self.config.observer {
            observer(method, &url, &params);
        }

        debug!(%method, %url, params = params.len(), upload = upload.is_some(), "Sending request");

        let mut request = self.http.request(method.into(), &url).query(&params);
        if let Some(upload) = upload {
            request = request.multipart(Form::new().part(UPLOAD_FIELD, upload.into_part()));
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        let outcome = match attachment_filename(response.headers())? {
            Some(file_name) => self.save_attachment(&file_name, response).await?,
            None => decode_body(response).await?,
        };

        Ok(ApiResponse { status, outcome })
    }

    /// Shorthand for a GET without upload.
    pub(crate) async fn get(&self, path: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.execute(path, Method::Get, params, None).await
    }

    /// Shorthand for a POST without upload.
    pub(crate) async fn post(&self, path: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.execute(path, Method::Post, params, None).await
    }

    /// Shorthand for a PUT without upload.
    pub(crate) async fn put(&self, path: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.execute(path, Method::Put, params, None).await
    }

    /// Shorthand for a DELETE without upload.
    pub(crate) async fn delete(&self, path: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.execute(path, Method::Delete, params, None).await
    }

    /// Streams the response body into `<download_dir>/<file_name>`, replacing any
    /// existing file.
    async fn save_attachment(
        &self,
        file_name: &str,
        mut response: Response,
    ) -> Result<Outcome, ApiError> {
        let path = self.config.download_dir.join(file_name);
        let mut file = tokio::fs::File::create(&path).await?;

        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!(path = %path.display(), bytes = written, "Saved attachment");

        Ok(Outcome::Downloaded {
            downloaded_filename: path,
        })
    }
}

/// Extracts the download filename from the response headers.
///
/// Returns `Ok(None)` unless `content-disposition` starts with `attachment;`.
/// The value is decoded lossily, so non-ASCII filenames still count as attachments.
fn attachment_filename(headers: &HeaderMap) -> Result<Option<String>, ApiError> {
    match headers.get(CONTENT_DISPOSITION) {
        Some(value) => parse_attachment_filename(&String::from_utf8_lossy(value.as_bytes())),
        None => Ok(None),
    }
}

/// Parses a `content-disposition` value such as `attachment; filename=hi-IN.po`.
///
/// The filename is the second `=`-separated segment. Surrounding whitespace and
/// double quotes are trimmed and only the final path component is kept, so a
/// download always lands directly inside the download directory.
pub fn parse_attachment_filename(disposition: &str) -> Result<Option<String>, ApiError> {
    if !disposition.starts_with(ATTACHMENT_PREFIX) {
        return Ok(None);
    }

    disposition
        .split('=')
        .nth(1)
        .map(|raw| raw.trim().trim_matches('"'))
        .and_then(|raw| Path::new(raw).file_name())
        .and_then(|name| name.to_str())
        .map(|name| Some(name.to_string()))
        .ok_or_else(|| ApiError::InvalidAttachment(disposition.to_string()))
}

/// Decodes a JSON body. Empty or malformed bodies become an empty object.
async fn decode_body(response: Response) -> Result<Outcome, ApiError> {
    let body = response.bytes().await?;

    match serde_json::from_slice::<Value>(&body) {
        Ok(value) => Ok(Outcome::Json(value)),
        Err(e) => {
            if !body.is_empty() {
                warn!(error = %e, bytes = body.len(), "Response body is not JSON");
            }
            Ok(Outcome::empty())
        }
    }
}
