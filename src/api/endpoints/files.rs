//
//  onesky-cli
//  api/endpoints/files.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Source file endpoints.
//!
//! Uploads are the only requests with a body: the file is streamed as the multipart
//! field `file` while the remaining parameters still travel in the query string.

use std::path::Path;

use serde::Serialize;

use super::Pagination;
use crate::api::common::{ApiError, ApiResponse, Method, Params, UploadSource};
use crate::api::OneSkyClient;

/// Optional settings for [`OneSkyClient::file_upload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileUploadOptions {
    /// Locale of the uploaded strings; the project's base locale when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Keep strings that no longer appear in the new version of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_keeping_all_strings: Option<bool>,
}

impl OneSkyClient {
    /// Lists the files uploaded to a project.
    pub async fn file_list(
        &self,
        project_id: u64,
        pagination: &Pagination,
    ) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("projects/{project_id}/files"),
            Params::from_options(pagination)?,
        )
        .await
    }

    /// Uploads a local file to a project.
    ///
    /// # Parameters
    ///
    /// * `project_id` - The target project
    /// * `path` - Local file to upload; its final path component becomes the
    ///   multipart filename
    /// * `file_format` - Platform file format identifier, e.g. `GNU_POT`
    /// * `options` - Optional locale and string retention flag
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be opened, before any request is
    /// sent.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use onesky_cli::api::endpoints::FileUploadOptions;
    /// use onesky_cli::{ClientConfig, OneSkyClient};
    ///
    /// # async fn example() -> Result<(), onesky_cli::ApiError> {
    /// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
    /// let response = client
    ///     .file_upload(42, "po/messages.pot".as_ref(), "GNU_POT", &FileUploadOptions::default())
    ///     .await?;
    /// println!("upload returned {}", response.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn file_upload(
        &self,
        project_id: u64,
        path: &Path,
        file_format: &str,
        options: &FileUploadOptions,
    ) -> Result<ApiResponse, ApiError> {
        let upload = UploadSource::open(path).await?;
        let mut params = Params::from_options(options)?;
        params.insert("file_format", file_format);

        self.execute(
            &format!("projects/{project_id}/files"),
            Method::Post,
            params,
            Some(upload),
        )
        .await
    }

    /// Deletes an uploaded file by name.
    pub async fn file_delete(
        &self,
        project_id: u64,
        file_name: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.delete(
            &format!("projects/{project_id}/files"),
            Params::new().with("file_name", file_name),
        )
        .await
    }
}
