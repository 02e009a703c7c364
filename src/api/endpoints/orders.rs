//
//  onesky-cli
//  api/endpoints/orders.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Translation order endpoints.
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`order_list`](OneSkyClient::order_list) | GET | `projects/{id}/orders` |
//! | [`order_show`](OneSkyClient::order_show) | GET | `projects/{id}/orders/{order_id}` |
//! | [`order_create`](OneSkyClient::order_create) | POST | `projects/{id}/orders` |

use serde::Serialize;

use super::{join_files, Pagination};
use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

/// Optional settings for [`OneSkyClient::order_create`].
///
/// Every field left as `None` is omitted from the request and the server applies
/// its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderOptions {
    /// `translate-only`, `review-only` or `translate-review`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_not_translated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_not_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_outdated: Option<bool>,
    /// `native` or `fluent`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_type: Option<String>,
    /// `not_specified`, `formal` or `informal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Free-text instructions for the translators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OneSkyClient {
    pub async fn order_list(
        &self,
        project_id: u64,
        pagination: &Pagination,
    ) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("projects/{project_id}/orders"),
            Params::from_options(pagination)?,
        )
        .await
    }

    pub async fn order_show(&self, project_id: u64, order_id: u64) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("projects/{project_id}/orders/{order_id}"),
            Params::new(),
        )
        .await
    }

    /// Places a translation order for `files` into `to_locale`.
    ///
    /// `files` is sent as one comma-separated value, the same way as
    /// [`quotation_show`](Self::quotation_show).
    pub async fn order_create(
        &self,
        project_id: u64,
        files: &[&str],
        to_locale: &str,
        options: &OrderOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::from_options(options)?;
        params.insert("files", join_files(files));
        params.insert("to_locale", to_locale);
        self.post(&format!("projects/{project_id}/orders"), params)
            .await
    }
}
