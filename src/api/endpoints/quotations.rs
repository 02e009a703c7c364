//
//  onesky-cli
//  api/endpoints/quotations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Quotation endpoint: prices a translation order before it is placed.

use serde::Serialize;

use super::join_files;
use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

/// Optional settings for [`OneSkyClient::quotation_show`].
///
/// The same switches exist on orders; see
/// [`OrderOptions`](super::OrderOptions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuotationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_not_translated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_not_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_including_outdated: Option<bool>,
    /// Subject area of the content, e.g. `general` or `game`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

impl OneSkyClient {
    /// Quotes the cost of translating `files` into `to_locale`.
    ///
    /// `files` is sent as one comma-separated value.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use onesky_cli::api::endpoints::QuotationOptions;
    /// use onesky_cli::{ClientConfig, OneSkyClient};
    ///
    /// # async fn example() -> Result<(), onesky_cli::ApiError> {
    /// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
    /// let quote = client
    ///     .quotation_show(42, &["app.po", "web.po"], "ja", &QuotationOptions::default())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn quotation_show(
        &self,
        project_id: u64,
        files: &[&str],
        to_locale: &str,
        options: &QuotationOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::from_options(options)?;
        params.insert("files", join_files(files));
        params.insert("to_locale", to_locale);
        self.get(&format!("projects/{project_id}/quotations"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints::test_support::Harness;

    #[tokio::test]
    async fn test_quotation_show_joins_files() {
        let mut h = Harness::new().await;
        let mock = h.expect("GET", "/projects/8/quotations").await;

        let options = QuotationOptions {
            is_including_outdated: Some(false),
            ..Default::default()
        };
        h.client
            .quotation_show(8, &["app.po", "web.po"], "ja", &options)
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[
            ("files", "app.po,web.po"),
            ("to_locale", "ja"),
            ("is_including_outdated", "false"),
        ]);
    }
}
