//
//  onesky-cli
//  api/endpoints/translations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Translation export and status endpoints.
//!
//! Exports answer with the translated file as an attachment, which the executor saves
//! into the configured download directory. While an export is still being prepared
//! the server answers `202` with an empty body instead.

use serde::Serialize;

use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

/// Optional settings for [`OneSkyClient::translation_export_multilingual`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultilingualExportOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
}

impl OneSkyClient {
    /// Exports the translations of one source file into one locale.
    pub async fn translation_export(
        &self,
        project_id: u64,
        locale: &str,
        source_file_name: &str,
        export_file_name: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let params = Params::new()
            .with("locale", locale)
            .with("source_file_name", source_file_name)
            .with_opt("export_file_name", export_file_name);
        self.get(&format!("projects/{project_id}/translations"), params)
            .await
    }

    /// Exports the translations of one source file into every locale, as a single
    /// multilingual file.
    pub async fn translation_export_multilingual(
        &self,
        project_id: u64,
        source_file_name: &str,
        options: &MultilingualExportOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::from_options(options)?;
        params.insert("source_file_name", source_file_name);
        self.get(
            &format!("projects/{project_id}/translations/multilingual"),
            params,
        )
        .await
    }

    /// Reports translation progress of a file in one locale.
    pub async fn translation_status(
        &self,
        project_id: u64,
        file_name: &str,
        locale: &str,
    ) -> Result<ApiResponse, ApiError> {
        let params = Params::new()
            .with("file_name", file_name)
            .with("locale", locale);
        self.get(&format!("projects/{project_id}/translations/status"), params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::api::common::Outcome;
    use crate::api::endpoints::test_support::Harness;

    #[tokio::test]
    async fn test_translation_export_downloads_attachment() {
        let mut h = Harness::new().await;
        let mock = h
            .server
            .mock("GET", "/projects/2/translations")
            .match_query(Matcher::UrlEncoded("locale".into(), "hi-IN".into()))
            .with_status(200)
            .with_header("content-disposition", "attachment; filename=hi-IN.po")
            .with_body("msgid \"a\"\nmsgstr \"b\"\n")
            .create_async()
            .await;

        let response = h
            .client
            .translation_export(2, "hi-IN", "strings.pot", None)
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[("locale", "hi-IN"), ("source_file_name", "strings.pot")]);

        let expected = h.download_dir.path().join("hi-IN.po");
        assert_eq!(
            response.outcome,
            Outcome::Downloaded {
                downloaded_filename: expected.clone()
            }
        );
        assert_eq!(
            std::fs::read_to_string(expected).unwrap(),
            "msgid \"a\"\nmsgstr \"b\"\n"
        );
    }

    #[tokio::test]
    async fn test_translation_export_multilingual() {
        let mut h = Harness::new().await;
        let mock = h
            .expect("GET", "/projects/2/translations/multilingual")
            .await;

        let options = MultilingualExportOptions {
            export_file_name: None,
            file_format: Some("I18NEXT_MULTILINGUAL_JSON".to_string()),
        };
        h.client
            .translation_export_multilingual(2, "en.json", &options)
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[
            ("source_file_name", "en.json"),
            ("file_format", "I18NEXT_MULTILINGUAL_JSON"),
        ]);
    }

    #[tokio::test]
    async fn test_translation_status() {
        let mut h = Harness::new().await;
        let mock = h.expect("GET", "/projects/2/translations/status").await;

        h.client
            .translation_status(2, "strings.pot", "ja")
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[("file_name", "strings.pot"), ("locale", "ja")]);
    }
}
