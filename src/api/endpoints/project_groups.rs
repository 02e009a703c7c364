//
//  onesky-cli
//  api/endpoints/project_groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project group endpoints.
//!
//! A project group bundles projects that share a base locale and a set of target
//! languages.
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`project_group_list`](OneSkyClient::project_group_list) | GET | `project-groups` |
//! | [`project_group_show`](OneSkyClient::project_group_show) | GET | `project-groups/{id}` |
//! | [`project_group_create`](OneSkyClient::project_group_create) | POST | `project-groups` |
//! | [`project_group_delete`](OneSkyClient::project_group_delete) | DELETE | `project-groups/{id}` |
//! | [`project_group_languages`](OneSkyClient::project_group_languages) | GET | `project-groups/{id}/languages` |

use super::Pagination;
use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

impl OneSkyClient {
    /// Lists project groups.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use onesky_cli::{ClientConfig, OneSkyClient, Pagination};
    ///
    /// # async fn example() -> Result<(), onesky_cli::ApiError> {
    /// let client = OneSkyClient::new(ClientConfig::new("key", "secret"))?;
    /// let first_page = client.project_group_list(&Pagination::default()).await?;
    /// let second_page = client.project_group_list(&Pagination::new(2, 10)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn project_group_list(
        &self,
        pagination: &Pagination,
    ) -> Result<ApiResponse, ApiError> {
        self.get("project-groups", Params::from_options(pagination)?)
            .await
    }

    /// Shows one project group.
    pub async fn project_group_show(&self, project_group_id: u64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("project-groups/{project_group_id}"), Params::new())
            .await
    }

    /// Creates a project group. `locale` is the base locale; the server picks its
    /// default when it is omitted.
    pub async fn project_group_create(
        &self,
        name: &str,
        locale: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let params = Params::new().with("name", name).with_opt("locale", locale);
        self.post("project-groups", params).await
    }

    /// Deletes a project group.
    pub async fn project_group_delete(
        &self,
        project_group_id: u64,
    ) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("project-groups/{project_group_id}"), Params::new())
            .await
    }

    /// Lists the languages enabled for a project group.
    pub async fn project_group_languages(
        &self,
        project_group_id: u64,
    ) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("project-groups/{project_group_id}/languages"),
            Params::new(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Method;
    use crate::api::endpoints::test_support::Harness;

    #[tokio::test]
    async fn test_project_group_list_without_paging_sends_only_auth() {
        let mut h = Harness::new().await;
        let mock = h.expect("GET", "/project-groups").await;

        let response = h
            .client
            .project_group_list(&Pagination::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(h.last().method, Method::Get);
        assert_eq!(h.last().url, h.url("project-groups"));
        h.assert_last_params(&[]);
    }

    #[tokio::test]
    async fn test_project_group_list_with_paging() {
        let mut h = Harness::new().await;
        let _mock = h.expect("GET", "/project-groups").await;

        h.client
            .project_group_list(&Pagination::new(2, 10))
            .await
            .unwrap();

        h.assert_last_params(&[("page", "2"), ("per_page", "10")]);
    }

    #[tokio::test]
    async fn test_project_group_create_omits_missing_locale() {
        let mut h = Harness::new().await;
        let mock = h.expect("POST", "/project-groups").await;

        h.client.project_group_create("Demo", None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(h.last().method, Method::Post);
        h.assert_last_params(&[("name", "Demo")]);

        h.client
            .project_group_create("Demo", Some("en"))
            .await
            .unwrap();
        h.assert_last_params(&[("name", "Demo"), ("locale", "en")]);
    }

    #[tokio::test]
    async fn test_project_group_show_delete_and_languages_paths() {
        let mut h = Harness::new().await;
        let show = h.expect("GET", "/project-groups/12").await;
        let delete = h.expect("DELETE", "/project-groups/12").await;
        let languages = h.expect("GET", "/project-groups/12/languages").await;

        h.client.project_group_show(12).await.unwrap();
        h.assert_last_params(&[]);
        h.client.project_group_delete(12).await.unwrap();
        assert_eq!(h.last().method, Method::Delete);
        h.client.project_group_languages(12).await.unwrap();
        assert_eq!(h.last().url, h.url("project-groups/12/languages"));

        show.assert_async().await;
        delete.assert_async().await;
        languages.assert_async().await;
    }

    #[tokio::test]
    async fn test_repeated_reads_differ_only_in_signature() {
        let mut h = Harness::new().await;
        let _mock = h.expect("GET", "/project-groups").await;

        h.client
            .project_group_list(&Pagination::default())
            .await
            .unwrap();
        h.client
            .project_group_list(&Pagination::default())
            .await
            .unwrap();

        let sent = h.sent.lock().unwrap();
        let (first, second) = (&sent[0].params, &sent[1].params);
        let keys = |p: &Params| p.iter().map(|(k, _)| k.to_string()).collect::<Vec<_>>();
        assert_eq!(keys(first), keys(second));
        assert_eq!(first.get("api_key"), second.get("api_key"));
        let same_second = first.get("timestamp") == second.get("timestamp");
        assert_eq!(same_second, first.get("dev_hash") == second.get("dev_hash"));
    }
}
