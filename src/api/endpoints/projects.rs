//
//  onesky-cli
//  api/endpoints/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project and project type endpoints.
//!
//! Projects live inside a project group; creation therefore goes through the group's
//! path while every other operation addresses the project directly.

use serde::Serialize;

use super::Pagination;
use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

/// Optional descriptive fields of a project, used on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OneSkyClient {
    /// Lists the projects of a project group.
    pub async fn project_list(
        &self,
        project_group_id: u64,
        pagination: &Pagination,
    ) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("project-groups/{project_group_id}/projects"),
            Params::from_options(pagination)?,
        )
        .await
    }

    pub async fn project_show(&self, project_id: u64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("projects/{project_id}"), Params::new())
            .await
    }

    /// Creates a project of `project_type` inside a project group.
    ///
    /// Valid project types are listed by [`project_type_list`](Self::project_type_list).
    pub async fn project_create(
        &self,
        project_group_id: u64,
        project_type: &str,
        details: &ProjectDetails,
    ) -> Result<ApiResponse, ApiError> {
        let mut params = Params::from_options(details)?;
        params.insert("project_type", project_type);
        self.post(&format!("project-groups/{project_group_id}/projects"), params)
            .await
    }

    /// Updates a project's name and/or description. Fields left as `None` are not
    /// sent and keep their current value.
    pub async fn project_update(
        &self,
        project_id: u64,
        details: &ProjectDetails,
    ) -> Result<ApiResponse, ApiError> {
        self.put(
            &format!("projects/{project_id}"),
            Params::from_options(details)?,
        )
        .await
    }

    pub async fn project_delete(&self, project_id: u64) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("projects/{project_id}"), Params::new())
            .await
    }

    /// Lists the languages enabled for a project.
    pub async fn project_languages(&self, project_id: u64) -> Result<ApiResponse, ApiError> {
        self.get(&format!("projects/{project_id}/languages"), Params::new())
            .await
    }

    /// Lists the project types the platform supports.
    pub async fn project_type_list(&self) -> Result<ApiResponse, ApiError> {
        self.get("project-types", Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Method;
    use crate::api::endpoints::test_support::Harness;

    #[tokio::test]
    async fn test_project_list_uses_group_path() {
        let mut h = Harness::new().await;
        let mock = h.expect("GET", "/project-groups/5/projects").await;

        h.client
            .project_list(5, &Pagination { page: Some(3), per_page: None })
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[("page", "3")]);
    }

    #[tokio::test]
    async fn test_project_create_sends_type_and_given_details() {
        let mut h = Harness::new().await;
        let mock = h.expect("POST", "/project-groups/5/projects").await;

        let details = ProjectDetails {
            name: Some("Website".to_string()),
            description: None,
        };
        h.client
            .project_create(5, "website", &details)
            .await
            .unwrap();

        mock.assert_async().await;
        h.assert_last_params(&[("project_type", "website"), ("name", "Website")]);
    }

    #[tokio::test]
    async fn test_project_update_is_a_put() {
        let mut h = Harness::new().await;
        let mock = h.expect("PUT", "/projects/9").await;

        let details = ProjectDetails {
            name: None,
            description: Some("Marketing site".to_string()),
        };
        h.client.project_update(9, &details).await.unwrap();

        mock.assert_async().await;
        assert_eq!(h.last().method, Method::Put);
        h.assert_last_params(&[("description", "Marketing site")]);
    }

    #[tokio::test]
    async fn test_project_show_delete_languages_and_types() {
        let mut h = Harness::new().await;
        let show = h.expect("GET", "/projects/9").await;
        let delete = h.expect("DELETE", "/projects/9").await;
        let languages = h.expect("GET", "/projects/9/languages").await;
        let types = h.expect("GET", "/project-types").await;

        h.client.project_show(9).await.unwrap();
        h.client.project_delete(9).await.unwrap();
        h.client.project_languages(9).await.unwrap();
        h.client.project_type_list().await.unwrap();
        h.assert_last_params(&[]);

        show.assert_async().await;
        delete.assert_async().await;
        languages.assert_async().await;
        types.assert_async().await;
    }
}
