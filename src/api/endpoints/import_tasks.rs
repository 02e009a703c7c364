//
//  onesky-cli
//  api/endpoints/import_tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Import task endpoints. Every file upload creates an import task that tracks how
//! the platform processes the file.

use super::Pagination;
use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

impl OneSkyClient {
    /// Lists import tasks, optionally filtered by `status`
    /// (e.g. `all`, `in-progress`, `completed`, `failed`).
    pub async fn import_task_list(
        &self,
        project_id: u64,
        pagination: &Pagination,
        status: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        let params = Params::from_options(pagination)?.with_opt("status", status);
        self.get(&format!("projects/{project_id}/import-tasks"), params)
            .await
    }

    pub async fn import_task_show(
        &self,
        project_id: u64,
        import_id: u64,
    ) -> Result<ApiResponse, ApiError> {
        self.get(
            &format!("projects/{project_id}/import-tasks/{import_id}"),
            Params::new(),
        )
        .await
    }
}
