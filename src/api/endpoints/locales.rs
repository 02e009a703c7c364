//
//  onesky-cli
//  api/endpoints/locales.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::common::{ApiError, ApiResponse, Params};
use crate::api::OneSkyClient;

impl OneSkyClient {
    /// Lists every locale the platform supports.
    pub async fn locale_list(&self) -> Result<ApiResponse, ApiError> {
        self.get("locales", Params::new()).await
    }
}
