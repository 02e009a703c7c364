//
//  onesky-cli
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoint methods of the OneSky platform API.
//!
//! Each method is a thin mapping onto [`OneSkyClient::execute`](super::OneSkyClient):
//! it substitutes identifiers into a fixed path template, picks the verb and builds the
//! parameter set. No method validates its input or issues more than one request.
//!
//! | Module | Resources |
//! |--------|-----------|
//! | [`project_groups`] | project groups and their languages |
//! | [`projects`] | projects, their languages, project types |
//! | [`files`] | file listing, upload and deletion |
//! | [`translations`] | exports and translation status |
//! | [`import_tasks`] | import task listing and lookup |
//! | [`quotations`] | translation quotations |
//! | [`orders`] | translation orders |
//! | [`locales`] | supported locales |

pub mod files;
pub mod import_tasks;
pub mod locales;
pub mod orders;
pub mod project_groups;
pub mod projects;
pub mod quotations;
pub mod translations;

pub use files::FileUploadOptions;
pub use orders::OrderOptions;
pub use projects::ProjectDetails;
pub use quotations::QuotationOptions;
pub use translations::MultilingualExportOptions;

use serde::Serialize;

/// Page selection accepted by the list endpoints.
///
/// Both fields are optional; absent ones are left to the server's defaults.
///
/// ```rust
/// use onesky_cli::Pagination;
///
/// let page = Pagination::new(2, 10);
/// assert_eq!(page.page, Some(2));
/// assert_eq!(Pagination::default().per_page, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

/// Joins file names into the single comma-separated value the quotation and order
/// endpoints expect.
pub(crate) fn join_files(files: &[&str]) -> String {
    files.join(",")
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for the endpoint tests: a client pointed at a mock server
    //! that records every request it is asked to send.

    use std::sync::{Arc, Mutex};

    use mockito::{Matcher, Mock, Server, ServerGuard};

    use crate::api::common::{Method, Params};
    use crate::api::{ClientConfig, OneSkyClient};
    use crate::auth::{dev_hash, API_KEY_PARAM, DEV_HASH_PARAM, TIMESTAMP_PARAM};

    pub const KEY: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
    pub const SECRET: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    #[derive(Debug, Clone)]
    pub struct Sent {
        pub method: Method,
        pub url: String,
        pub params: Params,
    }

    pub struct Harness {
        pub server: ServerGuard,
        pub client: OneSkyClient,
        pub sent: Arc<Mutex<Vec<Sent>>>,
        pub download_dir: tempfile::TempDir,
    }

    impl Harness {
        pub async fn new() -> Self {
            let server = Server::new_async().await;
            let download_dir = tempfile::tempdir().unwrap();
            let sent: Arc<Mutex<Vec<Sent>>> = Arc::default();
            let sink = Arc::clone(&sent);

            let config = ClientConfig::new(KEY, SECRET)
                .with_api_url(format!("{}/", server.url()))
                .with_download_dir(download_dir.path())
                .with_observer(move |method, url, params| {
                    sink.lock().unwrap().push(Sent {
                        method,
                        url: url.to_string(),
                        params: params.clone(),
                    });
                });

            Self {
                server,
                client: OneSkyClient::new(config).unwrap(),
                sent,
                download_dir,
            }
        }

        /// Mocks `method path` with an empty JSON object response.
        pub async fn expect(&mut self, method: &str, path: &str) -> Mock {
            self.server
                .mock(method, path)
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body("{}")
                .create_async()
                .await
        }

        pub fn url(&self, relative: &str) -> String {
            format!("{}/{}", self.server.url(), relative)
        }

        pub fn last(&self) -> Sent {
            self.sent.lock().unwrap().last().cloned().unwrap()
        }

        /// Asserts the last request carried exactly `expected` plus the three
        /// authentication fields.
        pub fn assert_last_params(&self, expected: &[(&str, &str)]) {
            let params = self.last().params;
            for (key, value) in expected {
                assert_eq!(params.get(key), Some(*value), "parameter {key}");
            }
            assert_eq!(params.len(), expected.len() + 3, "unexpected params {params:?}");
            assert_eq!(params.get(API_KEY_PARAM), Some(KEY));
            let timestamp = params.get(TIMESTAMP_PARAM).unwrap();
            assert_eq!(
                params.get(DEV_HASH_PARAM),
                Some(dev_hash(timestamp, SECRET).as_str())
            );
        }
    }
}
