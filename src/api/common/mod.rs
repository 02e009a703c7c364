//
//  onesky-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by the request executor and every endpoint
//! method.
//!
//! # Overview
//!
//! - [`ApiError`] - Error type for all API operations
//! - [`Method`] - The four HTTP verbs the platform API uses
//! - [`ApiResponse`] - Status code plus normalized [`Outcome`]
//! - [`Params`] - Flat query parameter mapping (re-exported from [`params`])
//! - [`UploadSource`] - File, reader or buffer sent as a multipart body (re-exported from [`upload`])
//!
//! # Example
//!
//! ```rust
//! use onesky_cli::api::common::{ApiResponse, Outcome};
//!
//! fn describe(response: &ApiResponse) {
//!     match &response.outcome {
//!         Outcome::Downloaded { downloaded_filename } => {
//!             println!("{} saved to {}", response.status, downloaded_filename.display())
//!         }
//!         Outcome::Json(body) => println!("{} {}", response.status, body),
//!     }
//! }
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

mod params;
mod upload;

pub use params::*;
pub use upload::*;

/// Unified error type for all OneSky API operations.
///
/// Only failures of the exchange itself are errors. The API's own verdict, the HTTP
/// status code, is always returned as data in [`ApiResponse`].
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Network` | Connection, TLS, timeout or body transfer failure |
/// | `Io` | Local file failure while uploading or saving a download |
/// | `Serialization` | Request options could not be turned into parameters |
/// | `InvalidAttachment` | An attachment response without a usable filename |
/// | `UnsupportedMethod` | A verb string other than GET, POST, PUT or DELETE |
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level error occurred during the request.
    ///
    /// This covers connection failures, timeouts, DNS resolution errors,
    /// and other transport-layer issues. It is never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A local file could not be read for upload or written for download.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request options could not be serialized into query parameters.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response was flagged as an attachment but carried no filename.
    ///
    /// # Parameters
    ///
    /// - `0` - The raw `content-disposition` header value
    #[error("Attachment without a filename: {0}")]
    InvalidAttachment(String),

    /// The given verb is not one of GET, POST, PUT or DELETE.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// HTTP method for a request.
///
/// The platform API only uses these four verbs. Dispatch goes through a fixed
/// conversion into [`reqwest::Method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Returns the upper-case wire name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ApiError;

    /// Parses a verb case-insensitively.
    ///
    /// ```rust
    /// use onesky_cli::Method;
    ///
    /// assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
    /// assert!("PATCH".parse::<Method>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(ApiError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// The normalized body of a response.
///
/// Serializes without a tag, so a download renders as
/// `{"downloaded_filename": "<path>"}` and a JSON body renders as itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// The response was an attachment and its body was saved to disk.
    Downloaded {
        /// Download directory joined with the filename from the response header.
        downloaded_filename: PathBuf,
    },

    /// The decoded JSON body. An empty or unparseable body becomes an empty object.
    Json(Value),
}

impl Outcome {
    /// The outcome used when a body is absent or not JSON.
    pub fn empty() -> Self {
        Self::Json(Value::Object(Map::new()))
    }

    /// Returns the decoded body, if this is not a download.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Downloaded { .. } => None,
        }
    }

    /// Returns the saved file path, if this is a download.
    pub fn downloaded_filename(&self) -> Option<&Path> {
        match self {
            Self::Downloaded {
                downloaded_filename,
            } => Some(downloaded_filename),
            Self::Json(_) => None,
        }
    }

    /// Checks whether this is the empty JSON object.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Json(Value::Object(map)) if map.is_empty())
    }
}

/// The result of one request: the HTTP status code and the normalized body.
///
/// The status is never interpreted by the client; callers decide what a 4xx or
/// 5xx means for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// The HTTP status code, unchanged.
    pub status: u16,

    /// The decoded body or the download record.
    pub outcome: Outcome,
}

impl ApiResponse {
    /// Checks whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("Put".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("DELETE".parse::<Method>().unwrap(), Method::Delete);
        assert!(matches!(
            "patch".parse::<Method>(),
            Err(ApiError::UnsupportedMethod(m)) if m == "patch"
        ));
    }

    #[test]
    fn test_method_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Post), reqwest::Method::POST);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_outcome_serializes_like_a_plain_mapping() {
        let downloaded = Outcome::Downloaded {
            downloaded_filename: PathBuf::from("out/hi-IN.po"),
        };
        assert_eq!(
            serde_json::to_value(&downloaded).unwrap(),
            serde_json::json!({"downloaded_filename": "out/hi-IN.po"})
        );
        assert_eq!(serde_json::to_string(&Outcome::empty()).unwrap(), "{}");
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(Outcome::empty().is_empty());
        assert!(!Outcome::Json(serde_json::json!({"meta": {}})).is_empty());
        let downloaded = Outcome::Downloaded {
            downloaded_filename: PathBuf::from("a.po"),
        };
        assert_eq!(downloaded.downloaded_filename(), Some(Path::new("a.po")));
        assert!(downloaded.as_json().is_none());
    }

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse {
            status: 201,
            outcome: Outcome::empty(),
        };
        let missing = ApiResponse {
            status: 404,
            outcome: Outcome::empty(),
        };
        assert!(ok.is_success());
        assert!(!missing.is_success());
    }
}
