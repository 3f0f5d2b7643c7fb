/*
[INPUT]:  Resource path, method, query params, body and per-call options
[OUTPUT]: ApiRequest value consumed by Connector::request
[POS]:    HTTP layer - request description and pagination
[UPDATE]: When adding per-call options
*/

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;

use crate::http::Result;

/// Query parameters sent with a request
pub type Params = BTreeMap<String, String>;

pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Page selection for listing endpoints, sent as `offset`/`limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }

    /// Insert `offset` and `limit` unless the caller already set them.
    pub fn apply(&self, params: &mut Params) {
        params
            .entry("offset".to_string())
            .or_insert_with(|| self.offset().to_string());
        params
            .entry("limit".to_string())
            .or_insert_with(|| self.limit.to_string());
    }
}

/// One call to `/api/{version}/{resource}`
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) resource: String,
    pub(crate) params: Params,
    pub(crate) body: Option<String>,
    pub(crate) return_on_error: bool,
    pub(crate) version: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            resource: resource.into(),
            params: Params::new(),
            body: None,
            return_on_error: false,
            version: None,
        }
    }

    pub fn get(resource: impl Into<String>) -> Self {
        Self::new(Method::GET, resource)
    }

    pub fn post(resource: impl Into<String>) -> Self {
        Self::new(Method::POST, resource)
    }

    pub fn put(resource: impl Into<String>) -> Self {
        Self::new(Method::PUT, resource)
    }

    pub fn delete(resource: impl Into<String>) -> Self {
        Self::new(Method::DELETE, resource)
    }

    /// Merge `params` into the query, overwriting keys already present
    pub fn with_params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        pagination.apply(&mut self.params);
        self
    }

    /// Already serialized JSON body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self> {
        Ok(self.with_body(serde_json::to_string(body)?))
    }

    /// Return the decoded envelope of a failed call instead of an error
    pub fn return_on_error(mut self) -> Self {
        self.return_on_error = true;
        self
    }

    /// Pin the call to an API revision other than the connector default
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
