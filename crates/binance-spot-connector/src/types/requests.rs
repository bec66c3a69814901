/*
[INPUT]:  Endpoint declarations, required parameters and optional parameter bags
[OUTPUT]: Validated, immutable request descriptors
[POS]:    Data layer - the shared endpoint declaration pattern
[UPDATE]: When endpoint security types or merge rules change
*/

use reqwest::Method;

use super::params::{ParamValue, Params};
use crate::http::Result;
use crate::validation::require_param;

/// How a request is authenticated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// `timestamp` + HMAC `signature` + API key header
    Signed,
    /// API key header only
    ApiKey,
}

/// Fixed `(method, path)` pair of one remote operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub security: Security,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
            security: Security::Signed,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: Method::POST,
            path,
            security: Security::Signed,
        }
    }

    pub const fn put(path: &'static str) -> Self {
        Self {
            method: Method::PUT,
            path,
            security: Security::Signed,
        }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self {
            method: Method::DELETE,
            path,
            security: Security::Signed,
        }
    }

    /// Same endpoint, authenticated by API key only
    pub fn api_key_only(mut self) -> Self {
        self.security = Security::ApiKey;
        self
    }
}

/// One outbound call: method, path and the merged parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: &'static str,
    security: Security,
    params: Params,
}

impl RequestDescriptor {
    /// Validate `required` in order, then merge it over `optional`.
    ///
    /// The first blank required value aborts the build. On key collision the
    /// required value wins.
    pub fn build(
        endpoint: Endpoint,
        required: Vec<(&'static str, ParamValue)>,
        optional: Params,
    ) -> Result<Self> {
        for (name, value) in &required {
            require_param(name, value)?;
        }

        let mut params = optional;
        for (name, value) in required {
            params.insert(name, value);
        }

        Ok(Self {
            method: endpoint.method,
            path: endpoint.path,
            security: endpoint.security,
            params,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn security(&self) -> Security {
        self.security
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn into_params(self) -> Params {
        self.params
    }
}
