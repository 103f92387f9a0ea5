use std::path::Path;

use reqwest::blocking::{Client, RequestBuilder, Response, multipart::Form};
use serde::Deserialize;
use tracing::debug;

use super::{BulkError, JobCreated, JobList, JobStatus, PreviewList, VerificationApi};
use crate::config::{ConfigError, ProviderConfig};
use crate::verdict::{Deliverability, Risk, ValidationResult};

/// Blocking client for the Mailgun v4 address validation API.
///
/// Constructing one is the only way to reach the provider: a missing key
/// surfaces as [`ConfigError`] instead of a half-initialised client.
#[derive(Clone)]
pub struct MailgunClient {
    http: Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SingleValidation {
    #[serde(default)]
    address: String,
    #[serde(default)]
    result: String,
    #[serde(default)]
    risk: String,
    #[serde(default)]
    reason: Vec<String>,
    #[serde(default)]
    is_disposable_address: bool,
    #[serde(default)]
    is_role_address: bool,
}

impl MailgunClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .user_agent(format!("mailclean/{}", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .build()
            .map_err(ConfigError::http_client)?;
        Ok(Self {
            http,
            api_base: config.api_base().to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Validates one address synchronously.
    pub fn validate_address(&self, address: &str) -> Result<ValidationResult, BulkError> {
        let url = format!("{}/v4/address/validate", self.api_base);
        let request = self.authed(self.http.get(&url)).query(&[("address", address)]);
        let body: SingleValidation = Self::send(&url, request)?
            .json()
            .map_err(|err| BulkError::decode(&url, err))?;

        let reported = if body.address.trim().is_empty() {
            address
        } else {
            body.address.as_str()
        };
        Ok(ValidationResult::new(reported)
            .with_result(Deliverability::parse(&body.result))
            .with_risk(Risk::parse(&body.risk))
            .with_reason(body.reason.join("; "))
            .disposable(body.is_disposable_address)
            .role(body.is_role_address))
    }

    /// Lists existing bulk jobs; useful to confirm bulk access is enabled.
    pub fn list_jobs(&self) -> Result<JobList, BulkError> {
        let url = format!("{}/v4/address/validate/bulk", self.api_base);
        Self::send(&url, self.authed(self.http.get(&url)))?
            .json()
            .map_err(|err| BulkError::decode(&url, err))
    }

    /// Lists existing bulk previews; preview access is granted separately
    /// from full bulk validation.
    pub fn list_previews(&self) -> Result<PreviewList, BulkError> {
        let url = format!("{}/v4/address/validate/preview", self.api_base);
        Self::send(&url, self.authed(self.http.get(&url)))?
            .json()
            .map_err(|err| BulkError::decode(&url, err))
    }

    fn job_url(&self, job_id: &str) -> String {
        format!("{}/v4/address/validate/bulk/{}", self.api_base, job_id)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth("api", Some(&self.api_key))
    }

    fn send(url: &str, request: RequestBuilder) -> Result<Response, BulkError> {
        debug!(url, "sending request");
        let response = request
            .send()
            .map_err(|err| BulkError::network(url, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(BulkError::Http {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl VerificationApi for MailgunClient {
    fn create_job(&self, job_id: &str, list: &Path) -> Result<JobCreated, BulkError> {
        let url = self.job_url(job_id);
        let form = Form::new()
            .file("file", list)
            .map_err(BulkError::submission)?;
        Self::send(&url, self.authed(self.http.post(&url)).multipart(form))?
            .json()
            .map_err(|err| BulkError::decode(&url, err))
    }

    fn job_status(&self, job_id: &str) -> Result<JobStatus, BulkError> {
        let url = self.job_url(job_id);
        Self::send(&url, self.authed(self.http.get(&url)))?
            .json()
            .map_err(|err| BulkError::decode(&url, err))
    }

    // download links are pre-signed, no credentials attached
    fn download_results(&self, url: &str) -> Result<Vec<u8>, BulkError> {
        let response = Self::send(url, self.http.get(url))?;
        let bytes = response
            .bytes()
            .map_err(|err| BulkError::decode(url, err))?;
        Ok(bytes.to_vec())
    }
}
