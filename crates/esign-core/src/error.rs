use thiserror::Error;

use crate::types::RegionVersion;

/// REST API guide listing the deployment URLs, referenced from region
/// validation failures.
pub const REST_API_DOCS: &str =
    "https://docs.esignlive.com/content/c_integrator_s_guide/rest_api/rest_api.htm";

/// Unified error type for the eSignLive client workspace.
#[derive(Error, Debug)]
pub enum EsignError {
    // ── Validation errors ──────────────────────────────────────
    #[error(
        "url version '{0}' is not supported; url version must be set to one of the following: {valid}. Check {REST_API_DOCS}",
        valid = RegionVersion::NAMES.join(", ")
    )]
    UrlVersion(String),

    #[error("environment '{0}' is not supported; environment must be set to 'sandbox' or 'production'")]
    Environment(String),

    // ── Transport errors ───────────────────────────────────────
    #[error("api key is not a valid header value: {0}")]
    Header(String),

    #[error("http client error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, EsignError>;
