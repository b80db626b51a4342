use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EsignError;

/// Geographic / regulatory deployment of the eSignLive service.
///
/// Wire names carry underscores (`us_11`), so serde renames are spelled
/// out rather than inferred from the variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionVersion {
    #[serde(rename = "us_11")]
    Us11,
    #[serde(rename = "us_10")]
    Us10,
    #[serde(rename = "us_gov")]
    UsGov,
    #[serde(rename = "ca")]
    Ca,
    #[serde(rename = "aus")]
    Aus,
    #[serde(rename = "eu")]
    Eu,
}

impl RegionVersion {
    /// Every supported region, in documentation order.
    pub const ALL: [RegionVersion; 6] = [
        RegionVersion::Us11,
        RegionVersion::Us10,
        RegionVersion::UsGov,
        RegionVersion::Ca,
        RegionVersion::Aus,
        RegionVersion::Eu,
    ];

    /// Wire names accepted by [`FromStr`], in the same order as [`ALL`](Self::ALL).
    pub const NAMES: [&'static str; 6] = ["us_11", "us_10", "us_gov", "ca", "aus", "eu"];

    pub const fn as_str(self) -> &'static str {
        match self {
            RegionVersion::Us11 => "us_11",
            RegionVersion::Us10 => "us_10",
            RegionVersion::UsGov => "us_gov",
            RegionVersion::Ca => "ca",
            RegionVersion::Aus => "aus",
            RegionVersion::Eu => "eu",
        }
    }

    /// Base URL for this region in the given environment.
    ///
    /// `Aus` and `Eu` have no sandbox deployment; those lookups resolve to
    /// an empty string, matching the upstream endpoint table.
    pub const fn endpoint(self, environment: Environment) -> &'static str {
        use Environment::*;
        use RegionVersion::*;
        match (self, environment) {
            (Us11, Sandbox) => "https://sandbox.esignlive.com/api",
            (Us11, Production) => "https://apps.esignlive.com/api",
            (Us10, Sandbox) => "https://sandbox.e-signlive.com/api",
            (Us10, Production) => "https://apps.e-signlive.com/api",
            (UsGov, Sandbox) => "https://signer-sandbox-gov.esignlive.com/api",
            (UsGov, Production) => "https://signer-gov.esignlive.com/api",
            (Ca, Sandbox) => "https://sandbox.e-signlive.ca/api",
            (Ca, Production) => "https://apps.e-signlive.ca/api",
            (Aus, Sandbox) => "",
            (Aus, Production) => "https://apps.esignlive.com.au/api",
            (Eu, Sandbox) => "",
            (Eu, Production) => "https://apps.esignlive.eu/api",
        }
    }
}

impl fmt::Display for RegionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionVersion {
    type Err = EsignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us_11" => Ok(RegionVersion::Us11),
            "us_10" => Ok(RegionVersion::Us10),
            "us_gov" => Ok(RegionVersion::UsGov),
            "ca" => Ok(RegionVersion::Ca),
            "aus" => Ok(RegionVersion::Aus),
            "eu" => Ok(RegionVersion::Eu),
            other => Err(EsignError::UrlVersion(other.to_string())),
        }
    }
}

/// Sandbox vs production deployment within a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Sandbox, Environment::Production];

    pub const fn as_str(self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = EsignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            other => Err(EsignError::Environment(other.to_string())),
        }
    }
}
