#[cfg(test)]
mod tests {
    use esign_core::*;
    use std::str::FromStr;

    // ── RegionVersion tests ────────────────────────────────────

    #[test]
    fn test_region_from_str_accepts_all_wire_names() {
        for (name, region) in RegionVersion::NAMES.iter().zip(RegionVersion::ALL) {
            assert_eq!(RegionVersion::from_str(name).unwrap(), region);
        }
    }

    #[test]
    fn test_region_from_str_rejects_unknown() {
        let err = RegionVersion::from_str("us_9").unwrap_err();
        assert!(matches!(err, EsignError::UrlVersion(_)));
    }

    #[test]
    fn test_region_from_str_is_case_sensitive() {
        assert!(RegionVersion::from_str("US_11").is_err());
        assert!(RegionVersion::from_str("Ca").is_err());
    }

    #[test]
    fn test_region_display_matches_wire_name() {
        assert_eq!(RegionVersion::Us11.to_string(), "us_11");
        assert_eq!(RegionVersion::UsGov.to_string(), "us_gov");
        assert_eq!(RegionVersion::Aus.to_string(), "aus");
    }

    #[test]
    fn test_region_serde_wire_names() {
        let json = serde_json::to_string(&RegionVersion::Us11).unwrap();
        assert_eq!(json, "\"us_11\"");
        let restored: RegionVersion = serde_json::from_str("\"us_gov\"").unwrap();
        assert_eq!(restored, RegionVersion::UsGov);
    }

    #[test]
    fn test_region_serde_roundtrip_all() {
        for region in RegionVersion::ALL {
            let json = serde_json::to_string(&region).unwrap();
            let restored: RegionVersion = serde_json::from_str(&json).unwrap();
            assert_eq!(region, restored);
        }
    }

    // ── Environment tests ──────────────────────────────────────

    #[test]
    fn test_environment_from_str() {
        assert_eq!(
            Environment::from_str("sandbox").unwrap(),
            Environment::Sandbox
        );
        assert_eq!(
            Environment::from_str("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn test_environment_from_str_rejects_unknown() {
        let err = Environment::from_str("staging").unwrap_err();
        assert!(matches!(err, EsignError::Environment(_)));
    }

    #[test]
    fn test_environment_display() {
        assert_eq!(Environment::Sandbox.to_string(), "sandbox");
        assert_eq!(Environment::Production.to_string(), "production");
    }

    // ── Endpoint table tests ───────────────────────────────────

    #[test]
    fn test_endpoint_table_matches_documented_urls() {
        let expected = [
            (
                RegionVersion::Us11,
                "https://sandbox.esignlive.com/api",
                "https://apps.esignlive.com/api",
            ),
            (
                RegionVersion::Us10,
                "https://sandbox.e-signlive.com/api",
                "https://apps.e-signlive.com/api",
            ),
            (
                RegionVersion::UsGov,
                "https://signer-sandbox-gov.esignlive.com/api",
                "https://signer-gov.esignlive.com/api",
            ),
            (
                RegionVersion::Ca,
                "https://sandbox.e-signlive.ca/api",
                "https://apps.e-signlive.ca/api",
            ),
            (RegionVersion::Aus, "", "https://apps.esignlive.com.au/api"),
            (RegionVersion::Eu, "", "https://apps.esignlive.eu/api"),
        ];
        for (region, sandbox, production) in expected {
            assert_eq!(region.endpoint(Environment::Sandbox), sandbox);
            assert_eq!(region.endpoint(Environment::Production), production);
        }
    }

    #[test]
    fn test_endpoint_gaps_resolve_to_empty() {
        assert_eq!(RegionVersion::Aus.endpoint(Environment::Sandbox), "");
        assert_eq!(RegionVersion::Eu.endpoint(Environment::Sandbox), "");
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_url_version_error_lists_valid_values() {
        let msg = EsignError::UrlVersion("us_9".into()).to_string();
        for name in RegionVersion::NAMES {
            assert!(msg.contains(name));
        }
        assert!(msg.contains("us_9"));
        assert!(msg.contains("docs.esignlive.com"));
    }

    #[test]
    fn test_environment_error_names_both_values() {
        let msg = EsignError::Environment("staging".into()).to_string();
        assert!(msg.contains("staging"));
        assert!(msg.contains("sandbox"));
        assert!(msg.contains("production"));
    }
}
