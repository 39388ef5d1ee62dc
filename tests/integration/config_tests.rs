//! Configuration integration tests
//!
//! Layering of file and environment sources, and validation of the result.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use std::collections::HashMap;
    use std::io::Write;
    use stellar_first_flight::config::{PUBLIC_HORIZON_URL, TESTNET_FRIENDBOT_URL};
    use stellar_first_flight::{Network, StellarConfig, StellarError};
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_example_config_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/stellar.yaml.example");
        let config = assert_ok!(StellarConfig::from_file(path));

        assert_ok!(config.validate());
        assert_eq!(config.network.network, Network::Testnet);
        assert_eq!(config.scenario.recipients.len(), 3);
        assert!(config.secret_key.is_none());
    }

    #[test]
    fn test_file_then_environment() {
        let file = write_config(
            r#"
network:
  request_timeout: 10
scenario:
  batch_amount: "5"
  monitored_accounts:
    - GB5UVSQLG3R7WD76GFZKBNDI4JJ4BPBHD5PE4JJ56U7SP46NYGQ7M3DQ
"#,
        );

        let mut config = assert_ok!(StellarConfig::from_file(file.path()));
        assert_ok!(config.apply_env_with(env(&[
            ("STELLAR_TX_TIMEOUT", "60"),
            ("STELLAR_SECRET_KEY", "SBOGUS"),
        ])));
        assert_ok!(config.validate());

        assert_eq!(config.network.request_timeout, 10);
        assert_eq!(config.network.tx_timeout, 60);
        assert_eq!(config.scenario.batch_amount, "5");
        assert_eq!(config.scenario.monitored_accounts.len(), 1);
        assert_eq!(assert_ok!(config.require_secret_key()).expose(), "SBOGUS");
    }

    #[test]
    fn test_switch_to_public_network() {
        let mut config = StellarConfig::default();
        config.network.request_timeout = 7;
        assert_ok!(config.apply_env_with(env(&[("STELLAR_NETWORK", "public")])));
        assert_ok!(config.validate());

        assert_eq!(config.network.network, Network::Public);
        assert_eq!(config.network.horizon_url, PUBLIC_HORIZON_URL);
        assert_eq!(config.network.friendbot_url, None);
        assert_eq!(config.network.request_timeout, 7);
    }

    #[test]
    fn test_public_network_from_file() {
        let file = write_config("network:\n  network: public\n");

        let config = assert_ok!(StellarConfig::from_file(file.path()));
        assert_ok!(config.validate());

        assert_eq!(config.network.network, Network::Public);
        assert_eq!(config.network.horizon_url, PUBLIC_HORIZON_URL);
        assert_eq!(config.network.friendbot_url, None);
    }

    #[test]
    fn test_public_network_with_testnet_horizon_is_rejected() {
        let file = write_config(
            "network:\n  network: public\n  horizon_url: https://horizon-testnet.stellar.org\n",
        );

        let config = assert_ok!(StellarConfig::from_file(file.path()));
        let err = assert_err!(config.validate());
        assert!(matches!(err, StellarError::Config(_)));
    }

    #[test]
    fn test_friendbot_on_public_network_is_rejected() {
        let mut config = StellarConfig::default();
        assert_ok!(config.apply_env_with(env(&[
            ("STELLAR_NETWORK", "public"),
            ("STELLAR_FRIENDBOT_URL", TESTNET_FRIENDBOT_URL),
        ])));

        let err = assert_err!(config.validate());
        assert!(matches!(err, StellarError::Config(_)));
    }

    #[test]
    fn test_missing_secret_names_the_variable() {
        let config = StellarConfig::default();
        let err = assert_err!(config.require_secret_key());
        assert!(err.to_string().contains("STELLAR_SECRET_KEY"));
    }

    #[test]
    fn test_unreadable_file() {
        let err = assert_err!(StellarConfig::from_file("/nonexistent/stellar.yaml"));
        assert!(matches!(err, StellarError::Io(_)));
        assert!(err.is_local());
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("scenario:\n  batch_account_count: many\n");
        let err = assert_err!(StellarConfig::from_file(file.path()));
        assert!(matches!(err, StellarError::Yaml(_)));
    }

    #[test]
    fn test_secret_is_never_serialized() {
        let mut config = StellarConfig::default();
        assert_ok!(config.apply_env_with(env(&[("STELLAR_SECRET_KEY", "SVERYSECRET")])));

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(!yaml.contains("SVERYSECRET"));
        assert!(!format!("{:?}", config).contains("SVERYSECRET"));
    }
}
