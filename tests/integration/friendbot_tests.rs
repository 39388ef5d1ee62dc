//! Friendbot client integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::*;
    use crate::{assert_err, assert_ok};
    use stellar_first_flight::core::horizon::FundingService;
    use stellar_first_flight::{FriendbotClient, Network, NetworkConfig, StellarError};
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FriendbotClient {
        let config = NetworkConfig {
            friendbot_url: Some(server.uri()),
            ..NetworkConfig::default()
        };
        FriendbotClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fund_account() {
        let server = MockServer::start().await;
        let key = random_public_key();
        Mock::given(method("GET"))
            .and(query_param("addr", key.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(friendbot_success_json("f00d")))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = assert_ok!(client_for(&server).fund(&key).await);

        assert!(receipt.successful);
        assert_eq!(receipt.hash.as_deref(), Some("f00d"));
    }

    #[tokio::test]
    async fn test_already_funded_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(friendbot_already_funded_json()))
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).fund(&random_public_key()).await);

        match err {
            StellarError::Funding(message) => {
                assert!(message.starts_with("HTTP 400"), "{}", message);
                assert!(message.contains("createAccountAlreadyExist"), "{}", message);
            }
            other => panic!("expected Funding error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_successful_flag_wins_over_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "successful": true, "hash": "beef" })),
            )
            .mount(&server)
            .await;

        let receipt = assert_ok!(client_for(&server).fund(&random_public_key()).await);

        assert!(receipt.successful);
        assert_eq!(receipt.hash.as_deref(), Some("beef"));
    }

    #[tokio::test]
    async fn test_invalid_key_is_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = assert_err!(client_for(&server).fund("not-a-key").await);
        assert!(matches!(err, StellarError::InvalidInput(_)));
    }

    #[test]
    fn test_no_faucet_on_public_network() {
        let config = NetworkConfig::for_network(Network::Public);
        let err = assert_err!(FriendbotClient::new(&config));
        assert!(err.to_string().contains("public"), "{}", err);
    }
}
