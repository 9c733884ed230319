//! Configuration feeding the signers.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use oauth1_auth::{HmacSha1Signer, Signer, protocol_params};
    use oauth1_core::{CoreError, OAuthConfig, SignatureMethod};
    use oauth1_params::ParameterBag;

    use crate::uri;

    fn load(vars: &[(&str, &str)]) -> Result<OAuthConfig, CoreError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        OAuthConfig::from_lookup(move |key: &str| vars.get(key).cloned())
    }

    #[test]
    fn test_should_sign_photos_request_from_configuration() {
        let config = load(&[
            ("OAUTH_SIGNATURE_METHOD", "hmac-sha1"),
            ("OAUTH_CONSUMER_KEY", "dpf43f3p2l4k3l03"),
            ("OAUTH_CONSUMER_SECRET", "kd94hf93k423kf44"),
            ("OAUTH_TOKEN", "nnch734d00sl2jdk"),
            ("OAUTH_TOKEN_SECRET", "pfkkdhi9sl3r4s00"),
        ])
        .unwrap();
        config.validate().unwrap();
        assert_eq!(config.signature_method, SignatureMethod::HmacSha1);

        let token = config.access_token();
        let auth = protocol_params(
            &config.consumer(),
            token.as_ref(),
            config.signature_method,
            1_191_242_096,
            "kllo9940pd9333jh",
        )
        .unwrap();
        let signer = HmacSha1Signer::new(config.consumer(), token);
        let signature = signer
            .sign(
                "GET",
                &uri("http://photos.example.net/photos"),
                &ParameterBag::from_query("file=vacation.jpg&size=original"),
                &auth,
            )
            .unwrap();

        assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");
    }

    #[test]
    fn test_should_reject_unknown_signature_method() {
        assert!(matches!(
            load(&[("OAUTH_SIGNATURE_METHOD", "HMAC-SHA256")]),
            Err(CoreError::UnsupportedSignatureMethod(_))
        ));
    }

    #[test]
    fn test_should_require_public_key_for_rsa() {
        let config = load(&[("OAUTH_CONSUMER_KEY", "ck")]).unwrap();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_should_not_serialize_secrets() {
        let config = load(&[
            ("OAUTH_SIGNATURE_METHOD", "PLAINTEXT"),
            ("OAUTH_CONSUMER_KEY", "ck"),
            ("OAUTH_CONSUMER_SECRET", "top-secret"),
        ])
        .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"signatureMethod\":\"PLAINTEXT\""));
        assert!(!json.contains("top-secret"));
    }
}
