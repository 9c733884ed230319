//! RSA-SHA1 golden-vector tests.

#[cfg(test)]
mod tests {
    use oauth1_auth::{
        AuthError, RsaKeyPair, RsaSha1Signer, Signer, build_base_string, protocol_params,
    };
    use oauth1_core::{AccessToken, ConsumerKey, SignatureMethod, param};
    use oauth1_params::ParameterBag;

    use crate::{bag, fixtures, init_tracing, rsa_signer, uri};

    const EXPECTED_BASE_STRING: &str = "GET&http%3A%2F%2Fexample.jp%2F&\
        fuga%3D%25E3%2581%25B5%25E3%2581%258C%25E3%2581%25B5%25E3%2581%258C%26\
        hoge%3D%25E3%2581%25BB%25E3%2581%2592%25E3%2581%25BB%25E3%2581%2592%26\
        oauth_consumer_key%3Dconsumer_key%26oauth_nonce%3Dnonce%26\
        oauth_signature_method%3DRSA-SHA1%26oauth_timestamp%3D1234567890%26\
        oauth_token%3Doauth_token%26oauth_version%3D1.0";

    const EXPECTED_SIGNATURE: &str = "Fp4E1knWiY/Ldt2oaHRqGUFl+5kBLGhvcHudsZ4ldPAgLK7PFQ2WYvkovSjT/\
        UyvhHIewBHVRQ1IemZDFiAhiqusy2ayFLZRi5mVpqK2xqGhT5PbAVCaXU2z5XJ8sWSHePU7sHJHd6dLqB+sqVlpWqWZ\
        AbRF4xhk4VAHlnGHpHwYY2yJjRsMXUU9FcRXtFv1aFco2d13EQ0IZOA5iEvsD7jutHhYWZ4kbh5B2pySyQI8TxcMJpk\
        XdgDb4ZsuHH7mhvoYn9wVewAI5rpqAUCr+rPsB15OjczDODi1SDg7zlwffoTKUF5uAdphreqeLgPSZeBQy4ErBzC4K3\
        aPDPnqyw==";

    fn params() -> ParameterBag {
        bag(&[("hoge", "ほげほげ"), ("fuga", "ふがふが")])
    }

    fn auth_params() -> ParameterBag {
        bag(&[
            ("oauth_timestamp", "1234567890"),
            ("oauth_nonce", "nonce"),
            ("oauth_version", "1.0"),
            ("oauth_signature_method", "RSA-SHA1"),
            ("oauth_consumer_key", "consumer_key"),
            ("oauth_token", "oauth_token"),
        ])
    }

    #[test]
    fn test_should_build_known_base_string() {
        let base =
            build_base_string("GET", &uri("http://example.jp/"), &params(), &auth_params())
                .unwrap();
        assert_eq!(base, EXPECTED_BASE_STRING);
    }

    #[test]
    fn test_should_build_known_base_string_for_bare_host() {
        let base =
            build_base_string("get", &uri("http://EXAMPLE.jp"), &params(), &auth_params())
                .unwrap();
        assert_eq!(base, EXPECTED_BASE_STRING);
    }

    #[test]
    fn test_should_sign_known_request() {
        let signature = rsa_signer()
            .sign("GET", &uri("http://example.jp/"), &params(), &auth_params())
            .unwrap();
        assert_eq!(signature, EXPECTED_SIGNATURE);
    }

    #[test]
    fn test_should_sign_with_assembled_protocol_params() {
        let consumer = ConsumerKey::new("consumer_key", "unused");
        let token = AccessToken::new("oauth_token", "unused");
        let auth = protocol_params(
            &consumer,
            Some(&token),
            SignatureMethod::RsaSha1,
            1_234_567_890,
            "nonce",
        )
        .unwrap();

        let signature = rsa_signer()
            .sign("GET", &uri("http://example.jp/"), &params(), &auth)
            .unwrap();
        assert_eq!(signature, EXPECTED_SIGNATURE);
    }

    #[test]
    fn test_should_sign_identically_with_encrypted_key() {
        init_tracing();
        let signer = RsaSha1Signer::new(
            RsaKeyPair::new(fixtures::PUBLIC_KEY)
                .with_private_key(fixtures::PRIVATE_KEY_ENCRYPTED, Some(fixtures::PASSPHRASE)),
        );
        let signature = signer
            .sign("GET", &uri("http://example.jp/"), &params(), &auth_params())
            .unwrap();
        assert_eq!(signature, EXPECTED_SIGNATURE);
    }

    #[test]
    fn test_should_verify_with_public_key_only() {
        init_tracing();
        let mut auth = auth_params();
        auth.set(param::SIGNATURE, EXPECTED_SIGNATURE).unwrap();

        for public_key in [fixtures::PUBLIC_KEY, fixtures::PUBLIC_KEY_PKCS1] {
            let verifier = RsaSha1Signer::new(RsaKeyPair::new(public_key));
            assert!(verifier.verify("GET", &uri("http://example.jp/"), &params(), &auth));
        }
    }

    #[test]
    fn test_should_ignore_realm_in_protocol_params() {
        let mut auth = auth_params();
        auth.set(param::REALM, "Photos").unwrap();
        auth.set(param::SIGNATURE, EXPECTED_SIGNATURE).unwrap();

        assert!(rsa_signer().verify("GET", &uri("http://example.jp/"), &params(), &auth));
    }

    #[test]
    fn test_should_reject_invalid_signature() {
        let mut auth = auth_params();
        auth.set(param::SIGNATURE, "invalid_signature").unwrap();
        assert!(!rsa_signer().verify("GET", &uri("http://example.jp/"), &params(), &auth));
    }

    #[test]
    fn test_should_reject_signature_under_other_key() {
        init_tracing();
        let mut auth = auth_params();
        auth.set(param::SIGNATURE, EXPECTED_SIGNATURE).unwrap();

        let verifier = RsaSha1Signer::new(RsaKeyPair::new(fixtures::PUBLIC_KEY_OTHER));
        assert!(matches!(
            verifier.try_verify("GET", &uri("http://example.jp/"), &params(), &auth),
            Err(AuthError::SignatureDoesNotMatch)
        ));
    }

    #[test]
    fn test_should_reject_modified_parameter() {
        let mut auth = auth_params();
        auth.set(param::SIGNATURE, EXPECTED_SIGNATURE).unwrap();
        let mut tampered = params();
        tampered.replace("hoge", "ほげ").unwrap();

        assert!(!rsa_signer().verify("GET", &uri("http://example.jp/"), &tampered, &auth));
    }

    #[test]
    fn test_should_verify_fresh_signature_from_pkcs8_key() {
        init_tracing();
        let signer = RsaSha1Signer::new(
            RsaKeyPair::new(fixtures::PUBLIC_KEY)
                .with_private_key(fixtures::PRIVATE_KEY_PKCS8, None),
        );
        let target = uri("https://api.example.com:8443/v1/items?ignored=yes");
        let params = ParameterBag::from_query("tag=a&tag=b&q=rust%20lang");
        let mut auth = auth_params();

        let signature = signer.sign("post", &target, &params, &auth).unwrap();
        auth.set(param::SIGNATURE, signature).unwrap();

        assert!(signer.verify("POST", &target, &params, &auth));
        assert!(!signer.verify("GET", &target, &params, &auth));
    }
}
