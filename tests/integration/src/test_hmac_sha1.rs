//! HMAC-SHA1 and PLAINTEXT tests against the RFC 5849 examples.

#[cfg(test)]
mod tests {
    use oauth1_auth::{
        HmacSha1Signer, OAuthSigner, PlaintextSigner, Signer, build_base_string, protocol_params,
    };
    use oauth1_core::{AccessToken, ConsumerKey, SignatureMethod, param};
    use oauth1_params::ParameterBag;

    use crate::{init_tracing, uri};

    const PHOTOS_BASE_STRING: &str = "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&\
        file%3Dvacation.jpg%26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26\
        oauth_nonce%3Dkllo9940pd9333jh%26oauth_signature_method%3DHMAC-SHA1%26\
        oauth_timestamp%3D1191242096%26oauth_token%3Dnnch734d00sl2jdk%26\
        oauth_version%3D1.0%26size%3Doriginal";

    fn consumer() -> ConsumerKey {
        ConsumerKey::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44")
    }

    fn token() -> AccessToken {
        AccessToken::new("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00")
    }

    fn photos_auth(method: SignatureMethod) -> ParameterBag {
        protocol_params(&consumer(), Some(&token()), method, 1_191_242_096, "kllo9940pd9333jh")
            .unwrap()
    }

    #[test]
    fn test_should_build_photos_base_string() {
        let params = ParameterBag::from_query("file=vacation.jpg&size=original");
        let base = build_base_string(
            "GET",
            &uri("http://photos.example.net/photos"),
            &params,
            &photos_auth(SignatureMethod::HmacSha1),
        )
        .unwrap();
        assert_eq!(base, PHOTOS_BASE_STRING);
    }

    #[test]
    fn test_should_sign_and_verify_photos_request() {
        init_tracing();
        let signer: OAuthSigner = HmacSha1Signer::new(consumer(), Some(token())).into();
        let target = uri("http://photos.example.net/photos?size=original&file=vacation.jpg");
        let params = ParameterBag::from_query(target.query().unwrap_or_default());
        let mut auth = photos_auth(SignatureMethod::HmacSha1);

        let signature = signer.sign("GET", &target, &params, &auth).unwrap();
        assert_eq!(signature, "tR3+Ty81lMeYAr/Fid0kMTYa/WM=");

        auth.set(param::SIGNATURE, signature).unwrap();
        assert!(signer.verify("GET", &target, &params, &auth));
    }

    #[test]
    fn test_should_sign_plaintext_request_token_call() {
        init_tracing();
        let signer: OAuthSigner = PlaintextSigner::new(consumer(), None).into();
        let target = uri("https://photos.example.net/request_token");
        let mut auth = protocol_params(
            &consumer(),
            None,
            SignatureMethod::Plaintext,
            1_191_242_090,
            "hsu94j3884jdopsl",
        )
        .unwrap();

        let signature = signer
            .sign("POST", &target, &ParameterBag::new(), &auth)
            .unwrap();
        assert_eq!(signature, "kd94hf93k423kf44&");

        auth.set(param::SIGNATURE, signature).unwrap();
        assert!(signer.verify("POST", &target, &ParameterBag::new(), &auth));
    }
}
