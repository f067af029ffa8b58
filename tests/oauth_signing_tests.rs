//! Integration tests for OAuth 1.0a request signing
//!
//! Covers published signature vectors, determinism, sensitivity to every
//! signed input, and verification of signed requests.

use pesapal::services::oauth::{normalized_parameters, signature_base_string};
use pesapal::utils::percent_decode;
use pesapal::{Consumer, HttpMethod, OAuthSigner, Params, PesapalError, Token, sign, to_params};

fn photos_signer() -> OAuthSigner {
    OAuthSigner::new(Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44"))
}

fn photos_token() -> Token {
    Token::new("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00")
}

#[test]
fn test_oauth_core_appendix_vector() {
    let params = to_params([("file", "vacation.jpg"), ("size", "original")]);
    let request = photos_signer()
        .sign_with(
            Some(&photos_token()),
            HttpMethod::Get,
            "http://photos.example.net/photos",
            &params,
            "kllo9940pd9333jh",
            1191242096,
        )
        .unwrap();

    assert_eq!(
        request.signature_base_string(),
        "GET&http%3A%2F%2Fphotos.example.net%2Fphotos&file%3Dvacation.jpg\
         %26oauth_consumer_key%3Ddpf43f3p2l4k3l03%26oauth_nonce%3Dkllo9940pd9333jh\
         %26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1191242096\
         %26oauth_token%3Dnnch734d00sl2jdk%26oauth_version%3D1.0%26size%3Doriginal"
    );
    assert_eq!(request.signature(), Some("tR3+Ty81lMeYAr/Fid0kMTYa/WM="));
}

#[test]
fn test_twitter_documentation_vector() {
    let signer = OAuthSigner::new(Consumer::new(
        "xvz1evFS4wEEPTGEFPHBog",
        "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
    ));
    let token = Token::new(
        "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
        "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
    );
    let params = to_params([
        ("include_entities", "true"),
        ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
    ]);

    let request = signer
        .sign_with(
            Some(&token),
            HttpMethod::Post,
            "https://api.twitter.com/1.1/statuses/update.json",
            &params,
            "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
            1318622958,
        )
        .unwrap();

    assert_eq!(request.signature(), Some("hCtSmYh+iHYCEqBWrE7C7hYmtUk="));
}

#[test]
fn test_signature_is_deterministic_for_fixed_nonce_and_timestamp() {
    let params = to_params([("pesapal_merchant_reference", "R1")]);
    let sign_once = || {
        photos_signer()
            .sign_with(
                None,
                HttpMethod::Get,
                "http://demo2.pesapal.com/api/QueryPaymentStatus",
                &params,
                "abc",
                42,
            )
            .unwrap()
    };

    let first = sign_once();
    let second = sign_once();
    assert_eq!(first.signature(), second.signature());
    assert_eq!(first, second);
}

#[test]
fn test_fresh_signatures_use_distinct_nonces() {
    let consumer = Consumer::new("key", "secret");
    let params = to_params([("pesapal_merchant_reference", "R1")]);
    let url = "http://demo2.pesapal.com/api/QueryPaymentStatusByMerchantRef";

    let first = sign(&consumer, None, HttpMethod::Get, url, &params).unwrap();
    let second = sign(&consumer, None, HttpMethod::Get, url, &params).unwrap();

    assert_ne!(first.nonce(), second.nonce());
    assert_ne!(first.signature_base_string(), second.signature_base_string());
    assert!(first.timestamp().unwrap() > 1_600_000_000);
}

#[test]
fn test_signature_changes_with_any_single_input() {
    let signer = photos_signer();
    let params = to_params([("pesapal_merchant_reference", "R1")]);
    let url = "http://demo2.pesapal.com/api/QueryPaymentStatus";

    let baseline = signer
        .sign_with(None, HttpMethod::Get, url, &params, "n", 1)
        .unwrap();

    let changed_url = signer
        .sign_with(
            None,
            HttpMethod::Get,
            "http://demo2.pesapal.com/api/QueryPaymentStatut",
            &params,
            "n",
            1,
        )
        .unwrap();
    let changed_method = signer
        .sign_with(None, HttpMethod::Post, url, &params, "n", 1)
        .unwrap();
    let changed_value = signer
        .sign_with(
            None,
            HttpMethod::Get,
            url,
            &to_params([("pesapal_merchant_reference", "R2")]),
            "n",
            1,
        )
        .unwrap();
    let changed_nonce = signer
        .sign_with(None, HttpMethod::Get, url, &params, "m", 1)
        .unwrap();
    let changed_timestamp = signer
        .sign_with(None, HttpMethod::Get, url, &params, "n", 2)
        .unwrap();

    for other in [changed_url, changed_method, changed_value, changed_nonce, changed_timestamp] {
        assert_ne!(baseline.signature(), other.signature());
    }
}

#[test]
fn test_base_string_parameters_decode_to_sorted_mapping() {
    let params = to_params([
        ("pesapal_merchant_reference", "ORD 1/2"),
        ("pesapal_transaction_tracking_id", "a&b=c"),
        ("oauth_callback", "https://shop.example.com/return?x=1"),
    ]);
    let request = photos_signer()
        .sign_with(
            None,
            HttpMethod::Get,
            "http://demo2.pesapal.com/api/QueryPaymentStatus",
            &params,
            "n",
            7,
        )
        .unwrap();

    let base = request.signature_base_string();
    let segments: Vec<&str> = base.split('&').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "GET");
    assert_eq!(percent_decode(segments[1]), request.url());

    let parameter_string = percent_decode(segments[2]);
    let decoded: Params = parameter_string
        .split('&')
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap();
            (percent_decode(k), percent_decode(v))
        })
        .collect();

    let mut expected = request.parameters().clone();
    expected.remove("oauth_signature");
    assert_eq!(decoded, expected);

    let keys: Vec<&str> = parameter_string
        .split('&')
        .map(|pair| pair.split_once('=').unwrap().0)
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_free_functions_agree_with_descriptor() {
    let request = photos_signer()
        .sign_with(
            None,
            HttpMethod::Get,
            "http://example.com/a",
            &to_params([("x", "1")]),
            "n",
            1,
        )
        .unwrap();

    assert_eq!(
        request.signature_base_string(),
        signature_base_string(HttpMethod::Get, "http://example.com/a", request.parameters())
    );
    assert!(!normalized_parameters(request.parameters()).contains("oauth_signature"));
}

#[test]
fn test_verify_accepts_untampered_request() {
    let token = photos_token();
    let request = photos_signer()
        .sign(
            Some(&token),
            HttpMethod::Get,
            "http://photos.example.net/photos",
            &to_params([("size", "original")]),
        )
        .unwrap();

    assert!(request.verify(photos_signer().consumer(), Some(&token)));
}

#[test]
fn test_verify_rejects_wrong_secret_and_tampering() {
    let request = photos_signer()
        .sign(
            None,
            HttpMethod::Get,
            "http://photos.example.net/photos",
            &to_params([("size", "original")]),
        )
        .unwrap();

    let wrong_secret = Consumer::new("dpf43f3p2l4k3l03", "not-the-secret");
    assert!(!request.verify(&wrong_secret, None));

    let wrong_key = Consumer::new("someone-else", "kd94hf93k423kf44");
    assert!(!request.verify(&wrong_key, None));

    let mut json = serde_json::to_value(&request).unwrap();
    json["parameters"]["size"] = serde_json::Value::String("thumbnail".to_string());
    let tampered: pesapal::SignedRequest = serde_json::from_value(json).unwrap();
    assert!(!tampered.verify(photos_signer().consumer(), None));
}

#[test]
fn test_signing_requires_consumer_credentials() {
    let empty = Consumer::new("", "");
    let result = sign(&empty, None, HttpMethod::Get, "http://example.com/", &Params::new());
    assert!(matches!(result, Err(PesapalError::InvalidCredentials(_))));
}

#[test]
fn test_repeated_url_query_key_is_an_error() {
    let result = photos_signer().sign_with(
        None,
        HttpMethod::Get,
        "http://example.com/api?a=1&a=2",
        &Params::new(),
        "n",
        1,
    );

    match result {
        Err(PesapalError::DuplicateParameter(key)) => assert_eq!(key, "a"),
        other => panic!("repeated query key must not be dropped: {other:?}"),
    }
}

#[test]
fn test_url_query_parameters_survive_into_request_url() {
    let request = photos_signer()
        .sign_with(
            None,
            HttpMethod::Get,
            "http://example.com/api?a=1&b=2",
            &Params::new(),
            "n",
            1,
        )
        .unwrap();

    let url = request.to_url();
    assert!(url.starts_with("http://example.com/api?a=1&b=2&oauth_consumer_key="));
    assert!(request.verify(photos_signer().consumer(), None));
}
