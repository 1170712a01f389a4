use crate::client::create_http_client;
use crate::error::Result;
use crate::transport::{RawResponse, Transport};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Client;
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters pass through; everything else is encoded.
/// The url crate's stock sets encode less than the service's signature
/// verification expects, so we carry our own.
const ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a string for OAuth signature material
pub fn percent_encode(src: &str) -> String {
    utf8_percent_encode(src, ENCODE_SET).to_string()
}

/// OAuth 1.0a credentials: the application's consumer pair plus the access
/// token pair obtained through the token exchange, which is outside this
/// library's scope.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    pub fn new(
        consumer_key: String,
        consumer_secret: String,
        token: String,
        token_secret: String,
    ) -> Self {
        Credentials {
            consumer_key,
            consumer_secret,
            token,
            token_secret,
        }
    }
}

/// Build the RFC 5849 signature base string. `params` carries every signed
/// parameter: the oauth_* set, the URL query pairs, and form body pairs.
/// Multipart bodies contribute nothing here.
fn build_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    format!(
        "{}&{}&{}",
        method,
        percent_encode(base_url),
        percent_encode(&encoded.join("&"))
    )
}

/// HMAC-SHA1 over the base string, base64-encoded
fn sign_base_string(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Transport that signs every request with an OAuth 1.0a Authorization
/// header. This is the stock implementation of [`Transport`].
pub struct OAuthTransport {
    client: Client,
    credentials: Credentials,
}

impl OAuthTransport {
    pub fn new(credentials: Credentials) -> Self {
        OAuthTransport {
            client: create_http_client(),
            credentials,
        }
    }

    /// Build the Authorization header for one request. `extra` holds the
    /// form body pairs for POSTs; GETs and multipart pass none.
    fn authorization(
        &self,
        method: &str,
        url: &str,
        extra: &[(&'static str, String)],
    ) -> Result<String> {
        let parsed = Url::parse(url)?;

        let mut base_url = parsed.clone();
        base_url.set_query(None);
        base_url.set_fragment(None);

        let oauth: Vec<(String, String)> = vec![
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), Uuid::new_v4().simple().to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), Utc::now().timestamp().to_string()),
            ("oauth_token".to_string(), self.credentials.token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut params = oauth.clone();
        for (k, v) in parsed.query_pairs() {
            params.push((k.into_owned(), v.into_owned()));
        }
        for (k, v) in extra {
            params.push((k.to_string(), v.clone()));
        }

        let base = build_base_string(method, base_url.as_str(), &params);
        let signature = sign_base_string(
            &base,
            &self.credentials.consumer_secret,
            &self.credentials.token_secret,
        );

        let mut fields = oauth;
        fields.push(("oauth_signature".to_string(), signature));

        let joined: Vec<String> = fields
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect();

        Ok(format!("OAuth {}", joined.join(", ")))
    }
}

impl Transport for OAuthTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let auth = self.authorization("GET", url, &[])?;
        let response = self
            .client
            .get(url)
            .header("Authorization", auth)
            .send()?;
        RawResponse::from_http(response)
    }

    fn post_form(&self, url: &str, form: &[(&'static str, String)]) -> Result<RawResponse> {
        let auth = self.authorization("POST", url, form)?;
        let response = self
            .client
            .post(url)
            .header("Authorization", auth)
            .form(form)
            .send()?;
        RawResponse::from_http(response)
    }

    fn post_multipart(&self, url: &str, form: Form) -> Result<RawResponse> {
        // Multipart bodies are excluded from the signature base string.
        let auth = self.authorization("POST", url, &[])?;
        let response = self
            .client
            .post(url)
            .header("Authorization", auth)
            .multipart(form)
            .send()?;
        RawResponse::from_http(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(percent_encode("An encoded string!"), "An%20encoded%20string%21");
        assert_eq!(percent_encode("Dogs, Cats & Mice"), "Dogs%2C%20Cats%20%26%20Mice");
        assert_eq!(percent_encode("safe-chars_are.fine~"), "safe-chars_are.fine~");
    }

    // Known-answer test from the service's own signing documentation.
    #[test]
    fn test_signature_known_vector() {
        let params: Vec<(String, String)> = vec![
            ("status".to_string(), "Hello Ladies + Gentlemen, a signed OAuth request!".to_string()),
            ("include_entities".to_string(), "true".to_string()),
            ("oauth_consumer_key".to_string(), "xvz1evFS4wEEPTGEFPHBog".to_string()),
            ("oauth_nonce".to_string(), "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), "1318622958".to_string()),
            ("oauth_token".to_string(), "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let base = build_base_string(
            "POST",
            "https://api.twitter.com/1/statuses/update.json",
            &params,
        );
        assert!(base.starts_with("POST&https%3A%2F%2Fapi.twitter.com%2F1%2Fstatuses%2Fupdate.json&"));

        let signature = sign_base_string(
            &base,
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        );
        assert_eq!(signature, "tnnArxj06cWHq44gCs1OSKk/jLY=");
    }

    #[test]
    fn test_authorization_header_shape() {
        let transport = OAuthTransport::new(Credentials::new(
            "ck".to_string(),
            "cs".to_string(),
            "tok".to_string(),
            "ts".to_string(),
        ));

        let header = transport
            .authorization("GET", "https://api.twitter.com/1/statuses/show.json?id=42", &[])
            .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key=\"ck\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_signature=\""));
    }
}
