use crate::error::Result;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::Response;

/// HTTP outcome as seen by the dispatcher: the status code and the fully
/// read body. Reading the body to completion before returning guarantees the
/// underlying connection is released on every path.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Drain an HTTP response into a RawResponse
    pub fn from_http(response: Response) -> Result<Self> {
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// The authenticated transport capability the dispatcher depends on.
///
/// Implementations are expected to sign each outgoing request; the dispatcher
/// never sees credentials. `OAuthTransport` is the stock implementation;
/// tests substitute doubles. Concurrent use is as safe as the implementation
/// makes it — the stock one wraps a reqwest client, which is.
pub trait Transport: Send + Sync {
    /// Issue a GET to a fully formed URL (query already appended)
    fn get(&self, url: &str) -> Result<RawResponse>;

    /// Issue a POST with a form-encoded body
    fn post_form(&self, url: &str, form: &[(&'static str, String)]) -> Result<RawResponse>;

    /// Issue a POST with a multipart body. The generic escape hatch used
    /// only by the file-upload verbs.
    fn post_multipart(&self, url: &str, form: Form) -> Result<RawResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_fields() {
        let raw = RawResponse {
            status: 200,
            body: b"[]".to_vec(),
        };
        assert_eq!(raw.status, 200);
        assert_eq!(raw.body, b"[]");
    }
}
