use reqwest::blocking::Client;
use tracing::debug;

use crate::error::TransportError;
use crate::traits::FileTransport;

/// Blocking HTTP(S) downloads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client. Icon servers commonly use self-signed certificates, so
    /// verification is usually switched off by configuration.
    pub fn new(accept_invalid_certs: bool) -> Result<Self, TransportError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().map_err(TransportError::Client)?;
        Ok(Self { client })
    }
}

impl FileTransport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        debug!("GET {url}");
        let request_error = |source| TransportError::Request {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().map_err(request_error)?;
        Ok(body.to_vec())
    }
}
