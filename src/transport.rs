use std::io::Read;

use log::debug;
use url::Url;

use crate::error::Error;

/// Fetches the body of a verification request.
pub trait Transport: Send {
    fn get(&self, url: &Url) -> Result<Box<dyn Read + Send>, Error>;
}

/// Blocking HTTP GET through reqwest. No retries; timeouts are reqwest's defaults.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<Box<dyn Read + Send>, Error> {
        debug!("GET {}", url);
        let response = self.client.get(url.as_str()).send()?.error_for_status()?;
        debug!("verification service answered {}", response.status());
        Ok(Box::new(response))
    }
}
