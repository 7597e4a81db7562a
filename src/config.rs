use url::Url;

use crate::error::Error;

pub const DEFAULT_ENDPOINT: &str = "http://api.yubico.com/wsapi/verify";

/// Client id and the verification service it is checked against.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    client_id: u32,
    endpoint: Url,
}

impl VerifierConfig {
    pub fn new(client_id: u32) -> Self {
        VerifierConfig {
            client_id,
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, Error> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn client_id(&self) -> u32 {
        self.client_id
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `<endpoint>?id=<client_id>&otp=<otp>`, keeping any query the endpoint already has.
    pub fn request_url(&self, otp: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("id", &self.client_id.to_string())
            .append_pair("otp", otp);
        url
    }
}
