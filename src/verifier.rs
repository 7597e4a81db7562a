use std::io::BufReader;

use log::{debug, warn};

use crate::config::VerifierConfig;
use crate::error::Error;
use crate::public_id::extract_public_id;
use crate::response::{Response, Status};
use crate::transport::{HttpTransport, Transport};

/// Result of one round trip to the verification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub succeeded: bool,
    pub raw_response: String,
    pub status: Option<Status>,
}

impl From<&Response> for VerificationOutcome {
    fn from(response: &Response) -> Self {
        VerificationOutcome {
            succeeded: response.is_ok(),
            raw_response: response.raw(),
            status: response.status(),
        }
    }
}

/// Checks OTPs against a single verification endpoint.
///
/// Every call is a fresh request; replay protection is the service's job.
/// `verify` needs `&mut self`, so one instance serves one caller at a time.
pub struct Verifier {
    config: VerifierConfig,
    transport: Box<dyn Transport>,
    last_response: String,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Result<Self, Error> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    pub fn with_transport<T: Transport + 'static>(config: VerifierConfig, transport: T) -> Self {
        Verifier {
            config,
            transport: Box::new(transport),
            last_response: String::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.config.client_id()
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Raw text of the latest `verify` call, partial if the call failed.
    pub fn last_response(&self) -> &str {
        &self.last_response
    }

    pub fn public_id<'a>(&self, otp: &'a str) -> Result<&'a str, Error> {
        extract_public_id(otp)
    }

    pub fn verify(&mut self, otp: &str) -> Result<VerificationOutcome, Error> {
        self.last_response.clear();
        let url = self.config.request_url(otp);
        let response = match self
            .transport
            .get(&url)
            .and_then(|body| Response::read(BufReader::new(body)))
        {
            Ok(response) => response,
            Err(e) => {
                debug!("client {}: verification request failed: {}", self.id(), e);
                self.last_response = e.partial_response().to_string();
                return Err(e);
            }
        };
        let outcome = VerificationOutcome::from(&response);
        debug!(
            "client {}: status {:?}, verified {}",
            self.id(),
            outcome.status,
            outcome.succeeded
        );
        self.last_response = outcome.raw_response.clone();
        Ok(outcome)
    }

    /// `verify` with transport failures logged and folded into `false`.
    pub fn is_valid(&mut self, otp: &str) -> bool {
        match self.verify(otp) {
            Ok(outcome) => outcome.succeeded,
            Err(e) => {
                warn!("could not verify otp for client {}: {}", self.id(), e);
                false
            }
        }
    }
}
