//! Client for validating YubiKey one-time passwords against an online
//! verification service.
//!
//! ```no_run
//! use yubiverify::{Verifier, VerifierConfig};
//!
//! let mut verifier = Verifier::new(VerifierConfig::new(28)).unwrap();
//! if verifier.is_valid("vvfucnlcrrnejlbuthlktguhclhvegbungldcrefbnku") {
//!     println!("ok");
//! }
//! ```

pub mod config;
pub mod error;
pub mod public_id;
pub mod response;
pub mod transport;
pub mod verifier;

pub use config::{VerifierConfig, DEFAULT_ENDPOINT};
pub use error::Error;
pub use public_id::extract_public_id;
pub use response::{Response, Status};
pub use transport::{HttpTransport, Transport};
pub use verifier::{VerificationOutcome, Verifier};
