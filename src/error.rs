use failure::Fail;
use std::io;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "invalid verification endpoint: {}", _0)]
    Url(#[cause] url::ParseError),

    #[fail(display = "request to verification service failed: {}", _0)]
    Http(#[cause] reqwest::Error),

    #[fail(display = "transport error: {}", _0)]
    Io(#[cause] io::Error),

    #[fail(display = "response stream broke: {}", cause)]
    Read {
        partial: String,
        #[cause]
        cause: io::Error,
    },

    #[fail(display = "otp is {} characters, expected at least 32", len)]
    InvalidOtpLength { len: usize },
}

impl Error {
    /// Response text accumulated before the failure, empty if nothing was read.
    pub fn partial_response(&self) -> &str {
        match self {
            Error::Read { partial, .. } => partial,
            _ => "",
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Url(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
