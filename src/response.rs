//! Parser for the verification service's plaintext reply.
//!
//! The body is a sequence of `key=value` lines. Only `status` decides the
//! verdict; every other line is kept verbatim for diagnostics.

use std::io::BufRead;

use crate::error::Error;

const STATUS_KEY: &str = "status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadOtp,
    ReplayedOtp,
    BadSignature,
    MissingParameter,
    NoSuchClient,
    OperationNotAllowed,
    BackendError,
    NotEnoughAnswers,
    ReplayedRequest,
    Other(String),
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Status::Ok,
            "BAD_OTP" => Status::BadOtp,
            "REPLAYED_OTP" => Status::ReplayedOtp,
            "BAD_SIGNATURE" => Status::BadSignature,
            "MISSING_PARAMETER" => Status::MissingParameter,
            "NO_SUCH_CLIENT" => Status::NoSuchClient,
            "OPERATION_NOT_ALLOWED" => Status::OperationNotAllowed,
            "BACKEND_ERROR" => Status::BackendError,
            "NOT_ENOUGH_ANSWERS" => Status::NotEnoughAnswers,
            "REPLAYED_REQUEST" => Status::ReplayedRequest,
            other => Status::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    lines: Vec<String>,
}

impl Response {
    /// Drains `reader` line by line. Bytes that are not UTF-8 are replaced,
    /// not rejected. A broken stream yields `Error::Read` with whatever text
    /// had arrived.
    pub fn read<R: BufRead>(mut reader: R) -> Result<Response, Error> {
        let mut response = Response::default();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(response),
                Ok(_) => response.lines.push(decode_line(&buf)),
                Err(cause) => {
                    return Err(Error::Read {
                        partial: response.raw(),
                        cause,
                    })
                }
            }
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every line terminated by `\n`, in arrival order.
    pub fn raw(&self) -> String {
        let mut raw = String::new();
        for line in &self.lines {
            raw.push_str(line);
            raw.push('\n');
        }
        raw
    }

    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| split_pair(line))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn status(&self) -> Option<Status> {
        self.get(STATUS_KEY).map(Status::from)
    }

    /// True iff any line is exactly `status=OK`, wherever it appears.
    pub fn is_ok(&self) -> bool {
        self.pairs().any(|(k, v)| k == STATUS_KEY && v == "OK")
    }
}

fn decode_line(buf: &[u8]) -> String {
    let mut line = buf;
    if line.last() == Some(&b'\n') {
        line = &line[..line.len() - 1];
    }
    if line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    String::from_utf8_lossy(line).into_owned()
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
    let eq = line.find('=')?;
    Some((&line[..eq], &line[eq + 1..]))
}
