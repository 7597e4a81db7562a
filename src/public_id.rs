use crate::error::Error;

/// Length of the rotating one-time part at the end of every OTP.
pub const OTP_PAYLOAD_LEN: usize = 32;

/// The token's public id: everything before the trailing 32-character payload.
/// Empty when the token was personalized without one.
pub fn extract_public_id(otp: &str) -> Result<&str, Error> {
    let len = otp.chars().count();
    if len < OTP_PAYLOAD_LEN {
        return Err(Error::InvalidOtpLength { len });
    }
    let end = otp
        .char_indices()
        .nth(len - OTP_PAYLOAD_LEN)
        .map(|(i, _)| i)
        .unwrap_or_else(|| otp.len());
    Ok(&otp[..end])
}
