use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use yubiverify::{Error, Status, Verifier, VerifierConfig};

const OTP: &str = "vvfucnlcrrnejlbuthlktguhclhvegbungldcrefbnku";

/// Answers exactly one request with `status_line` and `body`, returning the
/// request line it received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/wsapi/verify", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(reply.as_bytes()).unwrap();
        let request = String::from_utf8_lossy(&request).into_owned();
        request.lines().next().unwrap_or_default().to_string()
    });
    (endpoint, handle)
}

fn verifier(endpoint: &str, id: u32) -> Verifier {
    let config = VerifierConfig::new(id).with_endpoint(endpoint).unwrap();
    Verifier::new(config).unwrap()
}

#[test]
fn sends_id_and_otp_and_accepts_ok() {
    let body = "h=vjhFxZrNHB5CjI6vhuSeF2n46a8=\r\nt=2008-03-10T10:00:00Z0312\r\nstatus=OK\r\n";
    let (endpoint, server) = serve_once("200 OK", body);
    let mut v = verifier(&endpoint, 28);

    let outcome = v.verify(OTP).unwrap();
    assert!(outcome.succeeded);
    assert_eq!(outcome.status, Some(Status::Ok));
    assert_eq!(
        v.last_response(),
        "h=vjhFxZrNHB5CjI6vhuSeF2n46a8=\nt=2008-03-10T10:00:00Z0312\nstatus=OK\n"
    );

    let request_line = server.join().unwrap();
    assert_eq!(
        request_line,
        format!("GET /wsapi/verify?id=28&otp={} HTTP/1.1", OTP)
    );
}

#[test]
fn bad_otp_is_a_negative_result() {
    let (endpoint, server) = serve_once("200 OK", "status=BAD_OTP\n");
    let mut v = verifier(&endpoint, 5);
    let outcome = v.verify("cccccc").unwrap();
    assert!(!outcome.succeeded);
    assert_eq!(outcome.status, Some(Status::BadOtp));
    assert_eq!(v.last_response(), "status=BAD_OTP\n");
    server.join().unwrap();
}

#[test]
fn server_error_is_a_transport_failure() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "status=OK\n");
    let mut v = verifier(&endpoint, 5);
    match v.verify(OTP) {
        Err(Error::Http(e)) => assert!(e.is_status()),
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(v.last_response(), "");
    server.join().unwrap();
}

#[test]
fn refused_connection_is_not_verified() {
    let endpoint = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/wsapi/verify", listener.local_addr().unwrap())
    };
    let mut v = verifier(&endpoint, 5);
    assert!(v.verify(OTP).is_err());
    assert!(!v.is_valid(OTP));
    assert_eq!(v.last_response(), "");
    assert_eq!(v.id(), 5);
}
