use clap::{load_yaml, App};
use log::error;
use std::process;
use std::str::FromStr;
use yubiverify::{Verifier, VerifierConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let yaml = load_yaml!("cli.yaml");
    let matches = App::from_yaml(yaml).get_matches();
    let auth_id = match u32::from_str(matches.value_of("auth_id").unwrap()) {
        Ok(id) => id,
        Err(e) => {
            error!("auth id must be a positive integer: {}", e);
            process::exit(2);
        }
    };
    let otp = matches.value_of("otp").unwrap();

    let mut config = VerifierConfig::new(auth_id);
    if let Some(endpoint) = matches.value_of("endpoint") {
        config = match config.with_endpoint(endpoint) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                process::exit(2);
            }
        };
    }
    let mut verifier = match Verifier::new(config) {
        Ok(verifier) => verifier,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if verifier.is_valid(otp) {
        println!("\n* OTP verified OK");
    } else {
        println!("\n* Failed to verify OTP");
    }
    if let Ok(id) = verifier.public_id(otp) {
        println!("\n* Public id: {}", id);
    }
    println!("\n* Last response:\n{}", verifier.last_response());
}
