//! Validate a JWT from the command line
//!
//! ```text
//! cargo run --example validate -- <token> [secret]
//! RUST_LOG=jwtcheck=debug cargo run --example validate -- <token> [secret]
//! ```
//!
//! Without arguments a sample HS256 token is validated with `s3cr3t`. The
//! secret may also be a PEM public key, or a path to a key file prefixed
//! with `@`.

use std::process::ExitCode;

use hmac::{Hmac, Mac};
use jwtcheck::utils::base64url;
use jwtcheck::{SigningCredentials, Token, TokenValidator, ValidationReport};
use sha2::Sha256;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtcheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let (raw, secret) = match args.next() {
        Some(raw) => (raw, args.next().unwrap_or_default()),
        None => (sample_token(), "s3cr3t".to_string()),
    };

    let credentials = match secret.strip_prefix('@') {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => SigningCredentials::from_bytes(bytes),
            Err(err) => {
                eprintln!("Cannot read key file {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => SigningCredentials::from_secret(secret),
    };

    let token = match Token::decode(raw.trim()) {
        Ok(token) => token,
        Err(err) => {
            eprintln!("Malformed token: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Header:  {}", serde_json::Value::Object(token.header().clone()));
    println!("Payload: {}", serde_json::Value::Object(token.payload().clone()));

    let report = TokenValidator::new().validate(&token, &credentials);
    print_report(&report);

    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &ValidationReport) {
    for err in report.claim_errors() {
        println!("  {:<4} {}", err.claim(), err.message());
    }
    println!("{}", report.signature_status());
}

fn sample_token() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or_default();

    let header = r#"{"alg":"HS256","typ":"JWT"}"#;
    let payload = format!(
        r#"{{"sub":"1234567890","name":"Test User","iat":{},"nbf":{},"exp":{}}}"#,
        now - 10,
        now - 10,
        now + 3600
    );
    let signing_input = format!("{}.{}", base64url::encode(header), base64url::encode(&payload));

    let mut mac = Hmac::<Sha256>::new_from_slice(b"s3cr3t").expect("HMAC accepts any key length");
    mac.update(signing_input.as_bytes());
    format!(
        "{}.{}",
        signing_input,
        base64url::encode_bytes(&mac.finalize().into_bytes())
    )
}
