#![deny(missing_docs)]
//! A web server for the classical cipher toolkit, exposing the engine as a JSON API.

use axum::{
    Router,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use local_ip_address::local_ip;
use log::{debug, error, info};
use serde::Deserialize;
use serde_json::{Value, json};
use simplecipher_core::{Direction, ErrorCode, Method, alphabet, pad_generator, try_cipher_named};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process;
use tower_http::cors::CorsLayer;

const DEFAULT_PORT: u16 = 3000;

/// Server settings, read from `SIMPLECIPHER_HOST` and `SIMPLECIPHER_PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ServerConfig {
    host: IpAddr,
    port: u16,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
enum ConfigError {
    #[error("SIMPLECIPHER_HOST is not a valid IP address: '{0}'")]
    InvalidHost(String),
    #[error("SIMPLECIPHER_PORT is not a valid port number: '{0}'")]
    InvalidPort(String),
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("SIMPLECIPHER_HOST") {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("SIMPLECIPHER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}

#[derive(Deserialize)]
struct CipherPayload {
    message: String,
    key: String,
    method: Option<String>,
    #[serde(default)]
    direction: Direction,
}

#[derive(Deserialize)]
struct MappingPayload {
    key: String,
}

#[derive(Deserialize)]
struct PadPayload {
    length: usize,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = ServerConfig::from_env().unwrap_or_else(|e| {
        error!("{e}");
        process::exit(1);
    });

    let addr = SocketAddr::new(config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {addr}: {e}");
            process::exit(1);
        }
    };

    println!("listening on:");
    if let Ok(my_local_ip) = local_ip() {
        println!("  - http://{my_local_ip}:{}/api/methods", config.port);
    }
    println!("  - http://127.0.0.1:{}/api/methods", config.port);

    if let Err(e) = axum::serve(listener, app()).await {
        error!("Server error: {e}");
        process::exit(1);
    }
}

/// Builds the API router.
fn app() -> Router {
    Router::new()
        .route("/api/methods", get(list_methods_handler))
        .route("/api/cipher", post(cipher_handler))
        .route("/api/mapping", post(mapping_handler))
        .route("/api/pad", post(pad_handler))
        .layer(CorsLayer::permissive())
}

/// Lists every cipher method with its identifier and English label.
async fn list_methods_handler() -> (StatusCode, Json<Value>) {
    let methods: Vec<Value> = Method::ALL
        .into_iter()
        .map(|m| json!({ "id": m.id(), "label": m.label() }))
        .collect();
    (StatusCode::OK, Json(json!(methods)))
}

async fn cipher_handler(Json(payload): Json<CipherPayload>) -> (StatusCode, Json<Value>) {
    let method = payload
        .method
        .unwrap_or_else(|| Method::default().id().to_string());
    debug!("Cipher request: method '{method}', {:?}", payload.direction);

    match try_cipher_named(
        &payload.message,
        &payload.key,
        &method,
        payload.direction.is_decrypt(),
    ) {
        Ok(output) => (StatusCode::OK, Json(json!({ "output": output }))),
        Err(validation) => {
            let codes: Vec<ErrorCode> = validation.codes().collect();
            info!("Rejected cipher request: {validation}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": codes, "fields": validation })),
            )
        }
    }
}

async fn mapping_handler(Json(payload): Json<MappingPayload>) -> (StatusCode, Json<Value>) {
    let mapping: String = alphabet::derive_mapping(&payload.key).into_iter().collect();
    (StatusCode::OK, Json(json!({ "mapping": mapping })))
}

async fn pad_handler(Json(payload): Json<PadPayload>) -> (StatusCode, Json<Value>) {
    match pad_generator::generate_pad_key(payload.length) {
        Ok(key) => (StatusCode::OK, Json(json!({ "key": key }))),
        Err(e) => {
            info!("Rejected pad request: {e}");
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
        }
    }
}
