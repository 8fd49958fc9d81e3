use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::{
    cmp::Ordering,
    io,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering as AtomicOrdering},
        Arc,
    },
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_CONFIG_PATH: &str = "config/site.json";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Optional on-disk overrides; every key may be omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    port: Option<u16>,
    dist_dir: Option<PathBuf>,
    log_level: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ServerConfig {
    /// Defaults, then the config file named by `SITE_CONFIG_PATH`, then env.
    pub fn load() -> Result<Self, ServeError> {
        let lookup = |name: &str| std::env::var(name).ok();
        let config_path = parse_non_empty_string(lookup("SITE_CONFIG_PATH"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let file = read_config_file(&config_path)?;

        Ok(Self::resolve(file, lookup))
    }

    fn resolve(file: ConfigFile, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let file_port = file
            .port
            .filter(|value| (PORT_BOUNDS.0..=PORT_BOUNDS.1).contains(value))
            .unwrap_or(defaults.port);
        let port = parse_u16_with_bounds(lookup("PORT"), file_port, PORT_BOUNDS);

        let dist_dir = parse_non_empty_string(lookup("SITE_DIST_DIR"))
            .map(PathBuf::from)
            .or(file.dist_dir)
            .unwrap_or(defaults.dist_dir);

        let file_log_level = file
            .log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(defaults.log_level);
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(file_log_level);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ServeError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(ConfigFile::default()),
        Err(source) => {
            return Err(ServeError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&raw).map_err(|source| ServeError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub async fn run() -> Result<(), ServeError> {
    let config = ServerConfig::load()?;
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| ServeError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": bind_address,
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    serve(listener, AppState::new(config)).await
}

pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServeError> {
    axum::serve(listener, router(state))
        .await
        .map_err(ServeError::Serve)
}

pub fn router(state: AppState) -> Router {
    let dist_dir = state.config.dist_dir.clone();
    let static_service =
        ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), tag_request))
        .with_state(state)
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn tag_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let status = response.status();

    log_event(
        state.config.log_level,
        if status.is_server_error() {
            LogLevel::Info
        } else {
            LogLevel::Debug
        },
        "request_served",
        serde_json::json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "durationMs": started.elapsed().as_millis() as u64,
        }),
    );

    response_with_request_id(response, &request_id)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn response_with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER, request_id_header);
    }
    response
}

fn log_record(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

fn log_event(threshold: LogLevel, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < threshold {
        return;
    }

    println!("{}", log_record(level, event, fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    fn scratch_dist_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "puffistery-{label}-{}-{}",
            std::process::id(),
            now_unix_millis()
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dist dir");
        std::fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        std::fs::write(dir.join("app.js"), "console.log('sweet');").expect("write bundle");
        dir
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let config = ServerConfig::resolve(ConfigFile::default(), lookup_from(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn env_overrides_file_and_file_overrides_defaults() {
        let file: ConfigFile =
            serde_json::from_str(r#"{ "port": 9000, "distDir": "public", "logLevel": "debug" }"#)
                .expect("valid config file");
        let from_file = ServerConfig::resolve(file, lookup_from(&[]));
        assert_eq!(from_file.port, 9000);
        assert_eq!(from_file.dist_dir, PathBuf::from("public"));
        assert_eq!(from_file.log_level, LogLevel::Debug);

        let file: ConfigFile =
            serde_json::from_str(r#"{ "port": 9000, "logLevel": "debug" }"#).expect("valid config file");
        let from_env = ServerConfig::resolve(
            file,
            lookup_from(&[("PORT", " 3000 "), ("SITE_DIST_DIR", "site"), ("LOG_LEVEL", "INFO")]),
        );
        assert_eq!(from_env.port, 3000);
        assert_eq!(from_env.dist_dir, PathBuf::from("site"));
        assert_eq!(from_env.log_level, LogLevel::Info);
    }

    #[test]
    fn invalid_values_fall_back_to_next_layer() {
        let file: ConfigFile = serde_json::from_str(r#"{ "port": 0, "logLevel": "loud" }"#)
            .expect("valid config file");
        let config = ServerConfig::resolve(
            file,
            lookup_from(&[("PORT", "99999"), ("SITE_DIST_DIR", "  "), ("LOG_LEVEL", "trace")]),
        );

        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let parsed = serde_json::from_str::<ConfigFile>(r#"{ "prot": 80 }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_config_file_is_not_an_error() {
        let file = read_config_file(Path::new("/definitely/not/here/site.json"))
            .expect("absent file resolves to defaults");
        assert!(file.port.is_none());
    }

    #[test]
    fn malformed_config_file_reports_path() {
        let dir = scratch_dist_dir("bad-config");
        let path = dir.join("site.json");
        std::fs::write(&path, "{ not json").expect("write config");

        let error = read_config_file(&path).expect_err("malformed file should fail");
        assert!(matches!(error, ServeError::ConfigParse { .. }));
        assert!(error.to_string().contains("site.json"));
    }

    #[test]
    fn log_levels_order_and_records_merge_fields() {
        assert!(LogLevel::Debug < LogLevel::Info);

        let record = log_record(
            LogLevel::Info,
            "server_listening",
            serde_json::json!({ "address": "0.0.0.0:8080" }),
        );
        assert_eq!(record["level"], "info");
        assert_eq!(record["event"], "server_listening");
        assert_eq!(record["address"], "0.0.0.0:8080");
        assert!(record["ts"].is_u64());
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        assert!(resolve_request_id(&headers).starts_with("req-"));

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[tokio::test]
    async fn serves_bundle_health_and_spa_fallback() {
        let dist_dir = scratch_dist_dir("serve");
        let state = AppState::new(ServerConfig {
            port: DEFAULT_PORT,
            dist_dir,
            log_level: LogLevel::Info,
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let address = listener.local_addr().expect("local address");
        tokio::spawn(serve(listener, state));

        let client = reqwest::Client::new();
        let base = format!("http://{address}");

        let health = client
            .get(format!("{base}/healthz"))
            .header(REQUEST_ID_HEADER, "req-test")
            .send()
            .await
            .expect("health response");
        assert!(health.status().is_success());
        assert_eq!(
            health.headers().get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("req-test")
        );
        let body: serde_json::Value = health.json().await.expect("health json");
        assert_eq!(body["ok"], true);

        let bundle = client
            .get(format!("{base}/app.js"))
            .send()
            .await
            .expect("bundle response");
        assert!(bundle.status().is_success());
        assert!(bundle.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(bundle.text().await.expect("bundle body"), "console.log('sweet');");

        let deep_link = client
            .get(format!("{base}/about"))
            .send()
            .await
            .expect("fallback response");
        assert!(deep_link.status().is_success());
        assert_eq!(
            deep_link.text().await.expect("fallback body"),
            "<div id=\"app\"></div>"
        );
    }
}
