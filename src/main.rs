use axum_server::tls_rustls::RustlsConfig;
use mergington::{
    IoResult, app,
    cli::{LoadedConfig, init},
    config::string_to_ip,
    database,
    state::AppState,
};
use std::net::SocketAddr;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{
    field::MakeExt,
    fmt::{Subscriber, format::debug_fn},
};

#[tokio::main]
async fn main() -> IoResult<()> {
    let formatter =
        debug_fn(|writer, field, value| write!(writer, "{field}: {value:?}")).delimited(",");

    let LoadedConfig { config, overrides } =
        init().unwrap_or_else(|e| panic!("failed to load config: {e}"));
    let level = config
        .level()
        .unwrap_or_else(|e| panic!("failed to load config: {e}"));

    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    Subscriber::builder()
        .with_max_level(level)
        .fmt_fields(formatter)
        .with_ansi(true)
        .init();

    for applied in &overrides {
        info!("override {applied}");
    }
    debug!("config: {config:?}");

    let root = config.site().root.clone();
    if !root.is_dir() {
        warn!("static root {root:?} is missing, /static will only answer 404");
    }

    let state = match AppState::new(config.database()).await {
        Ok(state) => state,
        Err(e) => {
            error!("failed to connect to database: {e}");
            return Err(std::io::Error::other(e));
        }
    };

    if let Err(e) = database::init(&state.db).await {
        error!("failed to initialize database: {e}");
        return Err(std::io::Error::other(e));
    }

    let app = app::router(state, &root);

    let ip = string_to_ip(&config.network().ip).unwrap_or_else(|e| panic!("invalid ip: {e}"));
    let addr = SocketAddr::from((ip, config.network().port));

    if config.tls().enable {
        let cert_path = config
            .tls()
            .cert
            .clone()
            .unwrap_or_else(|| panic!("invalid cert path"));
        let key_path = config
            .tls()
            .key
            .clone()
            .unwrap_or_else(|| panic!("invalid key path"));

        let tls_config = RustlsConfig::from_pem_file(cert_path, key_path).await?;
        info!("serving https on {addr}");
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
    } else {
        info!("serving http on {addr}");
        axum_server::bind(addr)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>())
            .await
    }
}
