use routeshell::config::{AssetMode, Config};
use routeshell::{logger, App};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cfg = Config::load()?;
    logger::init(
        cfg.logging.access_log_file.as_deref(),
        cfg.logging.error_log_file.as_deref(),
    )?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(cfg))
}

async fn serve(cfg: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut app = App::new();

    if let Some(dir) = cfg.assets.dir.clone() {
        let count = match cfg.assets.mode {
            AssetMode::Eager => app.serve_static(&dir, &cfg.assets.route_prefix)?,
            AssetMode::Lazy => app.serve_dynamic(&dir, &cfg.assets.route_prefix)?,
        };
        logger::log_asset_routes(
            count,
            &dir,
            match cfg.assets.mode {
                AssetMode::Eager => "eager",
                AssetMode::Lazy => "lazy",
            },
        );
    }

    let listen = cfg.listen_config();
    app.listen(listen, |addr| logger::log_server_start(&addr))
        .await?;
    Ok(())
}
