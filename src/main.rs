use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use chatscan::application::services::ScanService;
use chatscan::infrastructure::imaging::{MagickMasker, MaskProfiles};
use chatscan::infrastructure::observability::{TracingConfig, init_tracing};
use chatscan::infrastructure::ocr::TesseractExtractor;
use chatscan::infrastructure::storage::TempImageStore;
use chatscan::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    // Missing external tools are fatal at startup, never per request.
    if !settings.tools.tesseract_bin.is_file() {
        anyhow::bail!(
            "tesseract binary not found at {}",
            settings.tools.tesseract_bin.display()
        );
    }
    if !settings.tools.convert_bin.is_file() {
        anyhow::bail!(
            "convert binary not found at {}",
            settings.tools.convert_bin.display()
        );
    }

    let masker = Arc::new(MagickMasker::new(
        settings.tools.convert_bin.clone(),
        MaskProfiles::default(),
        settings.tools.timeout(),
    ));
    let extractor = Arc::new(TesseractExtractor::new(
        settings.tools.tesseract_bin.clone(),
        settings.tools.timeout(),
    ));
    let image_store = Arc::new(TempImageStore::new(settings.storage.temp_dir.clone())?);

    let scan_service = Arc::new(ScanService::new(
        masker,
        extractor,
        image_store,
        settings.verification.marker.clone(),
    ));

    let state = AppState { scan_service };
    let router = create_router(state, &settings.static_assets.root);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
