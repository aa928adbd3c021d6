use tracing::info;

use image_stream_utils::config::Settings;
use image_stream_utils::image_stream::archive_mime_type_with;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("image_stream_utils=info".parse()?),
        )
        .init();

    let settings = Settings::new()?;
    info!(
        "[Config] Fallback mime type: {}",
        settings.detector.fallback_mime
    );

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        anyhow::bail!("usage: image-stream-utils <PATH>...");
    }

    for path in paths {
        let mime = archive_mime_type_with(&path, &settings.detector).await?;
        println!("{}\t{}", path, mime);
    }

    Ok(())
}
