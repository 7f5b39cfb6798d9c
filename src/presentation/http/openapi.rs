// src/presentation/http/openapi.rs
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::OpenApi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(crate::presentation::http::controllers::time::current_time),
    components(
        schemas(
            crate::application::dto::TimeSnapshotDto,
            crate::presentation::http::error::ErrorResponse
        )
    ),
    tags(
        (name = "Time", description = "Server clock endpoints")
    ),
    info(
        title = "servertime API",
        description = "Reports the current server date and time",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Resolve the snapshot destination from `OPENAPI_SNAPSHOT_PATH`.
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

/// Write the pretty-printed OpenAPI document to `path`, creating parent
/// directories as needed.
pub fn write_openapi_snapshot(path: impl AsRef<Path>) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
