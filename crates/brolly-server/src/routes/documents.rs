//! Document upload and graph rebuild endpoints.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use brolly_extractors::scan_documents;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RebuildResponse {
    pub documents: usize,
    pub entities: usize,
    pub facts: usize,
}

/// Upload policy documents and rebuild the knowledge graph.
/// POST /documents (multipart)
///
/// Every upload triggers a full rebuild; there is no incremental merge.
pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<RebuildResponse>> {
    let documents_dir = state.engine.config().documents_dir.clone();
    std::fs::create_dir_all(&documents_dir)
        .map_err(|e| ApiError::internal(format!("Cannot create documents dir: {}", e)))?;

    let mut saved = 0usize;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };
        // Uploads land under their bare file name only.
        let file_name = std::path::Path::new(&file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::bad_request("Invalid file name"))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {}", e)))?;

        std::fs::write(documents_dir.join(&file_name), &bytes)
            .map_err(|e| ApiError::internal(format!("Failed to save upload: {}", e)))?;
        info!("Saved uploaded document {}", file_name);
        saved += 1;
    }

    if saved == 0 {
        return Err(ApiError::bad_request("No files in upload"));
    }

    // Stale cache would shadow the new documents.
    remove_cached_graph(&state)?;
    rebuild_graph(&state).await
}

/// Force a rebuild from the configured documents directory.
/// POST /rebuild
pub async fn rebuild(State(state): State<AppState>) -> ApiResult<Json<RebuildResponse>> {
    remove_cached_graph(&state)?;
    rebuild_graph(&state).await
}

fn remove_cached_graph(state: &AppState) -> ApiResult<()> {
    let path = state.engine.config().graph_path();
    if path.exists() {
        std::fs::remove_file(&path)
            .map_err(|e| ApiError::internal(format!("Failed to drop graph cache: {}", e)))?;
    }
    Ok(())
}

async fn rebuild_graph(state: &AppState) -> ApiResult<Json<RebuildResponse>> {
    let documents = scan_documents(&state.engine.config().documents_dir).await?;
    let snapshot = state.engine.rebuild(&documents).await?;

    let response = RebuildResponse {
        documents: documents.len(),
        entities: snapshot.graph.entity_count(),
        facts: snapshot.graph.fact_count(),
    };

    state.publish(snapshot).await;
    Ok(Json(response))
}
