use actix_web::{post, web, HttpResponse};
use futures::FutureExt;
use notesync_common::NoteSyncError;
use std::panic::AssertUnwindSafe;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{SummarizeRequest, SummarizeResponse};

/// Summarize meeting notes
///
/// Provider failures already degrade to the fallback summary inside the
/// summarizer, so only invalid input or a panic end up as an error here.
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let notes = req.notes()?;

    let summary = AssertUnwindSafe(state.summarizer.summarize(notes))
        .catch_unwind()
        .await
        .map_err(|_| NoteSyncError::internal("summarization panicked"))?;

    info!(
        "Summary ready - {} action items, {} decisions, {} topics",
        summary.action_items.len(),
        summary.decisions.len(),
        summary.topics.len()
    );

    Ok(HttpResponse::Ok().json(SummarizeResponse { summary }))
}
