use crate::application::dto::TimeSnapshotDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/time",
    responses(
        (status = 200, description = "Current server date and time.", body = TimeSnapshotDto),
        (status = 500, description = "The server clock could not be read.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Time"
)]
pub async fn current_time(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TimeSnapshotDto>> {
    let snapshot = state.services.time_queries.current_time().into_http()?;
    Ok(Json(snapshot))
}
