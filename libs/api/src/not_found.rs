use axum::http::{StatusCode, Uri};
use tracing::debug;

pub(super) async fn get_404(uri: Uri) -> StatusCode {
    debug!(task = "route not found", uri = %uri);
    StatusCode::NOT_FOUND
}
