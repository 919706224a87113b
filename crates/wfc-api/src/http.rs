use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse},
    routing::get,
};
use tracing::{debug, info};
use wfc_model::{FormSubmission, Schema, resolve_default_timezone, timezone_catalog};

use crate::{error::ApiError, page};

/// Request header carrying the caller's detected timezone.
pub const TIMEZONE_HEADER: &str = "x-timezone";

const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"config.json\"";

/// HTTP front end of the configuration form.
///
/// Routes:
/// - GET / - render the form
/// - POST / - build the configuration and return it as `config.json`
pub struct ConfigFormApi {
    schema: Arc<Schema>,
}

impl ConfigFormApi {
    /// Create the API with the given field schema.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
        }
    }

    /// Build the axum router.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(render_form).post(submit_form))
            .with_state(self.schema)
    }
}

impl Default for ConfigFormApi {
    fn default() -> Self {
        Self::new(Schema::default())
    }
}

/// GET /
async fn render_form(headers: HeaderMap) -> Html<String> {
    let detected = headers
        .get(TIMEZONE_HEADER)
        .and_then(|v| v.to_str().ok());
    let default_tz = resolve_default_timezone(detected);
    debug!(default_tz = %default_tz, "rendering configuration form");

    Html(page::render(&timezone_catalog(&default_tz)))
}

/// POST /
///
/// Body: `application/x-www-form-urlencoded` form fields.
async fn submit_form(
    State(schema): State<Arc<Schema>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let submission: FormSubmission = fields.into_iter().collect();
    debug!(fields = submission.len(), "configuration form submitted");

    let config = submission.into_config(&schema)?;
    let body = config
        .to_json_pretty()
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    info!(bytes = body.len(), "configuration file generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CONTENT_DISPOSITION, DOWNLOAD_DISPOSITION),
        ],
        body,
    ))
}
