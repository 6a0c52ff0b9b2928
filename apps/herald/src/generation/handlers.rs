//! Axum route handlers for the email generation API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{generate_email, GenerateEmailRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub subject: String,
    pub body: String,
    pub status: &'static str,
}

/// POST /generate-email
///
/// Resolves the profile, builds the prompt, makes one backend call, and
/// returns the parsed draft. Validation failures never reach the backend.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<Json<GenerateEmailResponse>, AppError> {
    info!(
        job_posting_len = request.job_posting.as_deref().map(str::len).unwrap_or(0),
        profile_provided = request.personal_info.is_some(),
        revision = request.existing_email.is_some(),
        "email generation request received"
    );

    let draft = generate_email(
        state.generator.as_ref(),
        &state.profiles,
        &state.config.sender,
        request,
    )
    .await?;

    Ok(Json(GenerateEmailResponse {
        subject: draft.subject,
        body: draft.body,
        status: "success",
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::config::{Config, SenderIdentity};
    use crate::llm_client::CannedGenerator;
    use crate::profile::ProfileStore;

    fn test_state(generator: Arc<CannedGenerator>) -> AppState {
        AppState {
            generator,
            profiles: ProfileStore::new(),
            config: Config {
                anthropic_api_key: None,
                port: 8000,
                rust_log: "info".to_string(),
                llm_timeout: Duration::from_secs(1),
                test_mode: true,
                sender: SenderIdentity::default(),
            },
        }
    }

    #[tokio::test]
    async fn test_handler_returns_success_envelope() {
        let generator = Arc::new(CannedGenerator::new("Subject: Foo\n\nBar baz"));
        let state = test_state(generator.clone());

        let request = GenerateEmailRequest {
            job_posting: Some("Rust intern wanted".to_string()),
            ..Default::default()
        };
        let Json(response) = handle_generate_email(State(state), Json(request))
            .await
            .unwrap();

        assert_eq!(response.subject, "Foo");
        assert_eq!(response.body, "Bar baz");
        assert_eq!(response.status, "success");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_handler_rejects_missing_job_posting_without_backend_call() {
        let generator = Arc::new(CannedGenerator::new("Subject: Foo\n\nBar"));
        let state = test_state(generator.clone());

        let result =
            handle_generate_email(State(state), Json(GenerateEmailRequest::default())).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(generator.calls(), 0);
    }

    #[test]
    fn test_response_serializes_expected_shape() {
        let response = GenerateEmailResponse {
            subject: "Foo".to_string(),
            body: "Bar".to_string(),
            status: "success",
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["subject"], "Foo");
        assert_eq!(value["body"], "Bar");
        assert_eq!(value["status"], "success");
    }
}
