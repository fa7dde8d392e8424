use crate::chat::{
    ApiErrorResponse, ChatCompletionMessage, ChatCompletionRequestBody, ChatCompletionResponse,
    ChatMessageRole,
};
use crate::config::ProbeConfig;
use crate::constants::{
    DEFAULT_MODEL, HAIKU_PROMPT, ORGANIZATION_HEADER, PROJECT_HEADER, STORE_COMPLETION, USER_ROLE,
};
use crate::error::ProbeError;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

pub fn build_headers(config: &ProbeConfig) -> Result<HeaderMap, ProbeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", config.api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(organization) = &config.organization {
        headers.insert(
            HeaderName::from_static(ORGANIZATION_HEADER),
            HeaderValue::from_str(organization)?,
        );
    }
    if let Some(project) = &config.project {
        headers.insert(
            HeaderName::from_static(PROJECT_HEADER),
            HeaderValue::from_str(project)?,
        );
    }
    Ok(headers)
}

pub fn spinner_message(model: &str) -> String {
    format!("asking {} for a haiku", model)
}

/// Spinner on stderr for the single in-flight request.
pub fn create_spinner(model: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["◐", "◓", "◑", "◒", "●"])
            .template("{spinner:.cyan} {msg:.dim} {elapsed}"),
    );
    spinner.enable_steady_tick(120);
    spinner.set_message(spinner_message(model));

    spinner
}

pub fn build_chat_request() -> ChatCompletionRequestBody {
    ChatCompletionRequestBody {
        model: DEFAULT_MODEL.to_string(),
        store: STORE_COMPLETION,
        messages: vec![ChatMessageRole {
            role: USER_ROLE.to_string(),
            content: HAIKU_PROMPT.to_string(),
        }],
    }
}

/// Renders a message as one line of JSON.
pub fn render_message(message: &ChatCompletionMessage) -> Result<String, ProbeError> {
    Ok(serde_json::to_string(message)?)
}

/// Pulls the human-readable part out of an error body, falling back to the
/// raw text when it is not the usual `{"error": {...}}` envelope.
pub fn describe_api_error(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => match envelope.error.kind {
            Some(kind) => format!("{} ({})", envelope.error.message, kind),
            None => envelope.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

pub async fn process_chat_response(
    response: reqwest::Response,
) -> Result<ChatCompletionMessage, ProbeError> {
    let response_body = response.text().await?;
    let api_response: ChatCompletionResponse = serde_json::from_str(&response_body)?;
    api_response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or(ProbeError::EmptyChoices)
}

pub async fn make_openai_request(
    client: &Client,
    config: &ProbeConfig,
    request_body: &ChatCompletionRequestBody,
) -> Result<ChatCompletionMessage, ProbeError> {
    let headers = build_headers(config)?;
    let api_url = config.chat_completions_url();
    debug!("POST {} model={}", api_url, request_body.model);

    let spinner = create_spinner(&request_body.model);
    let sent = client
        .post(&api_url)
        .headers(headers)
        .json(request_body)
        .send()
        .await;
    spinner.finish_and_clear();
    let response = sent?;

    let status = response.status();
    info!("completion endpoint answered {}", status);

    if !status.is_success() {
        let body = response.text().await?;
        let message = describe_api_error(&body);
        warn!("completion request rejected: {}", message);
        return Err(ProbeError::api(status.as_u16(), message));
    }

    process_chat_response(response).await
}

pub async fn process_command(client: &Client, config: &ProbeConfig) -> Result<String, ProbeError> {
    let request_body = build_chat_request();
    let message = make_openai_request(client, config, &request_body).await?;

    render_message(&message)
}
