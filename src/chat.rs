use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequestBody {
    pub model: String,
    pub store: bool,
    pub messages: Vec<ChatMessageRole>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageRole {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionMessage,
}

/// The assistant message of one choice.
///
/// Fields the service adds beyond `content`, `refusal` and `role` (tool calls,
/// annotations, audio) are kept in `extra` so the printed message is complete.
#[derive(Deserialize, Serialize, Debug)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
    pub refusal: Option<String>,
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetails,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorDetails {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
