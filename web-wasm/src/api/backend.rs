//! Fetch bindings for the backend collaborator
//!
//! One request per workflow invocation; no retries and no timeout. Any
//! network fault or unreadable body folds into `Error::Transport`, and a
//! non-2xx answer to the final config fetch becomes `Error::DownloadHttp`
//! with the (truncated) error body.

use subconverter_common::{
    api::{self, DetectResponse, ValidateRequest, ValidateResponse},
    query, Error, Result,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Longest error-body excerpt surfaced to the user
const MAX_ERROR_BODY: usize = 200;

/// Downloaded configuration payload
pub struct ConfigDownload {
    pub bytes: Vec<u8>,
    pub disposition: Option<String>,
}

fn transport(context: &str, value: JsValue) -> Error {
    Error::Transport(format!("{context}: {value:?}"))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY).collect()
}

async fn fetch_response(request: &Request) -> Result<Response> {
    let window =
        web_sys::window().ok_or_else(|| Error::Transport("window unavailable".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| transport("network error", e))?;
    value
        .dyn_into::<Response>()
        .map_err(|e| transport("unexpected fetch result", e))
}

async fn response_text(response: &Response) -> Result<String> {
    let promise = response
        .text()
        .map_err(|e| transport("response body unavailable", e))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| transport("failed to read response body", e))?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))
}

/// `GET /api/auto_detect_pairs?remote_url=<enc>`
pub async fn auto_detect_pairs(service_root: &str, remote_url: &str) -> Result<DetectResponse> {
    let url = query::auto_detect_url(service_root, remote_url);
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| transport("invalid request", e))?;

    let response = fetch_response(&request).await?;
    let body = response_text(&response).await?;
    api::decode_detect(&body)
}

/// `POST /api/validate_configuration` with a JSON body
pub async fn validate_configuration(
    service_root: &str,
    payload: &ValidateRequest,
) -> Result<ValidateResponse> {
    let url = query::validate_configuration_url(service_root);
    let body = serde_json::to_string(payload)
        .map_err(|e| Error::Transport(format!("failed to encode request: {e}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| transport("invalid request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| transport("failed to set headers", e))?;

    let response = fetch_response(&request).await?;
    let body = response_text(&response).await?;
    api::decode_validate(&body)
}

/// Fetch the generated configuration itself for the download action
pub async fn fetch_config(url: &str) -> Result<ConfigDownload> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| transport("invalid request", e))?;

    let response = fetch_response(&request).await?;
    if !response.ok() {
        let body = response_text(&response).await.unwrap_or_default();
        return Err(Error::DownloadHttp {
            status: response.status(),
            body: truncate_body(&body),
        });
    }

    let disposition = response
        .headers()
        .get("content-disposition")
        .ok()
        .flatten();
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| transport("response body unavailable", e))?,
    )
    .await
    .map_err(|e| transport("failed to read response body", e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(ConfigDownload { bytes, disposition })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short_input_unchanged() {
        assert_eq!(truncate_body("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_truncate_body_caps_at_limit() {
        let long = "x".repeat(500);
        assert_eq!(truncate_body(&long).chars().count(), MAX_ERROR_BODY);
    }

    #[test]
    fn test_truncate_body_respects_char_boundaries() {
        let long = "错误".repeat(300);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.chars().count(), MAX_ERROR_BODY);
        assert!(long.starts_with(&truncated));
    }
}
