use codelet_models::ProviderResponse;

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/api/{path}", base_url.trim_end_matches('/'))
}

/// Ollama signals failure with a 4xx/5xx status and an `error` string.
pub(crate) fn api_error(response: &ProviderResponse) -> Option<String> {
    response.is_error().then(|| {
        format!(
            "Ollama API error ({}): {}",
            response.status,
            response.error_message()
        )
    })
}
