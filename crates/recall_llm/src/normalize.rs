//! Response normalizer: best-effort plain text from heterogeneous backend shapes.
//!
//! Strategies are tried in order; the first non-empty result wins. Each one is
//! pure and never fails, so the normalizer always returns a string (possibly empty).

use serde_json::Value;

use crate::types::BackendResponse;

type Strategy = fn(&BackendResponse) -> Option<String>;

const STRATEGIES: &[Strategy] = &[from_accessor, from_text_field, from_candidate_parts];

/// Extract the response text, or `""` when no strategy matches.
pub fn normalize(response: &BackendResponse) -> String {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(response).filter(|text| !text.is_empty()))
        .unwrap_or_default()
}

/// SDK result objects nest the payload under `response`.
fn payload(response: &BackendResponse) -> &Value {
    match response.body.get("response") {
        Some(inner) if inner.is_object() => inner,
        _ => &response.body,
    }
}

fn from_accessor(response: &BackendResponse) -> Option<String> {
    response.accessor.as_ref().map(|text| text())
}

fn from_text_field(response: &BackendResponse) -> Option<String> {
    payload(response)
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn from_candidate_parts(response: &BackendResponse) -> Option<String> {
    let parts = payload(response)
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .filter(|text| !text.is_empty())
        .collect();
    Some(texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_callable_accessor() {
        let resp = BackendResponse::from_accessor(|| "hi".to_string());
        assert_eq!(normalize(&resp), "hi");
    }

    #[test]
    fn test_string_text_field() {
        let resp = BackendResponse::from_json(json!({ "response": { "text": "hi" } }));
        assert_eq!(normalize(&resp), "hi");
    }

    #[test]
    fn test_candidate_parts_joined_with_newline() {
        let resp = BackendResponse::from_json(json!({
            "response": {
                "candidates": [{ "content": { "parts": [{ "text": "a" }, { "text": "b" }] } }]
            }
        }));
        assert_eq!(normalize(&resp), "a\nb");
    }

    #[test]
    fn test_unwrapped_candidate_parts() {
        let resp = BackendResponse::from_json(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "first" },
                { "inlineData": {} },
                { "text": "" },
                { "text": "second" }
            ] } }]
        }));
        assert_eq!(normalize(&resp), "first\nsecond");
    }

    #[test]
    fn test_unknown_shape_yields_empty() {
        let resp = BackendResponse::from_json(json!({ "response": { "foo": 1 } }));
        assert_eq!(normalize(&resp), "");
        assert_eq!(normalize(&BackendResponse::default()), "");
    }

    #[test]
    fn test_non_string_text_field_is_skipped() {
        let resp = BackendResponse::from_json(json!({
            "text": 42,
            "candidates": [{ "content": { "parts": [{ "text": "fallback" }] } }]
        }));
        assert_eq!(normalize(&resp), "fallback");
    }

    #[test]
    fn test_accessor_wins_over_text_field() {
        let mut resp = BackendResponse::from_accessor(|| "a".to_string());
        resp.body = json!({ "text": "b" });
        assert_eq!(normalize(&resp), "a");
    }

    #[test]
    fn test_empty_accessor_falls_through() {
        let mut resp = BackendResponse::from_accessor(String::new);
        resp.body = json!({ "text": "from field" });
        assert_eq!(normalize(&resp), "from field");
    }
}
