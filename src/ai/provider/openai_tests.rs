//! Tests for OpenAI response extraction

use super::*;

#[test]
fn test_extract_choice_text() {
    let body = serde_json::json!({
        "choices": [
            {"message": {"role": "assistant", "content": "## Food\n- Tapas"}}
        ]
    });

    let text = extract_choice_text(&body).unwrap();
    assert_eq!(text, "## Food\n- Tapas");
}

#[test]
fn test_extract_choice_text_no_choices() {
    let body = serde_json::json!({"choices": []});
    let err = extract_choice_text(&body).unwrap_err();
    assert!(matches!(err, AiError::Parse(_)));
}

#[test]
fn test_extract_choice_text_null_content() {
    let body = serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": null}}]
    });
    assert!(extract_choice_text(&body).is_err());
}
