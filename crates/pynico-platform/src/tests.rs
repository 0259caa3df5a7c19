#[cfg(test)]
mod tests {
    use crate::llm::gemini::*;
    use crate::storage::MemoryStorage;
    use pynico_core::persistence::PersistenceAdapter;
    use pynico_core::ports::StoragePort;
    use pynico_types::config::StorageConfig;
    use pynico_types::message::Message;
    use pynico_types::session::{greeting, ChatSession};
    use pynico_types::ChatError;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    // ─── Gemini Request Tests ────────────────────────────────

    #[test]
    fn test_request_body_maps_history_then_new_turn() {
        let history = vec![greeting(), Message::user("Oi"), Message::model("Olá!")];
        let body = build_request_body("persona", &history, "E tuplas?");

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[1]["parts"][0]["text"], "Oi");
        assert_eq!(contents[3]["role"], "user");
        assert_eq!(contents[3]["parts"][0]["text"], "E tuplas?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "persona");
    }

    #[test]
    fn test_request_body_without_system_instruction() {
        let body = build_request_body("", &[], "Oi");
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
    }

    // ─── Gemini Response Tests ───────────────────────────────

    fn response(value: serde_json::Value) -> ApiResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parse_reply_joins_parts() {
        let data = response(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Olá" }, { "text": "!" }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(parse_reply(data).unwrap(), "Olá!");
    }

    #[test]
    fn test_parse_reply_no_candidates() {
        let err = parse_reply(response(json!({}))).unwrap_err();
        assert!(matches!(err, ChatError::Remote { .. }));
    }

    #[test]
    fn test_parse_reply_blocked_prompt() {
        let data = response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
        let err = parse_reply(data).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_reply_empty_text() {
        let data = response(json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "MAX_TOKENS" }]
        }));
        let err = parse_reply(data).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_error_message_uses_api_error_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(400, body), "HTTP 400: API key not valid");
        assert_eq!(error_message(502, "Bad Gateway"), "HTTP 502: Bad Gateway");
    }

    // ─── MemoryStorage Tests ─────────────────────────────────

    #[test]
    fn test_memory_storage_set_and_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.backend_name(), "memory");
        block_on(async {
            assert!(storage.get("k").await.unwrap().is_none());
            storage.set("k", b"v1").await.unwrap();
            storage.set("k", b"v2").await.unwrap();
            assert_eq!(storage.get("k").await.unwrap(), Some(b"v2".to_vec()));
        });
    }

    #[test]
    fn test_memory_storage_backs_persistence() {
        let persistence = PersistenceAdapter::new(Rc::new(MemoryStorage::new()), &StorageConfig::default());
        let mut session = ChatSession::new("s1");
        session.messages.push(Message::user("Oi"));

        block_on(persistence.save_sessions(&[session.clone()]));
        assert_eq!(block_on(persistence.load_sessions()), Some(vec![session]));
    }
}
