#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::theme::*;
    use pynico_types::event::ChatEvent;
    use pynico_types::theme::Theme;

    fn failed(message: &str) -> ChatEvent {
        ChatEvent::SendFailed {
            ticket: 1,
            session_id: "s1".to_string(),
            message: message.to_string(),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(state.input_text.is_empty());
        assert!(!state.sidebar_collapsed);
        assert!(!state.show_about);
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.status_text, STATUS_READY);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_ui_state_send_lifecycle() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::SendStarted {
            ticket: 1,
            session_id: "s1".to_string(),
        }]);
        assert_eq!(state.status_text, STATUS_SENDING);

        state.process_events(vec![ChatEvent::ReplyReceived {
            ticket: 1,
            session_id: "s1".to_string(),
        }]);
        assert_eq!(state.status_text, STATUS_READY);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_ui_state_send_failed_shows_banner() {
        let mut state = UiState::new();
        state.process_events(vec![failed("Remote error: quota")]);
        assert_eq!(state.last_error.as_deref(), Some("Remote error: quota"));
        assert!(state.status_text.contains("quota"));
    }

    #[test]
    fn test_ui_state_next_send_clears_banner() {
        let mut state = UiState::new();
        state.process_events(vec![
            failed("offline"),
            ChatEvent::SendStarted { ticket: 2, session_id: "s1".to_string() },
        ]);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_ui_state_switching_session_clears_banner() {
        let mut state = UiState::new();
        state.process_events(vec![failed("offline")]);
        state.process_events(vec![ChatEvent::SessionSelected { session_id: "s2".to_string() }]);
        assert!(state.last_error.is_none());

        state.process_events(vec![failed("offline")]);
        state.process_events(vec![ChatEvent::SessionDeleted { session_id: "s3".to_string() }]);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_ui_state_accept_submit_clears_input() {
        let mut state = UiState::new();
        state.input_text = "Oi".to_string();
        state.accept_submit();
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_ui_state_dismiss_error() {
        let mut state = UiState::new();
        state.last_error = Some("x".to_string());
        state.dismiss_error();
        assert!(state.last_error.is_none());
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(palette(Theme::Dark).bg_primary, DARK.bg_primary);
        assert_eq!(palette(Theme::Light).bg_primary, LIGHT.bg_primary);
        assert_ne!(DARK.bg_primary, LIGHT.bg_primary);
    }

    #[test]
    fn test_apply_theme_sets_dark_mode() {
        let ctx = egui::Context::default();
        apply_theme(&ctx, Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
        apply_theme(&ctx, Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(ctx.style().visuals.panel_fill, DARK.bg_primary);
    }
}
