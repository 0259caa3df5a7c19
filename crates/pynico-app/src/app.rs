//! Main egui application: composes the panels and drives the chat controller.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, Align, CentralPanel, Layout, RichText, SidePanel, TopBottomPanel};

use pynico_core::controller::ChatController;
use pynico_core::event_bus::EventBus;
use pynico_core::persistence::{PersistenceAdapter, SessionAutosave};
use pynico_platform::llm::GeminiProvider;
use pynico_platform::storage::open_storage;
use pynico_types::config::AppConfig;
use pynico_types::session::ChatSession;
use pynico_types::theme::Theme;
use pynico_ui::panels::{about, chat, sidebar};
use pynico_ui::state::{UiAction, UiState};
use pynico_ui::theme::{self, palette, SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_WIDTH};

/// Everything read from storage at startup
struct Restored {
    sessions: Option<Vec<ChatSession>>,
    theme: Theme,
}

/// The main application state
pub struct PyNicoApp {
    ui_state: UiState,
    controller: ChatController,
    event_bus: EventBus,
    persistence: Rc<PersistenceAdapter>,
    autosave: SessionAutosave,
    restored: Rc<RefCell<Option<Restored>>>,
    applied_theme: Option<Theme>,
}

impl PyNicoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut config = AppConfig::default();
        config.gemini.api_key = option_env!("API_KEY").unwrap_or_default().to_string();
        if config.gemini.api_key.is_empty() {
            log::warn!("Built without API_KEY; every send will fail");
        }

        let storage = open_storage(&config.storage.backend);
        let persistence = Rc::new(PersistenceAdapter::new(storage, &config.storage));
        let remote = Rc::new(GeminiProvider::new(config.gemini.clone()));
        let event_bus = EventBus::new();
        let controller = ChatController::new(remote, event_bus.clone());

        let restored = Rc::new(RefCell::new(None));
        Self::restore(persistence.clone(), restored.clone(), cc.egui_ctx.clone());

        Self {
            ui_state: UiState::new(),
            controller,
            event_bus,
            persistence,
            autosave: SessionAutosave::new(),
            restored,
            applied_theme: None,
        }
    }

    /// Load history and theme (async); the store stays uninitialized until then
    fn restore(
        persistence: Rc<PersistenceAdapter>,
        slot: Rc<RefCell<Option<Restored>>>,
        ctx: egui::Context,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            let sessions = persistence.load_sessions().await;
            let theme = persistence.load_theme().await;
            log::info!(
                "Loaded {} saved session(s) from {}",
                sessions.as_ref().map_or(0, Vec::len),
                persistence.backend_name()
            );
            *slot.borrow_mut() = Some(Restored { sessions, theme });
            ctx.request_repaint();
        });
    }

    fn apply_restored(&mut self) {
        let Some(restored) = self.restored.borrow_mut().take() else {
            return;
        };
        self.ui_state.theme = restored.theme;
        if !self.controller.is_initialized() {
            self.controller.initialize(restored.sessions);
        }
    }

    /// Save sessions if the store changed since the last frame (fire-and-forget)
    fn autosave(&mut self) {
        let autosave = &mut self.autosave;
        let Some(snapshot) = self.controller.with_store(|store| autosave.take_snapshot(store)) else {
            return;
        };
        let persistence = self.persistence.clone();
        wasm_bindgen_futures::spawn_local(async move {
            persistence.save_sessions(&snapshot).await;
        });
    }

    fn save_theme(&self) {
        let persistence = self.persistence.clone();
        let theme = self.ui_state.theme;
        wasm_bindgen_futures::spawn_local(async move {
            persistence.save_theme(theme).await;
        });
    }
}

impl eframe::App for PyNicoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_restored();

        if self.applied_theme != Some(self.ui_state.theme) {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.applied_theme = Some(self.ui_state.theme);
        }

        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        let mut actions = Vec::new();
        let ui_state = &mut self.ui_state;
        let p = palette(ui_state.theme);

        self.controller.with_view(|view| {
            // ── Top bar ──────────────────────────────────────
            TopBottomPanel::top("top_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("PyNico Assistente")
                            .strong()
                            .color(p.accent)
                            .size(16.0),
                    );
                    if let Some(session) = view.active_session {
                        ui.separator();
                        ui.label(RichText::new(&session.title).color(p.text_secondary).small());
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Sobre").clicked() {
                            ui_state.show_about = true;
                        }
                        let theme_label = if ui_state.theme.is_dark() { "Tema claro" } else { "Tema escuro" };
                        if ui.button(theme_label).clicked() {
                            actions.push(UiAction::ToggleTheme);
                        }
                        ui.label(RichText::new(&ui_state.status_text).color(p.text_secondary).small());
                    });
                });
            });

            // ── History sidebar ──────────────────────────────
            let width = if ui_state.sidebar_collapsed { SIDEBAR_COLLAPSED_WIDTH } else { SIDEBAR_WIDTH };
            SidePanel::left("history_sidebar")
                .resizable(false)
                .exact_width(width)
                .show(ctx, |ui| {
                    sidebar::history_sidebar(ui, &view, ui_state, &mut actions);
                });

            // ── Chat ─────────────────────────────────────────
            CentralPanel::default().show(ctx, |ui| {
                chat::chat_panel(ui, &view, ui_state, &mut actions);
            });
        });

        about::about_window(ctx, p, &mut self.ui_state.show_about);

        for action in actions {
            self.handle_action(action, ctx);
        }

        self.autosave();
    }
}

impl PyNicoApp {
    fn handle_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::NewChat => {
                self.controller.create_session();
            }
            UiAction::SelectSession(id) => self.controller.select_session(&id),
            UiAction::DeleteSession(id) => self.controller.delete_session(&id),
            UiAction::Submit(text) => self.dispatch_message(text, ctx),
            UiAction::ToggleTheme => {
                self.ui_state.theme = self.ui_state.theme.toggled();
                self.save_theme();
            }
        }
    }

    /// Append the user turn now, then run the remote call in the background
    fn dispatch_message(&mut self, text: String, ctx: &egui::Context) {
        let Ok(ticket) = self.controller.begin_submit(&text) else {
            return;
        };
        self.ui_state.accept_submit();

        let controller = self.controller.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            controller.complete(ticket).await;
            ctx.request_repaint();
        });
    }
}
