use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub api_key: String,
    pub api_base: Option<String>,
    pub system_instruction: String,
    pub request_timeout_ms: u32,
}

pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

impl GeminiConfig {
    pub fn base_url(&self) -> &str {
        self.api_base.as_deref().unwrap_or(GEMINI_DEFAULT_BASE_URL)
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            api_base: None,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            request_timeout_ms: 60_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    /// Key holding the serialized session collection
    pub sessions_key: String,
    /// Key holding the light/dark preference
    pub theme_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
            sessions_key: "pynico-chat-sessions".to_string(),
            theme_key: "pynico-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Auto-detect best available backend
    Auto,
    Memory,
    LocalStorage,
}

const DEFAULT_SYSTEM_INSTRUCTION: &str = r#"Você é PyNico, um desenvolvedor Python especialista e um mentor amigável para jovens programadores.
Sua personalidade é paciente, profissional e prestativa.

**REGRAS PRINCIPAIS:**
1.  **Seja Conciso:** Mantenha suas respostas curtas e diretas. Evite parágrafos longos.
2.  **Divida e Conquiste:** Divida explicações complexas em partes menores e fáceis de entender. Responda a uma parte e espere que o usuário peça a continuação.
3.  **Incentive a Interação:** Termine suas respostas com perguntas como "Isso faz sentido?" ou "Quer que eu detalhe alguma parte específica?" para encorajar um diálogo.
4.  **Código Claro:** Forneça exemplos de código úteis e bem comentados. Sempre formate trechos de código em markdown usando ```python ... ```.
5.  **Boas Práticas:** Incentive boas práticas de codificação, como escrever código limpo e testá-lo.
"#;
