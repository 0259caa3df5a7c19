pub mod about;
pub mod chat;
pub mod sidebar;
pub mod welcome;
