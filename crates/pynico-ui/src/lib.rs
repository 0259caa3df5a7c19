//! egui presentation for PyNico. Reads the core's `ChatView`, emits `UiAction`s.

pub mod panels;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
