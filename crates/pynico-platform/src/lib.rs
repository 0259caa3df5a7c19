//! Browser adapters for the PyNico core ports.

pub mod storage;
pub mod llm;

#[cfg(test)]
mod tests;
