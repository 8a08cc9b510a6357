//! Storage module for the progress log and configuration.

pub mod config;
pub mod progress_store;

pub use config::{AppConfig, ConfigError, StorageSettings};
pub use progress_store::{
    JsonProgressStore, MemoryProgressStore, NewProgressEntry, ProgressEntry, ProgressRepository,
    StoreError,
};
