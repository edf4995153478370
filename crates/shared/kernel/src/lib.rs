//! Kernel utilities shared by `FeatDeck` hosts.
//! Keep this crate lightweight: today it only knows how to load layered configuration.
//!
//! ```rust,no_run
//! use featdeck_kernel::config::load_config;
//! use featdeck_kernel::domain::config::DeckConfig;
//!
//! let cfg: DeckConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.panel.auto_mount);
//! ```

pub mod config;

pub use featdeck_domain as domain;
