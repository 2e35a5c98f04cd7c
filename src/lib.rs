//! Inlay - resolve secret references and inlay them into YAML configs.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── render        # Fetch secrets and interpolate a document
//! │   ├── check         # Validate a secrets specification
//! │   ├── completions   # Shell completions
//! │   └── output        # Shared terminal output helpers
//! └── core/             # Core library components
//!     ├── reference     # Secret reference parsing (locator:OUTPUT_KEY)
//!     ├── interpolate   # YAML placeholder interpolation engine
//!     ├── mask          # Log redaction registry
//!     └── source/       # Secret value sources
//!         ├── mod       # SecretSource trait
//!         ├── env       # Environment variable source
//!         └── exec      # External command source
//! ```
//!
//! # Features
//!
//! - `locator:OUTPUT_KEY` reference syntax, comma or newline separated
//! - Whole-scalar `$KEY` / `${KEY}` substitution in YAML documents
//! - Line-by-line redaction registry for multi-line secrets
//! - Pluggable secret sources (environment, external command)

pub mod cli;
pub mod core;
pub mod error;
