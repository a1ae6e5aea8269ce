//! # resume-forge
//!
//! A command-line résumé builder: structured résumé data, AI-assisted field
//! extraction and rewriting, and themed HTML rendering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_forge::{Renderer, Resume};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut resume = Resume::new();
//! resume.name = "Ada Lovelace".to_string();
//! resume.theme = "minimal".to_string();
//!
//! let html = Renderer::new()?.render(&resume)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Resume**: the data model with validate, merge, photo and canonical JSON
//! 2. **Renderer**: theme dispatch and Tera-based HTML rendering
//! 3. **Ai**: the chat-completion collaborator behind a trait
//! 4. **Wizard**: the interactive review loop tying the two together

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod render;
mod resume;
mod store;

pub mod ai;
pub mod prompts;
pub mod wizard;

pub use ai::{Ai, AiClient, Extraction};
pub use config::Config;
pub use error::{Error, Result};
pub use render::{Renderer, Theme, sidebar_color_hex};
pub use resume::{Contact, Resume};
pub use store::{load_resume, save_html, save_resume};
