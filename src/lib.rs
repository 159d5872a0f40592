//! bpconsume - Blueprint metadata consumption
//!
//! Turns a Terraform blueprint's `metadata.yaml` (plus the optional
//! `metadata.display.yaml`) into the two artifacts needed to publish it as a
//! jump start solution:
//!
//! - a `Solution` record, written as protobuf text format
//! - a soy template document rendered from a token template
//!
//! ## Pipeline
//! ```text
//! metadata.yaml -> Loader (schema adapter) -> Record Builder -> Textproto -> Sink
//!                                          \-> Template Renderer ---------/
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bpconsume::{consume_metadata, ConsumeConfig, DirectorySink};
//!
//! let config = ConsumeConfig::new("./blueprint").with_template("soy_template.soy");
//! let mut sink = DirectorySink::new("./generated");
//! let report = consume_metadata(&config, &mut sink)?;
//! println!("generated {}", report.id);
//! # Ok::<(), bpconsume::ConsumeError>(())
//! ```

// Core error handling
pub mod error;

// Run configuration
pub mod config;

// Source documents and schema revisions
pub mod metadata;

// Metadata -> Solution record
pub mod builder;

// Metadata -> soy template document
pub mod render;

// Solution record -> protobuf text format
pub mod textproto;

// Artifact persistence
pub mod sink;

// End-to-end run
pub mod pipeline;

pub use builder::RecordBuilder;
pub use config::ConsumeConfig;
pub use error::{ConsumeError, Result};
pub use metadata::{LoadedBlueprint, SchemaRevision};
pub use pipeline::{consume_metadata, ConsumeReport};
pub use render::TemplateRenderer;
pub use sink::{ArtifactSink, DirectorySink, MemorySink};
