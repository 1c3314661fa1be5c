//! # Tessera - Block-Based Page Builder
//!
//! Tessera assembles web pages from a fixed catalog of building blocks
//! (hero, gallery, pricing table, chart, ...) and renders them to HTML.
//! It provides:
//!
//! - **Component catalog**: templates, labels and repeating lists per type
//! - **Document model**: ordered instances with all-or-nothing mutations
//! - **Renderer**: editor canvas and standalone page export
//! - **Chart geometry**: bar heights, line paths and pie arcs
//! - **Properties forms**: editable fields generated from live data
//! - **Mutation controller**: edits plus a debounced save
//!
//! ## Quick Start
//!
//! ```
//! use tessera::{document::Document, render, schema, settings::Settings};
//!
//! let mut doc = Document::new(10);
//! let chart = doc.add_instance("graph")?;
//! doc.patch_field(chart, "chartType", "pie".into())?;
//!
//! // Editor canvas
//! let canvas = render::render_document(&doc).to_html();
//! assert!(canvas.contains("data-type=\"graph\""));
//!
//! // Properties form
//! let form = schema::form_for(doc.get(chart).unwrap()).unwrap();
//! assert!(form.field("chartType").is_some());
//!
//! // Export
//! let page = render::render_page(doc.instances(), &Settings::default());
//! assert!(page.starts_with("<!DOCTYPE html>"));
//! # Ok::<(), tessera::TesseraError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Component types and their templates |
//! | [`document`] | Instances, selection and mutations |
//! | [`render`] | Markup for the canvas and exported pages |
//! | [`chart`] | Chart geometry |
//! | [`schema`] | Properties forms and the edits they emit |
//! | [`controller`] | Mutation controller and debounced saving |
//! | [`persist`] | Stored project format |
//! | [`server`] | Project API and preview server |
//! | [`error`] | Error types |

pub mod catalog;
pub mod chart;
pub mod controller;
pub mod data;
pub mod document;
pub mod error;
pub mod markup;
pub mod persist;
pub mod render;
pub mod schema;
pub mod server;
pub mod settings;

// Re-exports for convenience
pub use document::Document;
pub use error::TesseraError;
