//! Shared library module for the slidetile command-line app.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod command;
pub mod error;
pub mod gallery;
pub mod observer;
pub mod settings;
pub mod store;
pub mod text_view;
