// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Allowances mirrored from the manifest lint table; the crate-level
// group denies above would otherwise override them.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Themed full-page background animation engine.
//!
//! Backdrop simulates and draws two mutually exclusive visual ensembles onto
//! a single canvas covering the whole scrollable document: a falling star
//! field with two constellation overlays for the dark theme, and drifting
//! clouds with rising petals and glow motes for the light theme.
//!
//! # Key entry points
//!
//! - [`engine::AnimationLoop`] - the running engine: one simulate + render
//!   pass per display frame until disposed
//! - [`engine::Backdrop`] - the host-independent frame pass (pools, canvas,
//!   renderer)
//! - [`engine::Host`] - the environment seam: surface acquisition, frame
//!   scheduling and resize notifications
//! - [`theme::ThemeCell`] - the shared theme holder the loop reads every pass
//! - [`options::Options`] - pool sizes, seeding and frame limiting
//!
//! # Architecture
//!
//! Everything runs on one cooperative thread. Each pass reads the theme cell,
//! advances only the active theme's pools and redraws the whole surface.
//! Viewport changes regenerate every pool in a single assignment; content
//! growth only resizes the surface height.
//!
//! The `web` feature provides a browser [`engine::Host`] built on
//! `requestAnimationFrame`, the window `resize` event and a `ResizeObserver`.

pub mod canvas;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod options;
pub mod pools;
pub mod renderer;
pub mod simulation;
pub mod surface;
pub mod theme;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
