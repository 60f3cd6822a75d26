//! Floor-plan layout engine for the restaurant booking demo.
//!
//! This crate is compiled natively for tests and to WebAssembly for the
//! browser. It owns everything about a floor plan that does not need a DOM:
//! the persisted layout document, seat geometry, the editor state machine
//! that turns pointer and panel input into document mutations, hit-testing,
//! and SVG markup generation. The Leptos host is responsible only for wiring
//! DOM events to the [`engine::EditorCore`] and carrying out the
//! [`engine::Action`]s it returns (toasts, storage writes, re-renders).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor state machine ([`engine::EditorCore`]) and its actions |
//! | [`doc`] | Layout document: tables, decor elements, defaults |
//! | [`seating`] | Chair placement and visual seat capacity |
//! | [`camera`] | Zoom, viewBox and screen/world/cell conversions |
//! | [`input`] | Modes, tools, selections and the gesture state machine |
//! | [`hit`] | Hit-testing chairs, tables and elements |
//! | [`icons`] | Line-icon glyphs for elements, tables and panels |
//! | [`render`] | SVG markup for the whole scene |
//! | [`storage`] | Key-value persistence seam for the layout document |
//! | [`consts`] | Shared numeric constants (cell size, limits, keys) |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod icons;
pub mod input;
pub mod render;
pub mod seating;
pub mod storage;
