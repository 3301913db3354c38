//! Kanban board UI
//!
//! A single-page kanban board that keeps its tasks and UI preferences in
//! browser `localStorage`. Boards are not stored; they are the distinct
//! `board` names across all tasks.
//!
//! * [`core`] - task model, configuration, errors, storage and repository
//! * [`features::kanban`] - board derivation, column rendering, modals and
//!   the controller tying them together, plus the Leptos components
//! * [`pages`] and [`app`] - page composition and the root component
//! * [`logger`] - `log` output to the browser console

pub mod app;
pub mod core;
pub mod features;
pub mod logger;
pub mod pages;
