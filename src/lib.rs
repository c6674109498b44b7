//! draftpick - League of Legends draft assistant
//!
//! This library recommends champions for a role given the current draft.
//! An LLM suggests picks, the suggestions are parsed against the champion
//! roster, and each pick is kept only if the stats provider has a real build
//! for it.

pub mod api;
pub mod build;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod ids;
pub mod llm;
pub mod logging;
pub mod recommend;
pub mod stats;
