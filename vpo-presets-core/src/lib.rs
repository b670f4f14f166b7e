#![doc = "vpo-presets-core: core logic library for gen-vpo-sfizz-presets."]

//! This crate contains all behaviour for turning Virtual Playing Orchestra SFZ
//! instruments into sfizz LV2 preset bundles. The CLI crate only parses
//! arguments and wires the pieces below together.
//!
//! # Usage
//! Build a [`config::PresetConfig`], pick a [`contract::Confirmer`] and call
//! [`generate::generate_presets`].

pub mod bundle;
pub mod config;
pub mod contract;
pub mod discover;
pub mod generate;
pub mod preset;
pub mod template;
