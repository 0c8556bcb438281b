#![doc(test(attr(deny(warnings))))]

//! Intake Core implements the multi-stage registration wizard that powers
//! animal intake across the facility suite: the stage catalog, conditional
//! field dependencies, validation gating, navigation state, and final record
//! assembly.

pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod locale;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Intake Core tracing initialized.");
    });
}
