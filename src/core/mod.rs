//! # Core Composer Logic
//!
//! This module contains the message composer's state machine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Draft (text)         │
//!                    │  • MeasuredHeight       │
//!                    │  • MessageComposer      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ HeightProbe│      │   Sinks    │
//!     │  Adapter   │      │ (injected) │      │ (callbacks)│
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`composer`]: `MessageComposer`, its options, sinks and outcomes
//! - [`draft`]: the `Draft` text and its `DraftState`
//! - [`height`]: `HeightProbe` and the clamped `MeasuredHeight`
//! - [`attachment`]: `FileHandle`, `AttachmentBatch`, `FileSelection`
//! - [`quick_action`]: `QuickAction` records and their unique-id set
//! - [`config`]: `~/.draftbox/config.toml` loading and resolution

pub mod attachment;
pub mod composer;
pub mod config;
pub mod draft;
pub mod height;
pub mod quick_action;

pub use composer::{
    ComposerError, ComposerOptions, ComposerSinks, Effect, Key, KeyOutcome, MessageComposer,
    SinkError,
};
