//! # TUI Components
//!
//! This module contains all UI components for the terminal host.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: top status line
//! - `QuickActionBar`: F-key shortcut row above the composer
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ComposerBox`: the message composer's text area
//! - `OutboxState` / `OutboxView`: scrollable record of sink invocations
//! - `FilePickerState` / `FilePicker`: attachment selection overlay
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! QuickActionBar::new(box.composer.quick_actions(), disabled).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top status bar)
//! ├── quick_action_bar.rs (Quick action row)
//! ├── outbox.rs           (Sink log)
//! ├── file_picker.rs      (Attachment overlay)
//! └── composer_box/       (Auto-growing text area)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod composer_box;
pub mod file_picker;
pub mod outbox;
pub mod quick_action_bar;
pub use composer_box::{ComposerBox, ComposerEvent, WrapProbe};
pub use file_picker::{FilePicker, FilePickerEvent, FilePickerState};
pub use outbox::{Outbox, OutboxKind, OutboxState, OutboxView};
pub use quick_action_bar::QuickActionBar;
