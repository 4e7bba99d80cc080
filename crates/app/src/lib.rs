//! Application layer for listjoin.
//!
//! This crate provides:
//! - `App` - event loop, key handling and clipboard wiring
//! - `AppState` - raw input, delimiter selection and derived output
//! - `Action` - discrete user actions dispatched into the state
//! - `TextBuffer` - editable input and custom delimiter fields
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     listjoin (bin)                       │
//! │  main.rs - terminal setup, ui.rs - rendering             │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                listjoin-app (this crate)                 │
//! │  Event -> Action -> AppState::dispatch -> recompute      │
//! └──────────────────────────────────────────────────────────┘
//!            │                 │                 │
//!            ▼                 ▼                 ▼
//!      ┌───────────┐    ┌────────────┐    ┌───────────┐
//!      │ transform │    │ clipboard  │    │  config   │
//!      └───────────┘    └────────────┘    └───────────┘
//! ```

pub mod action;
pub mod app;
pub mod buffer;
pub mod event;
pub mod state;

pub use action::{Action, EditOp};
pub use app::{map_key, App};
pub use buffer::TextBuffer;
pub use event::{Event, EventHandler};
pub use state::{AppState, Focus, StatusKind, StatusMessage, ViewOffset};
