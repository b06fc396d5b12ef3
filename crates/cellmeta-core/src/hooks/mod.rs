//! Host services that extensions hook into.
//!
//! - [`AutoFillService`] - Runs [`AutoFillHook`]s when a fill gesture completes
//! - [`ClipboardService`] - Runs [`ClipboardHook`]s when cells are pasted
//! - [`Disposable`] - Handle returned by every registration

mod auto_fill;
mod clipboard;
mod disposable;
mod registry;

pub use auto_fill::{AutoFillHook, AutoFillService};
pub use clipboard::{ClipboardHook, ClipboardService};
pub use disposable::{Disposable, DisposableCollection};
