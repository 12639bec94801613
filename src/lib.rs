//! Real-time color transforms for colorblind users.
//!
//! The [`overlay`] module holds the per-pixel transform engine, the cursor
//! color sampler, the region-grab state machine and the capture pipeline that
//! drives them once per display refresh.

pub mod logger;
pub mod overlay;
