#![forbid(unsafe_code)]

//! Interaction core of a dual-handle range selector.
//!
//! Picks a contiguous sub-range (a trim window) out of a fixed absolute
//! extent (a media duration) from pointer input. Rendering, text, and layout
//! belong to the host; this crate decides which handle a press grabs, how far
//! a drag moves it, and what the selected range is.
//!
//! # Primary responsibilities
//! - **geometry**: screen X ↔ normalized track position.
//! - **range**: normalized/committed value pairs, absolute conversion, the
//!   pixel minimum gap.
//! - **hit_test**: handle picking with overlap tie-break.
//! - **resolve**: per-move value resolution under the minimum gap.
//! - **selector**: the drag state machine consuming [`PointerEvent`]s.
//! - **notify**: press/move/release reports to one listener.
//!
//! # Example
//!
//! ```
//! use trimbar::{PointerEvent, RangeSelector, SelectorConfig, TrackLayout};
//!
//! let mut selector = RangeSelector::new(
//!     SelectorConfig::default()
//!         .with_bounds(0.0, 60_000.0)
//!         .with_min_span(5_000.0),
//! );
//! let layout = TrackLayout::new(600.0);
//!
//! // Grab the MIN handle at the left edge and drag it to the middle.
//! selector.handle_event(&PointerEvent::down(0, 0.0), &layout);
//! selector.handle_event(&PointerEvent::moved(0, 300.0), &layout);
//! selector.handle_event(&PointerEvent::up(0, 300.0), &layout);
//!
//! assert!(selector.selected_min() > 30_000.0);
//! assert_eq!(selector.selected_max(), 60_000.0);
//! ```
//!
//! Single-threaded and synchronous: every event is processed to completion,
//! including the listener call, before `handle_event` returns.

pub mod config;
pub mod event;
pub mod frame;
pub mod geometry;
pub mod hit_test;
pub mod logging;
pub mod notify;
pub mod persist;
pub mod range;
pub mod resolve;
pub mod selector;
pub mod session;

#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

pub use config::{ConfigError, SelectorConfig};
pub use event::{PointerEvent, PointerEventKind, PointerId, PointerSample};
pub use frame::{Extent, TrackFrame};
pub use geometry::{LayoutSource, TrackLayout};
pub use hit_test::{Handle, ThumbHitTester};
pub use notify::{RangeChange, RangeChangeKind, RangeChangeListener};
#[cfg(feature = "state-persistence")]
pub use persist::PersistError;
pub use persist::RangePersistState;
pub use range::{AbsoluteBounds, CommittedRange, NormalizedRange, RangeModel};
pub use selector::{Disposition, RangeSelector};
pub use session::{DragPhase, TouchSession};
