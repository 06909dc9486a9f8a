//! # media-carousel
//!
//! Auto-advancing media card carousel with keyboard, swipe and tilt support.
//!
//! This crate provides platform-agnostic state and logic for:
//! - Tracking the active item and the display state of its neighbours
//! - Auto-advancing on a deterministic, caller-driven tick
//! - Mapping clicks, arrow keys and swipes to navigation
//! - Computing a pointer-driven 3D tilt for the active item
//! - Binding all of the above to a page (with optional web support)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for config and view types
//! - `toml` - Load [`CarouselConfig`] from TOML
//! - `web` - Enable web/WASM DOM binding
//!
//! ## Example
//!
//! ```rust
//! use media_carousel::{Carousel, CarouselConfig, CarouselEvent, ItemState, Key};
//!
//! let mut carousel = Carousel::new(5, CarouselConfig::default());
//!
//! // Feed input from your event loop
//! carousel.handle(CarouselEvent::Key(Key::ArrowRight));
//! assert_eq!(carousel.current_index(), 1);
//!
//! // Drive auto-advance from your timer (every `interval_ms()`)
//! carousel.handle(CarouselEvent::Tick);
//!
//! // Render the result
//! let view = carousel.view();
//! assert_eq!(view.items[1], ItemState::Active);
//! assert_eq!(view.items[0], ItemState::Previous);
//! ```

mod carousel;
mod config;
mod input;
pub mod render;
mod slide;
mod tilt;
mod timer;

pub use carousel::Carousel;
pub use config::{CarouselConfig, Selectors, TiltConfig};
pub use input::{CarouselEvent, Key, SwipeDirection, SwipeTracker};
pub use render::CarouselView;
pub use slide::{wrap_index, ItemSet, ItemState};
pub use tilt::{rotation_for, ItemRect, ItemTransform, Rotation, TiltEffect};
pub use timer::{reschedule, AutoAdvance, Reschedule, TickOutcome, TimerHandle, TimerState};

#[cfg(feature = "web")]
pub use render::web::WebCarousel;
