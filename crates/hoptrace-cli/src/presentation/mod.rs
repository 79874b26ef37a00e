//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable output contracts. The JSON mode prints them
//!   as-is, so hop rows keep the `hop`/`ip`/`rtt1..3` wire names.
//! * `presenters/`: pure conversions from runtime results into view models.
//! * `views/`: `Display` impls for the text mode.
//! * `renderers/`: picks JSON or text and paints the status line and
//!   follow-up commands.
//! * `formatters/`: small string helpers shared by the views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
