//! Reusable Dioxus RSX components for the dashboard panels.

mod allocation_slider;
mod card;
mod card_loading;
mod error_display;
mod panel_frame;
mod panel_header;
mod tab_bar;

pub use allocation_slider::AllocationSlider;
pub use card::{Card, DotList};
pub use card_loading::{CardLoading, Spinner};
pub use error_display::ErrorDisplay;
pub use panel_frame::PanelFrame;
pub use panel_header::PanelHeader;
pub use tab_bar::TabBar;
