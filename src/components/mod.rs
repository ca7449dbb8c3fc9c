pub mod city_cards;
pub mod dashboard;
pub mod hero;
pub mod search_overlay;
pub mod status_panel;
pub mod timeline;
pub mod top_bar;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_cards::{CityCards, CityCardsProps};
pub use dashboard::{Dashboard, DashboardProps, ERROR_ICON};
pub use hero::{HeroWeather, HeroWeatherProps};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
pub use status_panel::{StatusPanel, StatusPanelProps};
pub use timeline::{WeekTimeline, WeekTimelineProps};
pub use top_bar::{TopBar, TopBarProps};
