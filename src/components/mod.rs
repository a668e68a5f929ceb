pub mod app;
pub mod hero;
pub mod loading_indicator;
pub mod mobile_menu;
pub mod navbar;
pub mod portfolio_section;
pub mod project_card;
pub mod project_grid;
pub mod toggle_button;

pub use app::App;
