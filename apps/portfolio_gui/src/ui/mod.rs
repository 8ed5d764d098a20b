//! UI layer: app shell, section bodies, themes and motion timelines.

pub mod app;
pub mod motion;
pub mod sections;
pub mod theme;

pub use app::PortfolioApp;
