//! Terminal UI: the interactive puzzle view and its event loop.

mod app;
mod game_view;

pub use app::App;
