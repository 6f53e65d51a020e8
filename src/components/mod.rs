pub mod app;
pub mod arc_scroll_view;

pub use app::App;
pub use arc_scroll_view::{ArcScrollView, ArcScrollViewProps};
