pub mod drawer;
pub mod swipe;

pub use drawer::DrawerState;
pub use swipe::{SwipeTracker, SwipeVerdict};
