use crate::state::DrawerState;

/// Horizontal band at the left screen edge where an opening swipe must start.
pub const EDGE_ZONE_PX: f64 = 40.0;
/// Minimum horizontal displacement for a touch sequence to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Displacement tracker for a single touch sequence. One tracker lives for
/// the whole mounted lifetime; `begin` resets it when a new sequence starts.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f64,
    start_y: f64,
    current_x: f64,
    current_y: f64,
}

/// What a finished touch sequence asks of the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeVerdict {
    OpenDrawer,
    CloseDrawer,
    Stay,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start_x = x;
        self.start_y = y;
        self.current_x = x;
        self.current_y = y;
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.current_x = x;
        self.current_y = y;
    }

    /// Evaluated exactly once, at touchend, over the full start-to-end
    /// displacement. Intermediate moves never change drawer state.
    pub fn verdict(&self, drawer: DrawerState) -> SwipeVerdict {
        let dx = self.current_x - self.start_x;
        let dy = (self.current_y - self.start_y).abs();
        match drawer {
            // Open: rightward swipe that starts in the edge zone and is more
            // horizontal than vertical. A vertical scroll that happens to
            // begin near the edge must not open the drawer.
            DrawerState::Closed => {
                if self.start_x < EDGE_ZONE_PX && dx > SWIPE_THRESHOLD_PX && dx > dy {
                    SwipeVerdict::OpenDrawer
                } else {
                    SwipeVerdict::Stay
                }
            }
            // Close: any sufficiently leftward swipe. The open drawer sits
            // against the edge, so no origin constraint applies here.
            DrawerState::Open => {
                if dx < -SWIPE_THRESHOLD_PX {
                    SwipeVerdict::CloseDrawer
                } else {
                    SwipeVerdict::Stay
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(start: (f64, f64), end: (f64, f64)) -> SwipeTracker {
        let mut t = SwipeTracker::default();
        t.begin(start.0, start.1);
        t.update(end.0, end.1);
        t
    }

    #[test]
    fn edge_swipe_right_opens() {
        let t = sequence((10.0, 200.0), (120.0, 205.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::OpenDrawer);
    }

    #[test]
    fn vertical_scroll_from_edge_does_not_open() {
        // dx = 110 but dy = 150 dominates, so this is a scroll, not a swipe.
        let t = sequence((10.0, 100.0), (120.0, 250.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
    }

    #[test]
    fn swipe_outside_edge_zone_never_opens() {
        let t = sequence((40.0, 200.0), (300.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
        let t = sequence((200.0, 200.0), (350.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
    }

    #[test]
    fn short_swipe_does_not_open() {
        // Exactly at the threshold is not enough; the comparison is strict.
        let t = sequence((10.0, 200.0), (60.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
    }

    #[test]
    fn leftward_swipe_closes_regardless_of_origin() {
        let t = sequence((350.0, 200.0), (280.0, 260.0));
        assert_eq!(t.verdict(DrawerState::Open), SwipeVerdict::CloseDrawer);
        let t = sequence((30.0, 200.0), (-40.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Open), SwipeVerdict::CloseDrawer);
    }

    #[test]
    fn short_leftward_swipe_does_not_close() {
        let t = sequence((300.0, 200.0), (260.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Open), SwipeVerdict::Stay);
    }

    #[test]
    fn verdicts_are_gated_on_current_state() {
        // A perfect opening swipe while already open changes nothing.
        let t = sequence((10.0, 200.0), (120.0, 205.0));
        assert_eq!(t.verdict(DrawerState::Open), SwipeVerdict::Stay);
        // A perfect closing swipe while closed changes nothing.
        let t = sequence((300.0, 200.0), (100.0, 200.0));
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
    }

    #[test]
    fn new_sequence_resets_previous_displacement() {
        let mut t = SwipeTracker::default();
        t.begin(10.0, 100.0);
        t.update(300.0, 100.0);
        t.begin(200.0, 100.0);
        // No move events yet: zero displacement, so nothing happens.
        assert_eq!(t.verdict(DrawerState::Closed), SwipeVerdict::Stay);
        assert_eq!(t.verdict(DrawerState::Open), SwipeVerdict::Stay);
    }
}
