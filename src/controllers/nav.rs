//! Nav Scroll Controller
//!
//! Sticky navbar: hides the fixed nav while scrolling down, reveals it while
//! scrolling up, and releases it once back at the top.

pub const FIXED_CLASS: &str = "is-fixed";
pub const VISIBLE_CLASS: &str = "is-visible";

/// Class membership of the nav element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavClasses {
    pub fixed: bool,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct NavScroll {
    header_height: f64,
    scroll_pos: f64,
}

impl NavScroll {
    /// `header_height` is measured once, when the page is bound
    pub fn new(header_height: f64) -> Self {
        Self {
            header_height,
            scroll_pos: 0.0,
        }
    }

    /// `current_top` is how far the body has scrolled (positive going down)
    pub fn on_scroll(&mut self, current_top: f64, classes: NavClasses) -> NavClasses {
        let next = if current_top < self.scroll_pos {
            if current_top > 0.0 && classes.fixed {
                NavClasses {
                    visible: true,
                    ..classes
                }
            } else {
                log::trace!("nav released at top {}", current_top);
                NavClasses::default()
            }
        } else {
            NavClasses {
                visible: false,
                fixed: classes.fixed || current_top > self.header_height,
            }
        };
        self.scroll_pos = current_top;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: NavClasses = NavClasses {
        fixed: true,
        visible: false,
    };

    #[test]
    fn test_fixes_after_header_scrolled_past() {
        let mut nav = NavScroll::new(100.0);
        let classes = nav.on_scroll(50.0, NavClasses::default());
        assert_eq!(classes, NavClasses::default());
        let classes = nav.on_scroll(150.0, classes);
        assert_eq!(classes, FIXED);
        // 120 is above the last recorded position, so this is an up-scroll
        let classes = nav.on_scroll(120.0, classes);
        assert_eq!(classes, NavClasses { fixed: true, visible: true });
    }

    #[test]
    fn test_scrolling_up_reveals_fixed_nav() {
        let mut nav = NavScroll::new(100.0);
        let classes = nav.on_scroll(400.0, NavClasses::default());
        let classes = nav.on_scroll(300.0, classes);
        assert_eq!(
            classes,
            NavClasses {
                fixed: true,
                visible: true
            }
        );
    }

    #[test]
    fn test_scrolling_down_hides_again() {
        let mut nav = NavScroll::new(100.0);
        let classes = nav.on_scroll(400.0, NavClasses::default());
        let classes = nav.on_scroll(300.0, classes);
        let classes = nav.on_scroll(350.0, classes);
        assert_eq!(classes, FIXED);
    }

    #[test]
    fn test_back_at_top_releases_nav() {
        let mut nav = NavScroll::new(100.0);
        let classes = nav.on_scroll(400.0, NavClasses::default());
        let classes = nav.on_scroll(0.0, classes);
        assert_eq!(classes, NavClasses::default());
    }

    #[test]
    fn test_scrolling_up_without_fixed_clears() {
        let mut nav = NavScroll::new(100.0);
        let classes = nav.on_scroll(80.0, NavClasses::default());
        let classes = nav.on_scroll(40.0, classes);
        assert_eq!(classes, NavClasses::default());
    }
}
