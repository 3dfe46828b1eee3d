/// Position of a page section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub active: &'static str,
}

/// Reading progress in percent. A page that cannot scroll reports 0.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// The line used to decide the active section: the viewport centre.
pub fn centre_line(scroll_y: f64, viewport_height: f64) -> f64 {
    scroll_y + viewport_height / 2.0
}

/// First section, in page order, containing `line`.
pub fn active_section(line: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    sections.iter().find(|s| s.contains(line)).map(|s| s.id)
}

/// State before the first measurement: nothing read, first section active.
pub fn initial_state(section_ids: &[&'static str]) -> ScrollState {
    ScrollState {
        progress: 0.0,
        active: section_ids.first().copied().unwrap_or_default(),
    }
}

/// Folds a new measurement into the previous state. The active section
/// sticks when the centre line falls between sections.
pub fn next_state(
    previous: ScrollState,
    scroll_y: f64,
    scroll_height: f64,
    viewport_height: f64,
    sections: &[SectionBounds],
) -> ScrollState {
    let line = centre_line(scroll_y, viewport_height);
    ScrollState {
        progress: progress_percent(scroll_y, scroll_height, viewport_height),
        active: active_section(line, sections).unwrap_or(previous.active),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "hero", top: 0.0, height: 800.0 },
            SectionBounds { id: "experiences", top: 800.0, height: 1000.0 },
            SectionBounds { id: "pricing", top: 1800.0, height: 900.0 },
            SectionBounds { id: "booking", top: 2900.0, height: 700.0 },
        ]
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress_percent(0.0, 3600.0, 800.0), 0.0);
        assert_eq!(progress_percent(2800.0, 3600.0, 800.0), 100.0);
        assert_eq!(progress_percent(1400.0, 3600.0, 800.0), 50.0);
        // overscroll on touch devices
        assert_eq!(progress_percent(-40.0, 3600.0, 800.0), 0.0);
        assert_eq!(progress_percent(3000.0, 3600.0, 800.0), 100.0);
    }

    #[test]
    fn test_progress_unscrollable_page() {
        assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn test_active_section_uses_viewport_centre() {
        let sections = page();
        assert_eq!(active_section(centre_line(0.0, 800.0), &sections), Some("hero"));
        // centre at exactly 800 belongs to the next section
        assert_eq!(active_section(centre_line(400.0, 800.0), &sections), Some("experiences"));
        assert_eq!(active_section(centre_line(1500.0, 800.0), &sections), Some("pricing"));
    }

    #[test]
    fn test_active_section_gap_keeps_previous() {
        let sections = page();
        let previous = ScrollState { progress: 0.0, active: "pricing" };
        // centre lands at 2800, in the gap between pricing and booking
        let state = next_state(previous, 2400.0, 3600.0, 800.0, &sections);
        assert_eq!(state.active, "pricing");
        assert!((state.progress - 2400.0 / 2800.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_match_wins_for_overlaps() {
        let sections = vec![
            SectionBounds { id: "a", top: 0.0, height: 500.0 },
            SectionBounds { id: "b", top: 100.0, height: 500.0 },
        ];
        assert_eq!(active_section(200.0, &sections), Some("a"));
        assert_eq!(active_section(550.0, &sections), Some("b"));
    }

    #[test]
    fn test_empty_and_zero_height() {
        assert_eq!(active_section(10.0, &[]), None);
        let sections = [SectionBounds { id: "flat", top: 10.0, height: 0.0 }];
        assert_eq!(active_section(10.0, &sections), None);
    }

    #[test]
    fn test_initial_state_starts_on_first_section() {
        let state = initial_state(&["hero", "experiences", "pricing"]);
        assert_eq!(state.active, "hero");
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn test_initial_state_without_sections() {
        assert_eq!(initial_state(&[]).active, "");
    }
}
