use iced::{Point, Rectangle, Size};

/// Width of the settings panel column.
pub(crate) const PANEL_WIDTH: f32 = 420.0;
/// Side of the square toggle button.
pub(crate) const TOGGLE_SIZE: f32 = 48.0;
/// Gap between the window/panel edge and the toggle button.
pub(crate) const TOGGLE_MARGIN: f32 = 12.0;

/// Bounds of the open settings panel inside a window area of `area` size.
///
/// The panel is a full-height column anchored to the left edge; it never
/// extends past the area.
pub(crate) fn panel_bounds(area: Size) -> Rectangle {
    Rectangle::new(
        Point::ORIGIN,
        Size::new(PANEL_WIDTH.min(area.width.max(0.0)), area.height.max(0.0)),
    )
}

/// Bounds of the toggle button for the given visibility.
pub(crate) fn toggle_bounds(area: Size, is_open: bool) -> Rectangle {
    let x = if is_open {
        panel_bounds(area).width + TOGGLE_MARGIN
    } else {
        TOGGLE_MARGIN
    };

    Rectangle::new(
        Point::new(x, TOGGLE_MARGIN),
        Size::new(TOGGLE_SIZE, TOGGLE_SIZE),
    )
}

/// Return whether a press at `position` belongs to the open panel.
///
/// The toggle button rides on the panel edge and counts as part of it, so
/// pressing it is left to the toggle action.
pub(crate) fn is_inside_open_panel(area: Size, position: Point) -> bool {
    panel_bounds(area).contains(position)
        || toggle_bounds(area, true).contains(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Size = Size::new(1280.0, 800.0);

    #[test]
    fn given_press_on_article_when_hit_testing_then_is_outside() {
        assert!(!is_inside_open_panel(AREA, Point::new(900.0, 400.0)));
    }

    #[test]
    fn given_press_inside_panel_column_when_hit_testing_then_is_inside() {
        assert!(is_inside_open_panel(AREA, Point::new(10.0, 790.0)));
        assert!(is_inside_open_panel(
            AREA,
            Point::new(PANEL_WIDTH - 1.0, 5.0)
        ));
    }

    #[test]
    fn given_press_on_open_toggle_when_hit_testing_then_is_inside() {
        let toggle = toggle_bounds(AREA, true);

        assert!(is_inside_open_panel(AREA, toggle.center()));
        assert!(toggle.x > PANEL_WIDTH);
    }

    #[test]
    fn given_area_narrower_than_panel_when_computing_bounds_then_panel_is_clamped()
     {
        let area = Size::new(300.0, 200.0);
        let bounds = panel_bounds(area);

        assert_eq!(bounds.width, 300.0);
        assert_eq!(bounds.height, 200.0);
    }

    #[test]
    fn given_closed_panel_when_computing_toggle_bounds_then_sits_at_left_margin()
    {
        let toggle = toggle_bounds(AREA, false);

        assert_eq!(toggle.x, TOGGLE_MARGIN);
        assert_eq!(toggle.y, TOGGLE_MARGIN);
    }
}
