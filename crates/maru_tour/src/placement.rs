//! Card placement geometry.

use maru_core::{Placement, Point, Rect, Size, Viewport};
use maru_narrative::TourConfig;

/// Where the tour card goes for a resolved target.
///
/// The preferred placement is computed first, with `gap` between card and
/// target. `Right` flips to the left-hand position when the card would run
/// past the viewport's right edge. The result is then pushed inside the
/// viewport inset; the right and bottom edges win over the left and top
/// when the card is larger than the space available.
///
/// ```
/// use maru_core::{Placement, Rect, Size, Viewport};
/// use maru_narrative::TourConfig;
/// use maru_tour::card_position;
///
/// let target = Rect::new(1300.0, 200.0, 100.0, 50.0);
/// let card = Size::new(300.0, 180.0);
/// let at = card_position(target, card, Viewport::new(1440.0, 900.0), Placement::Right, &TourConfig::default());
///
/// // 1300 + 100 + 20 would overflow, so the card sits left of the target.
/// assert_eq!(at.left, 1300.0 - 300.0 - 20.0);
/// assert_eq!(at.top, 200.0);
/// ```
pub fn card_position(
    target: Rect,
    card: Size,
    viewport: Viewport,
    placement: Placement,
    config: &TourConfig,
) -> Point {
    let gap = config.card_gap;
    let inset = config.edge_inset;

    let (mut left, mut top) = match placement {
        Placement::Right => {
            let right = target.right() + gap;
            if right + card.width > viewport.width {
                (target.left - card.width - gap, target.top)
            } else {
                (right, target.top)
            }
        }
        Placement::Left => (target.left - card.width - gap, target.top),
        Placement::Top => (
            target.left + target.width / 2.0 - card.width / 2.0,
            target.top - card.height - gap,
        ),
        Placement::TopLeft => (
            target.left - card.width + gap,
            target.top - card.height - gap,
        ),
        Placement::Center => (
            target.left + target.width / 2.0 - card.width / 2.0,
            target.top + target.height / 2.0 - card.height / 2.0,
        ),
        Placement::Bottom => (target.left, target.bottom() + gap),
    };

    left = left.max(inset);
    top = top.max(inset);
    if left + card.width > viewport.width - inset {
        left = viewport.width - card.width - inset;
    }
    if top + card.height > viewport.height - inset {
        top = viewport.height - card.height - inset;
    }

    Point::new(left, top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1440.0,
        height: 900.0,
    };
    const CARD: Size = Size {
        width: 300.0,
        height: 180.0,
    };

    fn place(target: Rect, placement: Placement) -> Point {
        card_position(target, CARD, VIEWPORT, placement, &TourConfig::default())
    }

    #[test]
    fn right_fits() {
        let at = place(Rect::new(100.0, 200.0, 400.0, 300.0), Placement::Right);
        assert_eq!(at, Point::new(520.0, 200.0));
    }

    #[test]
    fn bottom_is_the_default_branch() {
        let at = place(Rect::new(100.0, 200.0, 400.0, 300.0), Placement::Bottom);
        assert_eq!(at, Point::new(100.0, 520.0));
    }

    #[test]
    fn top_centers_horizontally() {
        let at = place(Rect::new(144.0, 840.0, 1152.0, 4.0), Placement::Top);
        assert_eq!(at, Point::new(144.0 + 576.0 - 150.0, 840.0 - 180.0 - 20.0));
    }

    #[test]
    fn top_left_hangs_off_the_target() {
        let at = place(Rect::new(1360.0, 30.0, 48.0, 48.0), Placement::TopLeft);
        // Above the viewport, so the inset pulls it down.
        assert_eq!(at, Point::new(1360.0 - 300.0 + 20.0, 20.0));
    }

    #[test]
    fn center_over_target() {
        let at = place(Rect::new(0.0, 0.0, 1440.0, 900.0), Placement::Center);
        assert_eq!(at, Point::new(570.0, 360.0));
    }

    #[test]
    fn left_is_clamped_to_the_inset() {
        let at = place(Rect::new(50.0, 5.0, 100.0, 100.0), Placement::Left);
        assert_eq!(at, Point::new(20.0, 20.0));
    }

    #[test]
    fn bottom_edge_wins() {
        let at = place(Rect::new(100.0, 800.0, 100.0, 80.0), Placement::Bottom);
        assert_eq!(at.top, 900.0 - 180.0 - 20.0);
    }

    #[test]
    fn card_never_passes_the_right_edge() {
        for x in (0..1440).step_by(37) {
            for placement in [
                Placement::Right,
                Placement::Left,
                Placement::Top,
                Placement::TopLeft,
                Placement::Center,
                Placement::Bottom,
            ] {
                let at = place(Rect::new(x as f64, 300.0, 120.0, 60.0), placement);
                assert!(at.left + CARD.width <= VIEWPORT.width - 20.0, "{placement} at {x}");
                assert!(at.left >= 20.0, "{placement} at {x}");
            }
        }
    }
}
