use super::Region;

use geo::{line_string, point};

#[test]
fn disc_covers_its_own_center() {
    let center = point! { x: 450_000.0, y: 85_000.0 };
    let region = Region::disc(center, 5_000.0);

    assert!(region.covers_point(&center));
    assert_eq!(region.radius(), 5_000.0);
}

#[test]
fn boundary_point_counts_as_inside() {
    let region = Region::disc(point! { x: 0.0, y: 0.0 }, 1_000.0);

    // A vertex of the boundary ring itself.
    assert!(region.covers_point(&point! { x: 1_000.0, y: 0.0 }));
}

#[test]
fn outside_point_is_rejected() {
    let region = Region::disc(point! { x: 0.0, y: 0.0 }, 1_000.0);

    assert!(!region.covers_point(&point! { x: 1_200.0, y: 0.0 }));
}

#[test]
fn interior_line_is_covered() {
    let region = Region::disc(point! { x: 0.0, y: 0.0 }, 1_000.0);
    let line = line_string![(x: -300.0, y: 0.0), (x: 0.0, y: 150.0), (x: 300.0, y: 0.0)];

    assert!(region.covers_line(&line));
}

#[test]
fn crossing_line_is_rejected_not_clipped() {
    let region = Region::disc(point! { x: 0.0, y: 0.0 }, 1_000.0);

    // Starts inside, ends well outside; must be dropped entirely.
    let crossing = line_string![(x: 0.0, y: 0.0), (x: 2_500.0, y: 0.0)];
    assert!(!region.covers_line(&crossing));

    let outside = line_string![(x: 2_000.0, y: 0.0), (x: 3_000.0, y: 0.0)];
    assert!(!region.covers_line(&outside));
}

#[test]
fn degenerate_region_contains_nothing() {
    let center = point! { x: 10.0, y: 10.0 };

    for radius in [0.0, -5.0] {
        let region = Region::disc(center, radius);
        assert!(region.is_degenerate());
        assert!(!region.covers_point(&center));
        assert!(!region.covers_line(&line_string![(x: 10.0, y: 10.0), (x: 10.0, y: 10.0)]));
    }
}
