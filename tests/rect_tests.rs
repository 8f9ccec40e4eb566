use adorn::core::{Margin, Rect, Vector};

#[test]
fn contains_is_half_open() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!rect.contains(10.0, 5.0));
    assert!(!rect.contains(5.0, 10.0));
    assert!(rect.contains(0.0, 0.0));
    assert!(rect.contains(9.999, 9.999));
    assert!(rect.contains_point(Vector::new(5.0, 5.0)));
}

#[test]
fn union_and_intersect_follow_edges() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 15.0, 15.0));
    assert_eq!(a.intersect(&b), Rect::new(5.0, 5.0, 5.0, 5.0));
    assert!(a.intersects(&b));
}

#[test]
fn disjoint_intersection_has_empty_area() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(20.0, 20.0, 5.0, 5.0);
    assert!(!a.intersects(&b));
    assert!(a.intersect(&b).is_empty_area());
}

#[test]
fn edge_setters_keep_the_opposite_edge() {
    let mut rect = Rect::new(10.0, 10.0, 20.0, 20.0);
    rect.set_right(40.0);
    assert_eq!((rect.left(), rect.width()), (10.0, 30.0));

    rect.set_left(0.0);
    assert_eq!((rect.right(), rect.width()), (40.0, 40.0));

    rect.set_bottom(50.0);
    assert_eq!((rect.top(), rect.height()), (10.0, 40.0));

    rect.set_top(20.0);
    assert_eq!((rect.bottom(), rect.height()), (50.0, 30.0));
}

#[test]
fn from_bounds_and_centers_agree() {
    let rect = Rect::from_bounds(10.0, 20.0, 30.0, 60.0);
    assert!(rect.equal(10.0, 20.0, 20.0, 40.0));
    assert_eq!(rect.center_x(), 20.0);
    assert_eq!(rect.center_y(), 40.0);

    let mut moved = rect;
    moved.set_center_x(0.0);
    moved.set_center_y(0.0);
    assert_eq!((moved.x(), moved.y()), (-10.0, -20.0));
}

#[test]
fn margin_insets_each_edge() {
    let rect = Rect::new(0.0, 0.0, 300.0, 150.0).with_margin(&Margin::new(10.0, 5.0, 20.0, 15.0));
    assert_eq!(rect, Rect::new(10.0, 5.0, 270.0, 130.0));

    let mut uniform = Rect::new(0.0, 0.0, 100.0, 100.0);
    uniform.set_margin(10.0);
    assert_eq!(uniform, Rect::new(10.0, 10.0, 80.0, 80.0));
}

#[test]
fn inflate_and_bounds_helpers() {
    let mut rect = Rect::new(10.0, 10.0, 10.0, 10.0);
    rect.inflate(5.0, 2.0);
    assert_eq!(rect, Rect::new(5.0, 8.0, 20.0, 14.0));

    rect.increase_bounds(5.0, 8.0, 0.0, 0.0);
    assert_eq!((rect.left(), rect.top()), (0.0, 0.0));

    rect.decrease_bounds(0.0, 0.0, 5.0, 2.0);
    assert_eq!((rect.right(), rect.bottom()), (20.0, 20.0));

    rect.translate(1.0, 1.0);
    rect.scale(2.0, 0.5);
    assert_eq!(rect, Rect::new(1.0, 1.0, 40.0, 10.0));
}

#[test]
fn contains_rect_and_empty_checks() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 90.0, 90.0)));
    assert!(!outer.contains_rect(&Rect::new(10.0, 10.0, 91.0, 10.0)));

    assert!(Rect::default().is_empty());
    assert!(!Rect::new(0.0, 0.0, 1.0, 0.0).is_empty());
    assert!(Rect::new(0.0, 0.0, 1.0, 0.0).is_empty_area());
}

#[test]
fn offset_from_center_rebuilds_around_centre() {
    let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    rect.offset_from_center(1.0, 2.0, 3.0, 4.0);
    assert_eq!(rect, Rect::from_bounds(4.0, 3.0, 8.0, 9.0));
}
