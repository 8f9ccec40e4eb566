use adorn::AdornError;
use adorn::core::Vector;
use adorn::render::{Color, DrawCommand, DrawingSurface, Paint, RecordingSurface};
use adorn::scene::{
    AttributeHost, CircleElement, Drawable, Element, ElementKind, Group, GroupAttributes,
    LabelElement, LineElement, PaintSpec, StrokeSpec, StyleAttributes, TransformAttributes,
};
use adorn::validation::ValidationMode;

#[test]
fn disallowed_element_leaves_group_unchanged() {
    let mut group = Group::new([ElementKind::Circle]);
    assert!(group
        .add(CircleElement::new(Vector::new(1.0, 1.0), 2.0))
        .expect("circle allowed"));

    let admitted = group
        .add(LineElement::new(Vector::new(0.0, 0.0), Vector::new(1.0, 1.0)))
        .expect("permissive drop");
    assert!(!admitted);
    assert_eq!(group.len(), 1);
}

#[test]
fn strict_group_reports_rejected_kind() {
    let mut group = Group::new([ElementKind::Line]).with_validation_mode(ValidationMode::Strict);
    let err = group
        .add(LabelElement::new("x", Vector::default()))
        .expect_err("label not allowed");
    assert!(matches!(err, AdornError::ElementRejected { kind: ElementKind::Label }));
    assert!(group.is_empty());
}

#[test]
fn group_redraws_in_insertion_order() {
    let mut group = Group::default();
    group
        .add(CircleElement::new(Vector::new(1.0, 1.0), 1.0))
        .expect("add");
    group
        .add(CircleElement::new(Vector::new(2.0, 2.0), 1.0))
        .expect("add");
    group
        .add(LabelElement::new("third", Vector::new(3.0, 3.0)))
        .expect("add");

    let mut surface = RecordingSurface::new(50, 50);
    group.redraw(&mut surface).expect("redraw");

    assert_eq!(
        surface.arc_centers(),
        vec![Vector::new(1.0, 1.0), Vector::new(2.0, 2.0)]
    );
    assert_eq!(surface.texts(), vec![("third".to_owned(), Vector::new(3.0, 3.0))]);
    let kinds: Vec<ElementKind> = group.elements().map(|element| element.kind()).collect();
    assert_eq!(
        kinds,
        vec![ElementKind::Circle, ElementKind::Circle, ElementKind::Label]
    );
}

#[test]
fn nested_groups_are_elements() {
    let mut inner = Group::default();
    inner
        .add(CircleElement::new(Vector::new(5.0, 5.0), 1.0))
        .expect("add");
    let mut outer = Group::new([ElementKind::Group]);
    assert!(outer.add(inner).expect("group allowed"));

    let mut surface = RecordingSurface::new(20, 20);
    outer.redraw(&mut surface).expect("redraw");
    assert_eq!(surface.arc_centers().len(), 1);
}

#[test]
fn allow_list_can_be_replaced_through_attributes() {
    let mut group = Group::new([ElementKind::Circle]);
    group
        .update_attributes(GroupAttributes {
            allowed_kinds: Some(vec![ElementKind::Line]),
        })
        .expect("update");

    assert!(group.is_allowed(ElementKind::Line));
    assert!(!group.is_allowed(ElementKind::Circle));
}

#[test]
fn unstyled_leaves_use_default_paint_operations() {
    let mut surface = RecordingSurface::new(20, 20);
    CircleElement::new(Vector::new(5.0, 5.0), 2.0)
        .redraw(&mut surface)
        .expect("circle");
    LineElement::new(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0))
        .redraw(&mut surface)
        .expect("line");

    let fills = surface.count(|command| matches!(command, DrawCommand::Fill { .. }));
    let strokes = surface.count(|command| matches!(command, DrawCommand::Stroke { .. }));
    assert_eq!((fills, strokes), (1, 1));
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn styled_leaf_restores_surface_state() {
    let line = LineElement::new(Vector::new(0.0, 0.0), Vector::new(10.0, 10.0)).with_style(
        StyleAttributes::stroke(StrokeSpec::new(PaintSpec::solid("red")).with_line_width(4.0)),
    );
    let mut surface = RecordingSurface::new(20, 20);

    line.redraw(&mut surface).expect("redraw");

    let stroke_width = surface.commands().iter().find_map(|command| match command {
        DrawCommand::Stroke { state } => Some(state.line_width),
        _ => None,
    });
    assert_eq!(stroke_width, Some(4.0));
    assert_eq!(surface.paint_state().line_width, 1.0);
    assert_eq!(surface.paint_state().stroke_style, Paint::Solid(Color::BLACK));
}

#[test]
fn leaf_transform_is_scoped_to_the_leaf() {
    let circle = CircleElement::new(Vector::new(0.0, 0.0), 1.0)
        .with_transform(TransformAttributes::translate(10.0, 20.0));
    let mut surface = RecordingSurface::new(50, 50);

    circle.redraw(&mut surface).expect("redraw");

    let coefficients = surface.commands().iter().find_map(|command| match command {
        DrawCommand::Transform { coefficients } => Some(*coefficients),
        _ => None,
    });
    assert_eq!(coefficients, Some([1.0, 0.0, 0.0, 1.0, 10.0, 20.0]));
    assert!(surface.current_transform().is_identity_within(0.0));
}

#[test]
fn labels_take_their_style_fill_paint() {
    let label = LabelElement::new("hello", Vector::new(4.0, 8.0))
        .with_style(StyleAttributes::fill(PaintSpec::solid("blue")));
    let mut surface = RecordingSurface::new(20, 20);

    label.redraw(&mut surface).expect("redraw");

    let Some(DrawCommand::FillText { text, state, .. }) = surface
        .commands()
        .iter()
        .find(|command| matches!(command, DrawCommand::FillText { .. }))
    else {
        panic!("label should emit fill_text");
    };
    assert_eq!(text, "hello");
    assert_eq!(state.fill_style, Paint::Solid(Color::rgb(0.0, 0.0, 1.0)));
    assert_eq!(surface.count(|command| matches!(command, DrawCommand::Fill { .. })), 0);
}

#[test]
fn negative_radius_is_rejected_only_in_strict_mode() {
    let mut surface = RecordingSurface::new(20, 20);
    CircleElement::new(Vector::new(5.0, 5.0), -1.0)
        .redraw(&mut surface)
        .expect("permissive draws anyway");
    assert_eq!(surface.arc_centers().len(), 1);

    let strict = CircleElement::new(Vector::new(5.0, 5.0), -1.0)
        .with_validation_mode(ValidationMode::Strict);
    assert!(matches!(
        strict.redraw(&mut surface),
        Err(AdornError::InvalidData(_))
    ));
}
