use adorn::core::{Matrix, Vector};
use adorn::render::{DrawingSurface, RecordingSurface};
use adorn::scene::{AttributeHost, Drawable, Transform, TransformAttributes};
use approx::assert_abs_diff_eq;

fn assert_point_eq(actual: Vector, expected: Vector) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
}

#[test]
fn partial_updates_only_touch_supplied_dimensions() {
    let mut transform = Transform::default();
    transform
        .update_attributes(TransformAttributes::translate(5.0, 6.0))
        .expect("translate");
    transform
        .update_attributes(TransformAttributes::scale(2.0, 3.0))
        .expect("scale");

    let point = transform.matrix().transform_point(Vector::new(1.0, 1.0));
    assert_point_eq(point, Vector::new(7.0, 9.0));
}

#[test]
fn rotate_then_translate_differs_from_translate_then_rotate() {
    let rotate_first = Transform::new(TransformAttributes {
        rotate: Some(90.0),
        translate: Some(Vector::new(10.0, 0.0)),
        ..TransformAttributes::default()
    });

    let mut translate_first = Transform::new(TransformAttributes::translate(10.0, 0.0));
    translate_first
        .update_attributes(TransformAttributes::rotate(90.0))
        .expect("rotate");

    let origin = Vector::new(0.0, 0.0);
    assert_point_eq(
        rotate_first.matrix().transform_point(origin),
        Vector::new(0.0, -10.0),
    );
    assert_point_eq(
        translate_first.matrix().transform_point(origin),
        Vector::new(10.0, 0.0),
    );
}

#[test]
fn deltas_accumulate_across_updates() {
    let mut transform = Transform::new(TransformAttributes::rotate(30.0));
    transform
        .update_attributes(TransformAttributes::rotate(-30.0))
        .expect("rotate back");
    assert!(transform.matrix().is_identity_within(1e-12));

    transform
        .update_attributes(TransformAttributes::translate(1.0, 0.0))
        .expect("translate");
    transform
        .update_attributes(TransformAttributes::translate(1.0, 0.0))
        .expect("translate again");
    assert_abs_diff_eq!(transform.matrix().get(0, 2), 2.0, epsilon = 1e-9);
}

#[test]
fn prepend_acts_after_accumulated_transform() {
    let transform = Transform::new(TransformAttributes {
        scale: Some(Vector::new(2.0, 2.0)),
        prepend: Some(Matrix::translation(5.0, 0.0)),
        ..TransformAttributes::default()
    });
    let point = transform.matrix().transform_point(Vector::new(1.0, 1.0));
    assert_point_eq(point, Vector::new(7.0, 2.0));
}

#[test]
fn skew_shears_both_axes() {
    let transform = Transform::new(TransformAttributes::skew(0.5, 0.25));
    let matrix = transform.matrix();
    assert_eq!(matrix.get(1, 0), 0.5);
    assert_eq!(matrix.get(0, 1), 0.25);

    let point = matrix.transform_point(Vector::new(4.0, 2.0));
    assert_point_eq(point, Vector::new(4.5, 4.0));
}

#[test]
fn skew_x_alone_shears_y_by_x() {
    let matrix = Transform::new(TransformAttributes::skew(0.5, 0.0)).matrix();
    assert_eq!(matrix.get(1, 0), 0.5);
    assert_eq!(matrix.get(0, 1), 0.0);
    assert_eq!(
        matrix.affine_coefficients(),
        [1.0, 0.5, 0.0, 1.0, 0.0, 0.0]
    );
}

#[test]
fn redraw_composes_with_existing_surface_transform() {
    let mut surface = RecordingSurface::new(100, 100);
    surface.transform(1.0, 0.0, 0.0, 1.0, 3.0, 4.0);

    let transform = Transform::new(TransformAttributes::scale(2.0, 2.0));
    transform.redraw(&mut surface).expect("redraw");

    let point = surface
        .current_transform()
        .transform_point(Vector::new(1.0, 1.0));
    assert_point_eq(point, Vector::new(5.0, 6.0));
}

#[test]
fn vetoed_delta_is_not_folded() {
    let mut transform = Transform::default();
    transform
        .base_mut()
        .set_attribute_veto(|field, _current, _update| field != "rotate");
    transform
        .update_attributes(TransformAttributes {
            rotate: Some(45.0),
            translate: Some(Vector::new(1.0, 2.0)),
            ..TransformAttributes::default()
        })
        .expect("update");

    assert_eq!(transform.matrix(), Matrix::translation(1.0, 2.0));
    assert_eq!(transform.attributes().rotate, None);
    assert_eq!(transform.attributes().translate, Some(Vector::new(1.0, 2.0)));
}

#[test]
fn reset_returns_to_identity() {
    let mut transform = Transform::new(TransformAttributes::scale(3.0, 3.0));
    transform.reset();
    assert_eq!(transform.matrix(), Matrix::identity());
}

#[test]
fn transform_attributes_parse_vectors_and_matrices() {
    use adorn::scene::Attributes;

    let attributes = TransformAttributes::from_json_str(
        r#"{"rotate": 15, "translate": {"x": 1, "y": 2},
            "append": [[1, 0, 3], [0, 1, 4], [0, 0, 1]]}"#,
    )
    .expect("parse");
    assert_eq!(attributes.rotate, Some(15.0));
    assert_eq!(attributes.append, Some(Matrix::translation(3.0, 4.0)));
}
