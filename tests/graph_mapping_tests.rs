use adorn::core::{Margin, Rect, Vector};
use adorn::graph::{
    AxisAttributes, CoordinateMapper, GraphLayout, calculate_chart_to_graph_point, scale_interval,
};
use adorn::render::RecordingSurfaceFactory;
use adorn::scene::AttributeHost;
use adorn::{Graph, GraphAttributes};
use approx::assert_abs_diff_eq;
use proptest::prelude::*;

fn graph_with_axes(x_data: &[f64], y_data: &[f64]) -> Graph<RecordingSurfaceFactory> {
    let mut graph = Graph::new(RecordingSurfaceFactory::default());
    graph
        .update_attributes(GraphAttributes {
            x_axis: Some(AxisAttributes::new(x_data)),
            y_axis: Some(AxisAttributes::new(y_data)),
            ..GraphAttributes::default()
        })
        .expect("axes");
    graph
}

#[test]
fn offset_scales_by_interval_and_label_spacing() {
    assert_abs_diff_eq!(calculate_chart_to_graph_point(5, 10.0, 20.0, 100.0), 40.0);
    assert_abs_diff_eq!(calculate_chart_to_graph_point(3, 50.0, 0.0, 300.0), 0.0);
    assert!(!calculate_chart_to_graph_point(0, 10.0, 1.0, 100.0).is_finite());
    assert!(!calculate_chart_to_graph_point(4, 0.0, 1.0, 100.0).is_finite());
}

#[test]
fn interval_uses_first_value_unless_zero() {
    assert_abs_diff_eq!(scale_interval(&[10.0, 0.0, 10.0, 20.0, 30.0]), 10.0);
    assert_abs_diff_eq!(scale_interval(&[0.0, 25.0, 50.0]), 25.0);
    assert_abs_diff_eq!(scale_interval(&[7.0]), 7.0);
    assert!(scale_interval(&[]).is_nan());
}

#[test]
fn graph_maps_points_from_bottom_left_corner() {
    let axis = [10.0, 0.0, 10.0, 20.0, 30.0];
    let mut graph = graph_with_axes(&axis, &axis);
    graph.calculate_area(100.0, 50.0);

    let point = graph.chart_to_graph_point(20.0, 10.0).expect("laid out");
    assert_abs_diff_eq!(point.x, 40.0);
    assert_abs_diff_eq!(point.y, 40.0);
}

#[test]
fn graph_without_area_has_no_mapping() {
    let graph = graph_with_axes(&[1.0], &[1.0]);
    assert_eq!(graph.chart_to_graph_point(1.0, 1.0), None);
    assert!(graph.chart_to_graph_points(&[[1.0, 1.0]]).is_empty());
}

#[test]
fn margin_insets_plotting_rect_without_compounding() {
    let mut graph = graph_with_axes(&[0.0, 50.0, 100.0], &[0.0, 50.0, 100.0]);
    graph
        .update_attributes(GraphAttributes {
            margin: Some(Margin::uniform(10.0)),
            ..GraphAttributes::default()
        })
        .expect("margin");
    graph.calculate_area(300.0, 150.0);
    graph.calculate_area(300.0, 150.0);
    assert_eq!(graph.graph_rect(), Some(Rect::new(10.0, 10.0, 280.0, 130.0)));

    graph
        .update_attributes(GraphAttributes {
            margin: Some(Margin::new(20.0, 0.0, 0.0, 30.0)),
            ..GraphAttributes::default()
        })
        .expect("new margin");
    assert_eq!(graph.graph_rect(), Some(Rect::new(20.0, 0.0, 280.0, 120.0)));

    let origin = graph.chart_to_graph_point(0.0, 0.0).expect("laid out");
    assert_eq!(origin, Vector::new(20.0, 120.0));
}

#[test]
fn axis_positions_follow_plotting_rect() {
    let layout = GraphLayout::new(Rect::new(5.0, 10.0, 100.0, 50.0), &[1.0], &[1.0]);

    let x_axis = layout.x_axis_position();
    assert_eq!(x_axis.start, Vector::new(5.0, 60.0));
    assert_eq!(x_axis.end, Vector::new(105.0, 60.0));
    assert_abs_diff_eq!(x_axis.length(), 100.0);

    let y_axis = layout.y_axis_position();
    assert_eq!(y_axis.end, Vector::new(5.0, 10.0));
    let direction = y_axis.direction();
    assert_abs_diff_eq!(direction.x, 0.0);
    assert_abs_diff_eq!(direction.y, -1.0, epsilon = 1e-12);
}

proptest! {
    #[test]
    fn mapping_is_monotonic_along_both_axes(
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0,
    ) {
        let axis = [0.0, 100.0, 200.0, 300.0];
        let layout = GraphLayout::new(Rect::new(0.0, 0.0, 400.0, 200.0), &axis, &axis);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_point = layout.chart_to_graph_point(low, low);
        let high_point = layout.chart_to_graph_point(high, high);

        prop_assert!(low_point.x <= high_point.x);
        prop_assert!(low_point.y >= high_point.y);
    }
}
