use adorn::core::Margin;
use adorn::graph::AxisAttributes;
use adorn::render::RecordingSurfaceFactory;
use adorn::scene::{AttributeHost, Attributes, BaseObject, PaintSpec, StyleAttributes};
use adorn::{AdornError, Graph, GraphAttributes, LineChart, LineChartAttributes};

#[test]
fn update_replaces_only_supplied_fields() {
    let mut chart = LineChart::new(LineChartAttributes {
        data: Some(vec![[1.0, 2.0]]),
        marker_style: Some(StyleAttributes::fill(PaintSpec::solid("red"))),
        line_style: None,
    });

    chart
        .update_attributes(LineChartAttributes::with_data([[3.0, 4.0], [5.0, 6.0]]))
        .expect("update");

    assert_eq!(chart.data(), &[[3.0, 4.0], [5.0, 6.0]]);
    assert_eq!(
        chart.attributes().marker_style,
        Some(StyleAttributes::fill(PaintSpec::solid("red")))
    );
}

#[test]
fn nested_values_are_replaced_not_merged() {
    let mut base = BaseObject::new(GraphAttributes {
        x_axis: Some(
            AxisAttributes::new([1.0, 2.0]).with_style(StyleAttributes::fill(PaintSpec::solid("red"))),
        ),
        ..GraphAttributes::default()
    });

    let applied = base.update_attributes(GraphAttributes {
        x_axis: Some(AxisAttributes::new([5.0])),
        ..GraphAttributes::default()
    });

    assert_eq!(applied.as_slice(), &["xAxis"]);
    assert_eq!(base.attributes().x_axis, Some(AxisAttributes::new([5.0])));
}

#[test]
fn veto_blocks_selected_fields() {
    let mut graph = Graph::new(RecordingSurfaceFactory::default());
    graph
        .base_mut()
        .set_attribute_veto(|field, _current, update| {
            field != "margin" || update.margin.is_some_and(|margin| margin.left >= 0.0)
        });

    graph
        .update_attributes(GraphAttributes {
            margin: Some(Margin::new(-5.0, 0.0, 0.0, 0.0)),
            y_axis: Some(AxisAttributes::new([1.0])),
            ..GraphAttributes::default()
        })
        .expect("update");

    assert_eq!(graph.attributes().margin, None);
    assert_eq!(graph.attributes().y_axis, Some(AxisAttributes::new([1.0])));

    graph.base_mut().clear_attribute_veto();
    graph
        .update_attributes(GraphAttributes {
            margin: Some(Margin::new(-5.0, 0.0, 0.0, 0.0)),
            ..GraphAttributes::default()
        })
        .expect("update");
    assert_eq!(graph.attributes().margin, Some(Margin::new(-5.0, 0.0, 0.0, 0.0)));
}

#[test]
fn attribute_changing_allows_without_hook() {
    let base = BaseObject::<LineChartAttributes>::default();
    assert!(base.attribute_changing("data", &LineChartAttributes::default()));
}

#[test]
fn empty_bags_report_no_fields() {
    assert!(GraphAttributes::default().is_empty());
    assert!(!LineChartAttributes::with_data([[0.0, 0.0]]).is_empty());
}

#[test]
fn json_round_trip_preserves_supplied_fields() {
    let attributes = LineChartAttributes {
        data: Some(vec![[0.0, 1.5], [2.0, 3.0]]),
        line_style: Some(StyleAttributes::fill(PaintSpec::solid("#336699"))),
        marker_style: None,
    };

    let json = attributes.to_json_pretty().expect("serialize");
    assert!(json.contains("lineStyle"));
    assert!(!json.contains("markerStyle"));

    let restored = LineChartAttributes::from_json_str(&json).expect("parse");
    assert_eq!(restored, attributes);
}

#[test]
fn unknown_field_types_are_config_errors() {
    let err = LineChartAttributes::from_json_str(r#"{"data": "nope"}"#).expect_err("bad data");
    assert!(matches!(err, AdornError::Config(_)));
}
