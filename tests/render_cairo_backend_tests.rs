#![cfg(feature = "cairo-backend")]

use adorn::core::Vector;
use adorn::graph::AxisAttributes;
use adorn::render::{CairoSurface, CairoSurfaceFactory, DrawingSurface, Paint, PatternRepeat};
use adorn::scene::{AttributeHost, CircleElement, Drawable, PaintSpec, StyleAttributes};
use adorn::{AdornError, Graph, GraphAttributes, HostRegion, LineChart, LineChartAttributes};

#[test]
fn zero_sized_surface_is_rejected() {
    let err = CairoSurface::new(0, 10).expect_err("zero width");
    assert!(matches!(
        err,
        AdornError::InvalidSurface {
            width: 0,
            height: 10
        }
    ));
}

#[test]
fn graph_draw_updates_backend_stats() {
    let mut graph = Graph::new(CairoSurfaceFactory);
    graph
        .update_attributes(GraphAttributes {
            x_axis: Some(AxisAttributes::new([0.0, 50.0, 100.0])),
            y_axis: Some(AxisAttributes::new([0.0, 50.0, 100.0])),
            host: Some(HostRegion::container(300, 150)),
            ..GraphAttributes::default()
        })
        .expect("attach");
    graph.add_chart(LineChart::new(LineChartAttributes::with_data([
        [0.0, 0.0],
        [50.0, 50.0],
        [100.0, 100.0],
    ])));

    graph.redraw().expect("redraw");

    let surface = graph.canvas().surface().expect("attached");
    assert_eq!(surface.size(), (300, 150));
    let stats = surface.stats();
    assert_eq!(stats.texts, 6);
    assert_eq!(stats.fills, 3);
    assert_eq!(stats.strokes, 2);
}

#[test]
fn patterns_resolve_only_registered_images() {
    let mut surface = CairoSurface::new(16, 16).expect("surface");
    assert!(surface.create_pattern("tile", PatternRepeat::Repeat).is_none());

    let tile = cairo::ImageSurface::create(cairo::Format::ARgb32, 2, 2).expect("tile");
    surface.register_pattern_image("tile", tile);
    assert!(surface.create_pattern("tile", PatternRepeat::Repeat).is_some());
}

#[test]
fn styled_circle_fills_once() {
    let mut surface = CairoSurface::new(32, 32).expect("surface");
    CircleElement::new(Vector::new(16.0, 16.0), 8.0)
        .with_style(StyleAttributes::fill(PaintSpec::solid("purple")))
        .redraw(&mut surface)
        .expect("draw");
    assert_eq!(surface.stats().fills, 1);
}

#[test]
fn single_axis_repeat_patterns_still_fill() {
    let mut surface = CairoSurface::new(16, 16).expect("surface");
    let tile = cairo::ImageSurface::create(cairo::Format::ARgb32, 2, 2).expect("tile");
    surface.register_pattern_image("stripes", tile);

    for repeat in [PatternRepeat::RepeatX, PatternRepeat::RepeatY] {
        let pattern = surface
            .create_pattern("stripes", repeat)
            .expect("registered image");
        surface.paint_state_mut().fill_style = Paint::Pattern(pattern);
        surface.begin_path();
        surface.arc(8.0, 8.0, 4.0, 0.0, std::f64::consts::TAU, false);
        surface.fill().expect("pattern fill");
    }
    assert_eq!(surface.stats().fills, 2);
}
