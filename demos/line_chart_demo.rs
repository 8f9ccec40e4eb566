use adorn::core::Margin;
use adorn::graph::AxisAttributes;
use adorn::render::{DrawCommand, RecordingSurfaceFactory};
use adorn::scene::{AttributeHost, PaintSpec, StrokeSpec, StyleAttributes};
use adorn::telemetry::init_default_tracing;
use adorn::{Graph, GraphAttributes, HostRegion, LineChart, LineChartAttributes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let mut graph = Graph::new(RecordingSurfaceFactory::default());
    graph.update_attributes(GraphAttributes {
        x_axis: Some(AxisAttributes::new([0.0, 10.0, 20.0, 30.0, 40.0])),
        y_axis: Some(AxisAttributes::new([0.0, 25.0, 50.0, 75.0, 100.0])),
        margin: Some(Margin::new(40.0, 20.0, 20.0, 30.0)),
        axis_style: Some(StyleAttributes::stroke(
            StrokeSpec::new(PaintSpec::solid("gray")).with_line_width(2.0),
        )),
        host: Some(HostRegion::container(800, 450)),
    })?;

    let data: Vec<[f64; 2]> = (0..=8)
        .map(|i| {
            let x = f64::from(i) * 5.0;
            [x, 50.0 + (x / 6.0).sin() * 40.0]
        })
        .collect();
    graph.add_chart(LineChart::new(LineChartAttributes {
        data: Some(data),
        marker_style: Some(StyleAttributes::fill(PaintSpec::solid("orange"))),
        line_style: Some(StyleAttributes::stroke(
            StrokeSpec::new(PaintSpec::solid("#1f77b4")).with_line_width(3.0),
        )),
    }));

    graph.redraw()?;

    let surface = graph
        .canvas()
        .surface()
        .ok_or("graph surface was not attached")?;
    println!("plotting rect: {:?}", graph.graph_rect());
    println!("recorded commands: {}", surface.commands().len());
    println!(
        "paint ops: fills={} strokes={} labels={}",
        surface.count(|command| matches!(command, DrawCommand::Fill { .. })),
        surface.count(|command| matches!(command, DrawCommand::Stroke { .. })),
        surface.texts().len()
    );
    for center in surface.arc_centers() {
        println!("marker at ({:.1}, {:.1})", center.x, center.y);
    }

    Ok(())
}
