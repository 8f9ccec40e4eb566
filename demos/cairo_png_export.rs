use std::path::PathBuf;

use adorn::graph::AxisAttributes;
use adorn::render::CairoSurfaceFactory;
use adorn::scene::{AttributeHost, PaintSpec, StyleAttributes};
use adorn::telemetry::init_default_tracing;
use adorn::{Graph, GraphAttributes, HostRegion, LineChart, LineChartAttributes};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_default_tracing();

    let output = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("adorn_line_chart.png"), PathBuf::from);

    let mut graph = Graph::new(CairoSurfaceFactory);
    graph.update_attributes(GraphAttributes {
        x_axis: Some(AxisAttributes::new([0.0, 50.0, 100.0])),
        y_axis: Some(
            AxisAttributes::new([0.0, 50.0, 100.0])
                .with_style(StyleAttributes::fill(PaintSpec::solid("gray"))),
        ),
        host: Some(HostRegion::container(300, 150)),
        ..GraphAttributes::default()
    })?;
    graph.add_chart(LineChart::new(LineChartAttributes {
        data: Some(vec![[0.0, 0.0], [50.0, 50.0], [100.0, 100.0]]),
        marker_style: Some(StyleAttributes::fill(PaintSpec::solid("red"))),
        line_style: None,
    }));

    graph.redraw()?;

    let surface = graph
        .canvas()
        .surface()
        .ok_or("graph surface was not attached")?;
    surface.write_png(&output)?;
    println!(
        "wrote {} using {} ({:?})",
        output.display(),
        surface.backend_name(),
        surface.stats()
    );
    Ok(())
}
