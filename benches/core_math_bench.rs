use adorn::core::{Matrix, Rect, Vector};
use adorn::graph::{AxisAttributes, CoordinateMapper, GraphLayout};
use adorn::render::{RecordingSurface, RecordingSurfaceFactory};
use adorn::scene::{AttributeHost, Transform, TransformAttributes};
use adorn::{Graph, GraphAttributes, LineChart, LineChartAttributes};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_matrix_compose(c: &mut Criterion) {
    let rotation = Matrix::rotation(15.0);
    let translation = Matrix::translation(3.0, -2.0);

    c.bench_function("matrix_compose_1k", |b| {
        b.iter(|| {
            let mut matrix = Matrix::identity();
            for _ in 0..1_000 {
                matrix.append(black_box(&rotation));
                matrix.prepend(black_box(&translation));
            }
            matrix
        })
    });
}

fn bench_transform_updates(c: &mut Criterion) {
    c.bench_function("transform_updates_1k", |b| {
        b.iter(|| {
            let mut transform = Transform::default();
            for i in 0..1_000 {
                let t = f64::from(i);
                transform
                    .update_attributes(TransformAttributes {
                        rotate: Some(t * 0.1),
                        translate: Some(Vector::new(t, -t)),
                        ..TransformAttributes::default()
                    })
                    .expect("transform update");
            }
            transform.matrix()
        })
    });
}

fn bench_graph_mapping_10k(c: &mut Criterion) {
    let axis: Vec<f64> = (0..=20).map(|i| f64::from(i) * 50.0).collect();
    let layout = GraphLayout::new(Rect::new(40.0, 20.0, 1600.0, 900.0), &axis, &axis);
    let data: Vec<[f64; 2]> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) * 0.1;
            [t, 500.0 + (t * 0.05).sin() * 400.0]
        })
        .collect();

    c.bench_function("graph_mapping_10k", |b| {
        b.iter(|| layout.chart_to_graph_points(black_box(&data)))
    });
}

fn bench_recorded_graph_draw_2k(c: &mut Criterion) {
    let axis: Vec<f64> = (0..=10).map(|i| f64::from(i) * 200.0).collect();
    let mut graph = Graph::new(RecordingSurfaceFactory::default());
    graph
        .update_attributes(GraphAttributes {
            x_axis: Some(AxisAttributes::new(axis.clone())),
            y_axis: Some(AxisAttributes::new(axis)),
            ..GraphAttributes::default()
        })
        .expect("graph attributes");
    graph.calculate_area(1600.0, 900.0);
    graph.add_chart(LineChart::new(LineChartAttributes::with_data(
        (0..2_000)
            .map(|i| {
                let t = f64::from(i);
                [t, 1_000.0 + (t * 0.01).cos() * 800.0]
            })
            .collect::<Vec<_>>(),
    )));

    c.bench_function("recorded_graph_draw_2k", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::new(1600, 900);
            graph
                .draw_graph(black_box(&mut surface))
                .expect("graph draw should succeed");
            surface.commands().len()
        })
    });
}

criterion_group!(
    benches,
    bench_matrix_compose,
    bench_transform_updates,
    bench_graph_mapping_10k,
    bench_recorded_graph_draw_2k
);
criterion_main!(benches);
