use cohesion::{graphgen::random_attachment::random_attachment, prelude::*};
use cohesion_api::core::utils::logging::global_info_logger;
use criterion::{measurement::WallTime, Bencher, BenchmarkGroup, BenchmarkId};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;

/// Random graph with `num_vertices` vertices and roughly half as many edges.
pub fn bootstrap_graph(graph_type: GraphType, num_vertices: u64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(graph_type);
    for v in 0..num_vertices {
        graph.add_vertex(v);
    }
    for _ in 0..num_vertices / 2 {
        let src = rng.gen_range(0..num_vertices);
        let dst = rng.gen_range(0..num_vertices);
        graph.add_edge(src, dst);
    }
    graph
}

/// Graph grown with the random attachment model, dense enough to have many triangles.
pub fn attachment_graph(graph_type: GraphType, num_vertices: usize, edges_per_step: usize) -> Graph {
    global_info_logger();
    let mut graph = Graph::new(graph_type);
    random_attachment(&mut graph, num_vertices, edges_per_step, Some(1))
        .expect("benchmark graph starts empty, ids cannot overflow");
    info!(
        num_vertices = graph.num_vertices(),
        num_edges = graph.num_edges(),
        "generated benchmark graph"
    );
    graph
}

pub fn bench<F>(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    parameter: Option<usize>,
    mut task: F,
) where
    F: FnMut(&mut Bencher<'_, WallTime>),
{
    match parameter {
        Some(parameter) => group.bench_with_input(
            BenchmarkId::new(name, parameter),
            &parameter,
            |b: &mut Bencher, _| task(b),
        ),
        None => group.bench_function(name, task),
    };
}
