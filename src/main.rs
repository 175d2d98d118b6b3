use anyhow::Result;
use ndarray::array;
use tricensus::{triangle_census, NodeId, Sign, SignedGraph};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Tricensus v{}", tricensus::version());
    println!("==========================================");
    println!();

    demo_sample_matrix()?;
    demo_signed_network()?;

    Ok(())
}

/// The four-node sample graph from a dense symmetric matrix
fn demo_sample_matrix() -> Result<()> {
    println!("=== Demo 1: Sample adjacency matrix ===");

    let adj = array![
        [0.0, 0.0, 0.4, 1.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.4, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 0.0],
    ];

    let graph = SignedGraph::from_matrix(&adj)?;
    println!(
        "✓ Built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    for (u, v, w) in graph.edges() {
        println!("  {} -- {}  weight {} ({})", u, v, w, Sign::of(w));
    }

    let census = triangle_census(&graph)?;
    println!("✓ Census: {:?}", census);
    println!(
        "  balanced: {}, unbalanced: {}",
        census.balanced(),
        census.unbalanced()
    );
    println!();
    Ok(())
}

/// A small signed network with every triangle class represented
fn demo_signed_network() -> Result<()> {
    println!("=== Demo 2: Signed network ===");

    let n = NodeId::new;
    let graph = SignedGraph::from_edges([
        // all-positive triangle {0, 1, 2}
        (n(0), n(1), 1.0),
        (n(0), n(2), 2.0),
        (n(1), n(2), 0.5),
        // one-negative triangle {2, 3, 4}
        (n(2), n(3), 1.0),
        (n(2), n(4), 1.0),
        (n(3), n(4), -1.0),
        // all-negative triangle {4, 5, 6}
        (n(4), n(5), -1.0),
        (n(4), n(6), -2.0),
        (n(5), n(6), -0.5),
        // zero-weight edge closes triangle {6, 7, 8}
        (n(6), n(7), 1.0),
        (n(6), n(8), -1.0),
        (n(7), n(8), 0.0),
    ])?;

    let census = triangle_census(&graph)?;
    println!(
        "✓ {} triangles: {} all-positive, {} one-negative, {} two-negative, {} all-negative, {} unclassified",
        census.total,
        census.all_positive,
        census.one_negative,
        census.two_negative,
        census.all_negative,
        census.unclassified()
    );
    println!();
    Ok(())
}
