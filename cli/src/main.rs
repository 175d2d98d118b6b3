//! Tricensus CLI — run a signed triangle census over an edge-list file
//!
//! The input format is one undirected edge per line, whitespace
//! separated: `u v weight`. Lines starting with `#` are comments.

use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tricensus::{NodeId, SignedGraph, TriangleCensus};

#[derive(Parser)]
#[command(name = "tricensus", version, about = "Signed triangle census CLI")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the census over a weighted edge-list file
    Census {
        /// Path to the edge list (`u v weight` per line)
        file: PathBuf,

        /// Partition edges across the rayon pool
        #[arg(long)]
        parallel: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Census { file, parallel } => run_census(&file, parallel, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_census(
    file: &Path,
    parallel: bool,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_edge_list(file)?;

    let census = if parallel {
        tricensus::par_triangle_census(&graph)?
    } else {
        tricensus::triangle_census(&graph)?
    };

    match format {
        OutputFormat::Table => print_table(&graph, &census),
        OutputFormat::Json => print_json(&census)?,
    }
    Ok(())
}

fn load_edge_list(file: &Path) -> Result<SignedGraph, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file)?;
    let mut edges = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let edge = (|| {
            let u: u64 = fields.next()?.parse().ok()?;
            let v: u64 = fields.next()?.parse().ok()?;
            let weight: f64 = fields.next()?.parse().ok()?;
            if fields.next().is_some() {
                return None;
            }
            Some((NodeId::new(u), NodeId::new(v), weight))
        })()
        .ok_or_else(|| {
            format!(
                "{}:{}: expected `u v weight`, got {:?}",
                file.display(),
                line_no + 1,
                line
            )
        })?;

        edges.push(edge);
    }

    Ok(SignedGraph::from_edges(edges)?)
}

fn print_table(graph: &SignedGraph, census: &TriangleCensus) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["triangle class", "count"]);
    table.add_row(vec!["all positive".to_string(), census.all_positive.to_string()]);
    table.add_row(vec!["one negative".to_string(), census.one_negative.to_string()]);
    table.add_row(vec!["two negative".to_string(), census.two_negative.to_string()]);
    table.add_row(vec!["all negative".to_string(), census.all_negative.to_string()]);
    table.add_row(vec!["zero-weight edge".to_string(), census.unclassified().to_string()]);
    table.add_row(vec!["total".to_string(), census.total.to_string()]);

    println!(
        "{} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    println!("{table}");
    println!(
        "balanced: {}  unbalanced: {}",
        census.balanced(),
        census.unbalanced()
    );
}

fn print_json(census: &TriangleCensus) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::json!({
        "all_positive": census.all_positive,
        "one_negative": census.one_negative,
        "two_negative": census.two_negative,
        "all_negative": census.all_negative,
        "unclassified": census.unclassified(),
        "total": census.total,
        "balanced": census.balanced(),
        "unbalanced": census.unbalanced(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
