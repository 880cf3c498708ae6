//! friendgraph CLI - Social graph analytics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the adjacency list of the bridged chain sample
//! friendgraph show
//!
//! # Top 2 betweenness groups of a random network
//! friendgraph top --kind betweenness --number 2 --graph random --vertices 50 --seed 7
//!
//! # Friend-of-friend suggestions for person 25
//! friendgraph suggest --graph community --person 25
//!
//! # Star subgraphs of the top 3 degree groups
//! friendgraph export --graph community --number 3
//!
//! # Walk through everything on both sample networks
//! friendgraph demo
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use friendgraph::generate::{bridged_chain, community_sample, random_friendships, RandomGraphConfig};
use friendgraph::{CentralityKind, FriendGraph};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "friendgraph")]
#[command(about = "Social graph centrality and friend suggestions", long_about = None)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list and statistics
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Rank friends by a centrality measure
    Top {
        #[command(flatten)]
        graph: GraphArgs,

        /// Centrality measure: degree, closeness or betweenness
        #[arg(short, long, default_value = "degree")]
        kind: CentralityKind,

        /// Number of value groups to return
        #[arg(short, long, default_value = "1")]
        number: usize,
    },

    /// Suggest introductions among a person's friends
    Suggest {
        #[command(flatten)]
        graph: GraphArgs,

        /// Person whose friends are examined
        #[arg(short, long)]
        person: i64,
    },

    /// Print star subgraphs for the top degree groups
    Export {
        #[command(flatten)]
        graph: GraphArgs,

        /// Number of degree groups to export
        #[arg(short, long, default_value = "1")]
        number: usize,
    },

    /// Run every analysis on both sample networks
    Demo,
}

#[derive(Args)]
struct GraphArgs {
    /// Graph to analyze
    #[arg(short, long, value_enum, default_value = "bridged-chain")]
    graph: GraphSource,

    /// Friends in a random graph
    #[arg(long, default_value = "20")]
    vertices: u32,

    /// Friendships in a random graph
    #[arg(long, default_value = "40")]
    friendships: usize,

    /// Seed for a random graph
    #[arg(long, default_value = "42")]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum GraphSource {
    /// 10 - 20 - 30 - 40 - 50 - 60 with extra links (undirected)
    BridgedChain,
    /// Seven-person directed community
    Community,
    /// Seeded random undirected network
    Random,
}

impl GraphArgs {
    fn build(&self) -> FriendGraph {
        match self.graph {
            GraphSource::BridgedChain => bridged_chain(),
            GraphSource::Community => community_sample(),
            GraphSource::Random => random_friendships(RandomGraphConfig {
                vertices: self.vertices,
                friendships: self.friendships,
                seed: self.seed,
            }),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Show { graph } => cmd_show(&graph.build()),
        Commands::Top {
            graph,
            kind,
            number,
        } => cmd_top(graph.build(), kind, number),
        Commands::Suggest { graph, person } => cmd_suggest(&graph.build(), person),
        Commands::Export { graph, number } => cmd_export(&graph.build(), number),
        Commands::Demo => cmd_demo(),
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_show(graph: &FriendGraph) -> Result<()> {
    let stats = graph.stats();

    println!("{}", graph.adjacency_string());
    println!();
    println!("Friend Graph Statistics");
    println!("=======================");
    println!("Friends:          {}", stats.vertex_count);
    println!("Edges:            {}", stats.edge_count);
    println!("Edge insertions:  {}", stats.edge_insertions);
    println!("Average degree:   {:.2}", stats.average_degree);
    Ok(())
}

fn cmd_top(mut graph: FriendGraph, kind: CentralityKind, number: usize) -> Result<()> {
    match kind {
        CentralityKind::Degree => {}
        CentralityKind::Closeness => {
            graph.measure_and_set_closeness_centrality();
        }
        CentralityKind::Betweenness => {
            graph.measure_and_set_betweenness_centrality();
        }
    }

    let top = graph
        .top_centrality_for(number, kind)
        .with_context(|| format!("Failed to rank top {number} by {kind}"))?;

    info!(%kind, number, selected = top.len(), "ranked friends");
    for friend in top {
        println!("{kind} centrality for person ID = {}, centrality = {}", friend.id, friend.value);
    }
    Ok(())
}

fn cmd_suggest(graph: &FriendGraph, person: i64) -> Result<()> {
    let suggestions = graph
        .suggest_friends_of_friends(person)
        .with_context(|| format!("Failed to suggest friends for {person}"))?;

    if suggestions.is_empty() {
        println!("No suggestions for the friends of {person}");
        return Ok(());
    }
    for (friend, suggested) in suggestions {
        let list: Vec<String> = suggested.iter().map(ToString::to_string).collect();
        println!("{friend}: {}", list.join(", "));
    }
    Ok(())
}

fn cmd_export(graph: &FriendGraph, number: usize) -> Result<()> {
    let stars = graph
        .export_top_degree_graphs(number)
        .with_context(|| format!("Failed to export top {number} degree graphs"))?;

    for star in stars {
        println!("{star}");
        println!();
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    let community = community_sample();
    let mut chain = bridged_chain();

    println!("{community}");
    println!();

    for star in community.export_top_degree_graphs(1)? {
        println!("TOP 1");
        println!("{star}");
    }
    for star in chain.export_top_degree_graphs(3)? {
        println!("{star}");
    }
    println!();

    cmd_suggest(&community, 25)?;
    cmd_suggest(&chain, 40)?;
    println!();

    chain.measure_and_set_closeness_centrality();
    chain.measure_and_set_betweenness_centrality();

    for (number, kind) in [
        (2, CentralityKind::Degree),
        (5, CentralityKind::Closeness),
        (2, CentralityKind::Betweenness),
    ] {
        for friend in chain.top_centrality_for(number, kind)? {
            println!(
                "{kind} centrality for person ID = {}, centrality = {}",
                friend.id, friend.value
            );
        }
    }
    Ok(())
}
