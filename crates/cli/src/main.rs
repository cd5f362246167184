use std::path::Path;
use std::{fs, process};

use clap::Parser;
use zdd_cli::{App, Command, FixtureArgs, FixtureKind};
use zdd_core::construct::Limits;
use zdd_core::node::PseudoZdd;
use zdd_core::predicate::{fgeneral::FGeneral, set_cover::SetCover, set_partition::SetPartition, stpath::StPath};
use zdd_core::Graph;
use zdd_parser::PredicateSpec;

fn main() {
    tracing_subscriber::fmt::init();

    let app = App::parse();
    match &app.command {
        Command::Build(args) => build(&args.input, &args.output, args.reduce),
        Command::Count(args) => count_cmd(&args.input),
        Command::Fixture(args) => fixture(args),
    }
}

fn read_graph(path: &Path) -> (Graph, PredicateSpec) {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        process::exit(1);
    });
    let (graph, predicate) = zdd_parser::parse_graph(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        process::exit(1);
    });
    let predicate = predicate.unwrap_or_else(|| {
        eprintln!("{} has no predicate block", path.display());
        process::exit(1);
    });
    (graph, predicate)
}

fn build_zdd(graph: &Graph, predicate: &PredicateSpec) -> PseudoZdd {
    let order = graph.default_order();
    let limits = Limits::default();
    match predicate {
        PredicateSpec::StPath { endpoints, hamilton } => {
            let predicate = StPath::new(graph.num_vertices(), *endpoints, *hamilton).unwrap_or_else(|e| {
                eprintln!("Invalid st-path parameters: {e:?}");
                process::exit(1);
            });
            zdd_core::construct::build(graph, &predicate, &order, &limits)
        }
        PredicateSpec::FGeneral(params) => {
            let predicate = FGeneral::new(graph.num_vertices(), params.clone()).unwrap_or_else(|e| {
                eprintln!("Invalid fgeneral parameters: {e:?}");
                process::exit(1);
            });
            zdd_core::construct::build(graph, &predicate, &order, &limits)
        }
        PredicateSpec::SetPartition => {
            let predicate = SetPartition::new(graph.num_vertices());
            zdd_core::construct::build(graph, &predicate, &order, &limits)
        }
        PredicateSpec::SetCover => {
            let predicate = SetCover::new(graph.num_vertices());
            zdd_core::construct::build(graph, &predicate, &order, &limits)
        }
    }
    .unwrap_or_else(|e| {
        eprintln!("Construction failed: {e:?}");
        process::exit(1);
    })
}

fn build(input: &Path, output: &Path, reduce: bool) {
    let (graph, predicate) = read_graph(input);
    let zdd = build_zdd(&graph, &predicate);
    let zdd = if reduce { zdd_reduce::reduce(&zdd) } else { zdd };

    let file = fs::File::create(output).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {e}", output.display());
        process::exit(1);
    });
    serde_json::to_writer_pretty(file, &zdd).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {e}", output.display());
        process::exit(1);
    });
    println!("Wrote {} nodes to {}", zdd.num_nodes(), output.display());
}

fn count_cmd(input: &Path) {
    let (graph, predicate) = read_graph(input);
    let zdd = build_zdd(&graph, &predicate);
    println!("{}", zdd_reduce::count(&zdd));
}

fn fixture(args: &FixtureArgs) {
    let params = zdd_testgen::GraphParams {
        id: args.seed,
        num_vertices: args.num_vertices,
        edge_density: args.edge_density,
    };

    let (graph, predicate) = match args.kind {
        FixtureKind::StPath | FixtureKind::Hamilton => {
            let hamilton_requested = matches!(args.kind, FixtureKind::Hamilton);
            let zdd_testgen::Fixture::StPath {
                graph, endpoints, hamilton, ..
            } = zdd_testgen::random_stpath_fixture(params, hamilton_requested)
            else {
                unreachable!("random_stpath_fixture always returns Fixture::StPath")
            };
            (graph, PredicateSpec::StPath { endpoints, hamilton })
        }
        FixtureKind::FGeneral => {
            let zdd_testgen::Fixture::FGeneral {
                graph, fgeneral_params, ..
            } = zdd_testgen::random_fgeneral_fixture(params)
            else {
                unreachable!("random_fgeneral_fixture always returns Fixture::FGeneral")
            };
            (graph, PredicateSpec::FGeneral(fgeneral_params))
        }
        FixtureKind::SetPartition => {
            let zdd_testgen::Fixture::SetPartition { graph, .. } = zdd_testgen::random_setpartition_fixture(params)
            else {
                unreachable!("random_setpartition_fixture always returns Fixture::SetPartition")
            };
            (graph, PredicateSpec::SetPartition)
        }
        FixtureKind::SetCover => {
            let zdd_testgen::Fixture::SetCover { graph, .. } = zdd_testgen::random_setcover_fixture(params) else {
                unreachable!("random_setcover_fixture always returns Fixture::SetCover")
            };
            (graph, PredicateSpec::SetCover)
        }
    };

    let text = zdd_parser::write_graph(&graph, Some(&predicate));
    fs::write(&args.output, text).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {e}", args.output.display());
        process::exit(1);
    });
    println!("Wrote fixture to {}", args.output.display());
}
