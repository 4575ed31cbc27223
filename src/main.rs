use bramble::datastructures::BitSet;
use bramble::graph::{Graph, HashMapGraph, SubgraphEngine};
use bramble::io::PaceReader;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::convert::TryFrom;
use std::io;
use std::io::{stdin, Write};

/// Formats every record as a DIMACS comment line, so the output stream
/// stays a valid .gr/.td file.
fn init_logger() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .init();
}

fn main() -> io::Result<()> {
    init_logger();

    let graph: HashMapGraph = {
        let buffer = stdin();
        let reader = PaceReader(buffer.lock());
        HashMapGraph::try_from(reader)?
    };
    let size: usize = graph.vertices().map(|v| graph.degree(v)).sum::<usize>() / 2;
    info!("n = {} m = {}", graph.order(), size);

    let engine = SubgraphEngine::new(&graph);
    let components = engine.separate(&BitSet::new(engine.order()));
    info!("{} connected components", components.len());

    // the seeding step of PID-style exact solvers: closed neighborhoods
    // that already form potential maximal cliques
    let mut seeds = 0;
    for v in 0..engine.order() {
        let mut closed = engine.bit_graph().row(v).clone();
        closed.set_bit(v);
        if engine.is_potential_maximal_clique(&closed) {
            seeds += 1;
        }
    }
    info!("{} closed neighborhoods are potential maximal cliques", seeds);

    Ok(())
}
