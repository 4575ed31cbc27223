use crate::graph::HashMapGraph;
use std::convert::TryFrom;
use std::io::{BufRead, Error, ErrorKind};

/// Reader for graphs in the PACE 2017 `.gr` format: an optional run of
/// `c` comment lines, one `p tw <n> <m>` header, then one `u v` line per
/// edge with 1-based endpoints. Vertices are mapped to `0..n`.
pub struct PaceReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<PaceReader<T>> for HashMapGraph {
    type Error = Error;

    fn try_from(reader: PaceReader<T>) -> Result<Self, Self::Error> {
        let mut graph: Option<HashMapGraph> = None;
        let mut order = 0;

        for line in reader.0.lines() {
            let line = line?;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                None | Some("c") => {}
                Some("p") => {
                    order = parse_header(tokens)?;
                    let mut parsed = HashMapGraph::with_capacity(order);
                    for v in 0..order {
                        parsed.add_vertex(v);
                    }
                    graph = Some(parsed);
                }
                Some(first) => match graph.as_mut() {
                    Some(graph) => {
                        let u = parse_vertex(Some(first), order)?;
                        let v = parse_vertex(tokens.next(), order)?;
                        graph.add_edge(u, v);
                    }
                    None => {
                        return Err(invalid("edge line before the problem header"));
                    }
                },
            }
        }

        graph.ok_or_else(|| invalid("no problem header found"))
    }
}

fn parse_header<'a, I: Iterator<Item = &'a str>>(mut tokens: I) -> Result<usize, Error> {
    let descriptor = tokens.next();
    if descriptor != Some("tw") {
        return Err(invalid("problem header is not a tw descriptor"));
    }
    tokens
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| invalid("problem header carries no vertex count"))
}

fn parse_vertex(token: Option<&str>, order: usize) -> Result<usize, Error> {
    match token.and_then(|t| t.parse::<usize>().ok()) {
        Some(v) if v >= 1 && v <= order => Ok(v - 1),
        _ => Err(invalid("invalid vertex label")),
    }
}

fn invalid(message: &str) -> Error {
    Error::new(ErrorKind::InvalidInput, message)
}
