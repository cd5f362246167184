use std::fmt::Write as _;

use winnow::ascii::dec_uint;
use winnow::combinator::separated;
use winnow::prelude::*;
use winnow::token::take_while;
use winnow::ModalResult;

use zdd_core::graph::{Edge, Graph, VertexId};
use zdd_core::predicate::fgeneral::{FGeneralParams, Topology};

/// A parse error with human-readable location information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// The predicate named by a graph file's (optional) predicate block, with
/// its parameters, but not yet bound to a vertex count -- `fgeneral`'s
/// `degree` lines are validated against `num_vertices` by the caller once
/// the whole file (and hence the vertex count) is known.
#[derive(Debug, Clone)]
pub enum PredicateSpec {
    StPath {
        endpoints: Option<(VertexId, VertexId)>,
        hamilton: bool,
    },
    FGeneral(FGeneralParams),
    SetPartition,
    SetCover,
}

/// Parse a graph description file into a [`Graph`] and an optional
/// [`PredicateSpec`].
///
/// # Errors
///
/// Returns a [`ParseError`] with line/column information when a line does
/// not conform to the grammar, or when `zdd_core::graph::Graph::new`
/// rejects the resulting edge list.
pub fn parse_graph(input: &str) -> Result<(Graph, Option<PredicateSpec>), ParseError> {
    let mut num_vertices: Option<u32> = None;
    let mut edges: Vec<Edge> = Vec::new();
    let mut predicate: Option<PredicateSpec> = None;

    let lines: Vec<&str> = input.lines().collect();
    let mut i = 0usize;
    while i < lines.len() {
        let raw = lines[i];
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix("n ") {
            let count = parse_uint(rest, i + 1)?;
            num_vertices = Some(count);
        } else if let Some(rest) = line.strip_prefix("e ") {
            let ids = parse_uint_list(rest, i + 1)?;
            if ids.len() < 2 {
                return Err(err(i + 1, 1, "an edge needs at least two vertex ids"));
            }
            let vertices: Vec<VertexId> = ids.into_iter().map(VertexId).collect();
            edges.push(if vertices.len() == 2 {
                Edge::Pair(vertices[0], vertices[1])
            } else {
                Edge::Hyper(vertices)
            });
        } else if let Some(rest) = line.strip_prefix("stpath ") {
            let ids = parse_uint_list(rest, i + 1)?;
            if ids.len() != 2 {
                return Err(err(i + 1, 1, "stpath takes exactly two endpoint ids"));
            }
            predicate = Some(PredicateSpec::StPath {
                endpoints: Some((VertexId(ids[0]), VertexId(ids[1]))),
                hamilton: false,
            });
        } else if line == "hamilton" || line.starts_with("hamilton ") {
            let rest = line.strip_prefix("hamilton").unwrap().trim();
            let endpoints = if rest.is_empty() {
                None
            } else {
                let ids = parse_uint_list(rest, i + 1)?;
                if ids.len() != 2 {
                    return Err(err(i + 1, 1, "hamilton takes zero or two endpoint ids"));
                }
                Some((VertexId(ids[0]), VertexId(ids[1])))
            };
            predicate = Some(PredicateSpec::StPath {
                endpoints,
                hamilton: true,
            });
        } else if line == "fgeneral" {
            let (params, consumed) = parse_fgeneral_block(&lines, i + 1)?;
            predicate = Some(PredicateSpec::FGeneral(params));
            i = consumed;
            continue;
        } else if line == "setpartition" {
            predicate = Some(PredicateSpec::SetPartition);
        } else if line == "setcover" {
            predicate = Some(PredicateSpec::SetCover);
        } else {
            return Err(err(i + 1, 1, "unrecognized statement"));
        }

        i += 1;
    }

    let num_vertices = num_vertices.ok_or_else(|| err(1, 1, "missing vertex count ('n <count>')"))?;
    let graph = Graph::new(num_vertices, edges).map_err(|_| err(1, 1, "malformed graph"))?;
    Ok((graph, predicate))
}

fn parse_fgeneral_block(lines: &[&str], start: usize) -> Result<(FGeneralParams, usize), ParseError> {
    let mut degree_lines: Vec<(u32, Vec<u32>)> = Vec::new();
    let mut same_component = Vec::new();
    let mut different_component = Vec::new();
    let mut component_counts = Vec::new();
    let mut component_sizes = Vec::new();
    let mut topology = Topology::CycleOk;

    let mut i = start;
    loop {
        if i >= lines.len() {
            return Err(err(i, 1, "unterminated fgeneral block, expected 'end'"));
        }
        let line = lines[i].trim();
        if line.is_empty() || line.starts_with('#') {
            i += 1;
            continue;
        }
        if line == "end" {
            i += 1;
            break;
        }
        if let Some(rest) = line.strip_prefix("degree ") {
            let ids = parse_uint_list(rest, i + 1)?;
            if ids.is_empty() {
                return Err(err(i + 1, 1, "degree line needs a vertex id"));
            }
            degree_lines.push((ids[0], ids[1..].to_vec()));
        } else if let Some(rest) = line.strip_prefix("same ") {
            let ids = parse_uint_list(rest, i + 1)?;
            if ids.len() != 2 {
                return Err(err(i + 1, 1, "same takes exactly two vertex ids"));
            }
            same_component.push((VertexId(ids[0]), VertexId(ids[1])));
        } else if let Some(rest) = line.strip_prefix("diff ") {
            let ids = parse_uint_list(rest, i + 1)?;
            if ids.len() != 2 {
                return Err(err(i + 1, 1, "diff takes exactly two vertex ids"));
            }
            different_component.push((VertexId(ids[0]), VertexId(ids[1])));
        } else if let Some(rest) = line.strip_prefix("count") {
            component_counts = parse_uint_list(rest.trim(), i + 1)?;
        } else if let Some(rest) = line.strip_prefix("size") {
            component_sizes = parse_uint_list(rest.trim(), i + 1)?;
        } else if let Some(rest) = line.strip_prefix("topology ") {
            topology = match rest.trim() {
                "cycle_ok" => Topology::CycleOk,
                "cycle_forbidden" => Topology::CycleForbidden,
                _ => return Err(err(i + 1, 1, "topology must be cycle_ok or cycle_forbidden")),
            };
        } else {
            return Err(err(i + 1, 1, "unrecognized fgeneral statement"));
        }
        i += 1;
    }

    let max_vertex = degree_lines
        .iter()
        .map(|&(v, _)| v)
        .chain(same_component.iter().flat_map(|&(p, q)| [p.get(), q.get()]))
        .chain(different_component.iter().flat_map(|&(p, q)| [p.get(), q.get()]))
        .max()
        .unwrap_or(0);
    let mut degrees = alloc_vec(max_vertex as usize + 1);
    for (v, allowed) in degree_lines {
        degrees[v as usize] = allowed;
    }

    Ok((
        FGeneralParams {
            degrees,
            same_component,
            different_component,
            component_counts,
            component_sizes,
            topology,
        },
        i,
    ))
}

fn alloc_vec(len: usize) -> Vec<Vec<u32>> {
    core::iter::repeat_with(Vec::new).take(len).collect()
}

fn parse_uint(input: &str, line: usize) -> Result<u32, ParseError> {
    let mut stream = input.trim();
    dec_uint
        .parse_next(&mut stream)
        .map_err(|_| err(line, 1, "expected an integer"))
}

fn parse_uint_list(input: &str, line: usize) -> Result<Vec<u32>, ParseError> {
    let mut stream = input.trim();
    if stream.is_empty() {
        return Ok(Vec::new());
    }
    let values: Vec<u32> = separated(1.., dec_uint::<_, u32, _>, whitespace)
        .parse_next(&mut stream)
        .map_err(|_| err(line, 1, "expected a whitespace-separated list of integers"))?;
    Ok(values)
}

fn whitespace(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c == ' ' || c == '\t').void().parse_next(input)
}

fn err(line: usize, column: usize, message: &str) -> ParseError {
    ParseError {
        message: message.into(),
        line,
        column,
    }
}

/// Render `graph` and `predicate` back into the DSL `parse_graph` accepts,
/// the inverse of the grammar documented on the crate root. Used by
/// `zdd fixture` to write generated graphs to disk.
#[must_use]
pub fn write_graph(graph: &Graph, predicate: Option<&PredicateSpec>) -> String {
    let mut out = String::new();
    writeln!(out, "n {}", graph.num_vertices()).expect("writing to a String never fails");
    for edge in graph.edges() {
        let ids: Vec<String> = edge.vertices().iter().map(|v| v.get().to_string()).collect();
        writeln!(out, "e {}", ids.join(" ")).expect("writing to a String never fails");
    }

    match predicate {
        Some(PredicateSpec::StPath { endpoints, hamilton }) => {
            if *hamilton {
                match endpoints {
                    Some((s, t)) => writeln!(out, "hamilton {} {}", s.get(), t.get()),
                    None => writeln!(out, "hamilton"),
                }
                .expect("writing to a String never fails");
            } else if let Some((s, t)) = endpoints {
                writeln!(out, "stpath {} {}", s.get(), t.get()).expect("writing to a String never fails");
            }
        }
        Some(PredicateSpec::FGeneral(params)) => write_fgeneral_block(&mut out, params),
        Some(PredicateSpec::SetPartition) => writeln!(out, "setpartition").expect("writing to a String never fails"),
        Some(PredicateSpec::SetCover) => writeln!(out, "setcover").expect("writing to a String never fails"),
        None => {}
    }

    out
}

fn write_fgeneral_block(out: &mut String, params: &FGeneralParams) {
    writeln!(out, "fgeneral").expect("writing to a String never fails");
    for (v, allowed) in params.degrees.iter().enumerate().skip(1) {
        if allowed.is_empty() {
            continue;
        }
        let values: Vec<String> = allowed.iter().map(u32::to_string).collect();
        writeln!(out, "degree {v} {}", values.join(" ")).expect("writing to a String never fails");
    }
    for &(a, b) in &params.same_component {
        writeln!(out, "same {} {}", a.get(), b.get()).expect("writing to a String never fails");
    }
    for &(a, b) in &params.different_component {
        writeln!(out, "diff {} {}", a.get(), b.get()).expect("writing to a String never fails");
    }
    if !params.component_counts.is_empty() {
        let values: Vec<String> = params.component_counts.iter().map(u32::to_string).collect();
        writeln!(out, "count {}", values.join(" ")).expect("writing to a String never fails");
    }
    if !params.component_sizes.is_empty() {
        let values: Vec<String> = params.component_sizes.iter().map(u32::to_string).collect();
        writeln!(out, "size {}", values.join(" ")).expect("writing to a String never fails");
    }
    let topology = match params.topology {
        Topology::CycleOk => "cycle_ok",
        Topology::CycleForbidden => "cycle_forbidden",
    };
    writeln!(out, "topology {topology}").expect("writing to a String never fails");
    writeln!(out, "end").expect("writing to a String never fails");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_triangle() {
        let input = "n 3\ne 1 2\ne 2 3\ne 1 3\n";
        let (graph, predicate) = parse_graph(input).expect("should parse");
        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert!(predicate.is_none());
    }

    #[test]
    fn parses_stpath_block() {
        let input = "n 4\ne 1 2\ne 2 3\ne 3 4\nstpath 1 4\n";
        let (_, predicate) = parse_graph(input).expect("should parse");
        match predicate {
            Some(PredicateSpec::StPath { endpoints: Some((s, t)), hamilton }) => {
                assert_eq!(s, VertexId(1));
                assert_eq!(t, VertexId(4));
                assert!(!hamilton);
            }
            other => panic!("unexpected predicate: {other:?}"),
        }
    }

    #[test]
    fn parses_pure_hamiltonian_cycle() {
        let input = "n 3\ne 1 2\ne 2 3\ne 1 3\nhamilton\n";
        let (_, predicate) = parse_graph(input).expect("should parse");
        assert!(matches!(
            predicate,
            Some(PredicateSpec::StPath { endpoints: None, hamilton: true })
        ));
    }

    #[test]
    fn parses_hyperedge() {
        let input = "n 5\ne 1 2 3\ne 3 4 5\nsetcover\n";
        let (graph, predicate) = parse_graph(input).expect("should parse");
        assert!(matches!(graph.edges()[0], Edge::Hyper(_)));
        assert!(matches!(predicate, Some(PredicateSpec::SetCover)));
    }

    #[test]
    fn parses_fgeneral_block() {
        let input = "\
n 4
e 1 2
e 2 3
e 3 4
fgeneral
degree 1 1
degree 4 1
same 1 4
count 1
topology cycle_forbidden
end
";
        let (_, predicate) = parse_graph(input).expect("should parse");
        match predicate {
            Some(PredicateSpec::FGeneral(params)) => {
                assert_eq!(params.degrees[1], vec![1]);
                assert_eq!(params.topology, Topology::CycleForbidden);
                assert_eq!(params.component_counts, vec![1]);
            }
            other => panic!("unexpected predicate: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_vertex_count() {
        let input = "e 1 2\n";
        assert!(parse_graph(input).is_err());
    }

    #[test]
    fn rejects_edge_with_one_vertex() {
        let input = "n 2\ne 1\n";
        assert!(parse_graph(input).is_err());
    }

    #[test]
    fn reports_line_number_on_bad_statement() {
        let input = "n 2\nbogus\n";
        let err = parse_graph(input).expect_err("should fail");
        assert_eq!(err.line, 2);
    }

    #[test]
    fn write_then_parse_round_trips_fgeneral() {
        let input = "\
n 4
e 1 2
e 2 3
e 3 4
fgeneral
degree 1 1
degree 4 1
same 1 4
count 1
topology cycle_forbidden
end
";
        let (graph, predicate) = parse_graph(input).expect("should parse");
        let rendered = write_graph(&graph, predicate.as_ref());
        let (graph2, predicate2) = parse_graph(&rendered).expect("rendered text should re-parse");
        assert_eq!(graph, graph2);
        match (predicate, predicate2) {
            (Some(PredicateSpec::FGeneral(a)), Some(PredicateSpec::FGeneral(b))) => {
                assert_eq!(a.degrees, b.degrees);
                assert_eq!(a.topology, b.topology);
            }
            other => panic!("unexpected predicate pair: {other:?}"),
        }
    }
}
