//! Text DSL for graph/hypergraph description files: a vertex count, an
//! edge list, and an optional predicate parameter block.
//!
//! Grammar (one statement per line, blank lines and `#`-comments ignored):
//!
//! ```text
//! graph           = vertex_count edge* predicate_block?
//! vertex_count    = "n" INTEGER
//! edge            = "e" INTEGER INTEGER+        -- 2 ids: plain edge, >2: hyperedge
//! predicate_block = stpath_block | hamilton_block | fgeneral_block
//!                 | "setpartition" | "setcover"
//! stpath_block    = "stpath" INTEGER INTEGER
//! hamilton_block  = "hamilton" (INTEGER INTEGER)?
//! fgeneral_block  = "fgeneral" fgeneral_line* "end"
//! fgeneral_line   = "degree" INTEGER INTEGER*
//!                 | "same" INTEGER INTEGER
//!                 | "diff" INTEGER INTEGER
//!                 | "count" INTEGER*
//!                 | "size" INTEGER*
//!                 | "topology" ("cycle_ok" | "cycle_forbidden")
//! ```

pub mod parser;

pub use parser::{parse_graph, write_graph, ParseError, PredicateSpec};
