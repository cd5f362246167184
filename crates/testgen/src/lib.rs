//! Randomized graph and predicate fixture generation, used by `zdd_core`'s
//! and `zdd_brute`'s property tests and by benchmarks that need a supply
//! of graphs at a given size/density instead of a handful of hand-written
//! ones.

pub mod generator;

pub use generator::{
    generate_mult_fixtures, generate_random_graph, random_fgeneral_fixture, random_setcover_fixture,
    random_setpartition_fixture, random_stpath_fixture, Fixture, GraphParams,
};
