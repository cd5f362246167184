use alloc::string::String;

use derive_more::From;

/// Configuration and resource errors surfaced to callers of [`crate::construct::build`].
///
/// Predicate hooks themselves never produce an `Error` (spec section 7):
/// they only ever return a three-valued [`crate::predicate::Decision`].
/// These variants cover the two error classes the engine itself can raise:
/// configuration errors, caught before construction starts, and resource
/// errors, raised mid-construction. `build` is generic over a concrete
/// `P: Predicate` chosen at compile time, so there's no runtime "unknown
/// predicate name" case here; that belongs to whatever picks a predicate
/// from a string at the edges of the system (`zdd_parser::ParseError`,
/// for the text DSL).
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Error {
    /// An edge references a vertex outside `1..=num_vertices`, or touches
    /// fewer than two distinct vertices.
    MalformedGraph,
    /// Predicate parameters are internally inconsistent (e.g. a same-component
    /// pair names a vertex that doesn't exist, or a topology value outside
    /// `{cycle_ok, cycle_forbidden}`).
    #[from]
    InvalidParameters(String),
    /// The node interning table grew past [`crate::construct::Limits::max_interned_nodes`].
    #[from(skip)]
    ResourceExhausted { limit: u64 },
}
