//! # descent
//!
//! The algorithmic core of a recursive-descent parsing visualizer for
//! arithmetic expressions: lexing, traced LL(1) parsing, and tree-layout
//! geometry. Rendering and animation live in downstream consumers; this
//! crate only produces the data they draw.
//!
//! ## Testing
//!
//! For the shared test helpers (token builders, tree-shape assertions), see
//! the [testing module](expr::testing). Parser tests assert on tree shape
//! and step traces, not on node counts.

pub mod expr;
