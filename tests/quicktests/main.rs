//! Property and scenario tests run against every tree through [`OrderedTree`].
//!
//! [`OrderedTree`]: search_trees::OrderedTree

mod op;
mod properties;
mod scenarios;
