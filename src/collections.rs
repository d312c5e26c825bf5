use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;


/// Use indexmap for insertion-ordered sets and rustc_hash for fast hashing
pub(crate) type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
