/// Core simplification logic.
///
/// Defines the `SimplifyResult` type and the entry points that simplify
/// statements and dispatch on every expression variant.
pub mod core;

/// Operation simplification.
///
/// Implements the arithmetic of each operator on constants and vectors, and
/// the identities that apply when operands stay symbolic.
pub mod operation;

/// Comparison simplification.
///
/// Implements assignments, function definitions and range bindings, and the
/// numeric decision of every other relation chain.
pub mod comparison;

/// Function call and locus simplification.
///
/// Evaluates user function bodies in localized workspaces and keeps bound
/// names of a locus symbolic.
pub mod function;

/// Built-in function registry.
///
/// Declares the closed set of standard functions and how each applies to a
/// constant.
pub mod builtin;
