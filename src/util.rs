/// Numeric conversion helpers.
///
/// This module provides safe functions for converting floating-point values
/// to integers without risking silent data loss, and for recognising values
/// that lie within a tolerance of an integer.
///
/// All functions return an `Option`, which is `Some` only if the conversion is
/// exact and in range.
pub mod num;
