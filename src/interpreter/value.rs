/// Complex constants with dimensions.
///
/// Defines the `Constant` type that every numeric simplification ends in,
/// together with its arithmetic, the transcendental functions built from
/// `exp` and `ln`, tolerance-aware comparison and rendering.
///
/// Additions round to the coarser operand tolerance, so values that should
/// cancel come out as exact zeros.
pub mod constant;
/// Physical dimensions.
///
/// Defines the seven SI base dimensions and the exponent maps attached to
/// constants, with the helpers that combine, scale and render them.
pub mod dimension;
