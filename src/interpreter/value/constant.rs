use std::{
    f64::consts,
    fmt::Display,
    hash::{Hash, Hasher},
};

use ordered_float::OrderedFloat;

use crate::{
    error::SimplifyError,
    interpreter::{
        simplifier::core::SimplifyResult,
        value::dimension::{self, Dimensions},
    },
    util::num::{f64_to_i32_checked, integral_value},
};

/// Relative floating-point epsilon used to derive tolerances (`2^-51`).
pub const RELATIVE_EPSILON: f64 = 4.440_892_098_500_626e-16;
/// Number of tolerances two constants may differ by and still match.
pub const MATCH_FACTOR: f64 = 64.0;

/// `0` as a constant.
pub const ZERO: Constant = Constant::new(0.0, 0.0);
/// `1` as a constant.
pub const ONE: Constant = Constant::new(1.0, 0.0);
/// `-1` as a constant.
pub const NEG_ONE: Constant = Constant::new(-1.0, 0.0);
/// `2` as a constant.
pub const TWO: Constant = Constant::new(2.0, 0.0);
/// `10` as a constant.
pub const TEN: Constant = Constant::new(10.0, 0.0);
/// The imaginary unit.
pub const I: Constant = Constant::new(0.0, 1.0);
/// `π` as a constant.
pub const PI: Constant = Constant::new(consts::PI, 0.0);
/// `τ = 2π` as a constant.
pub const TAU: Constant = Constant::new(consts::TAU, 0.0);
/// Euler's number as a constant.
pub const E: Constant = Constant::new(consts::E, 0.0);

/// A complex number with physical dimensions attached.
///
/// Constants are the terminal values of simplification. Additions round their
/// result to the coarser tolerance of the two operands, so that cancellation
/// loses significant figures instead of leaving floating-point residue.
#[derive(Debug, Clone)]
pub struct Constant {
    /// The real part.
    pub real:       f64,
    /// The imaginary part.
    pub imaginary:  f64,
    /// Powers of the SI base dimensions.
    pub dimensions: Dimensions,
    /// The radix integral parts are rendered in.
    pub radix:      u32,
}

impl Constant {
    /// Constructs a dimensionless constant.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let c = Constant::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// assert_eq!(c.radix, 10);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real,
               imaginary,
               dimensions: Dimensions::new(),
               radix: 10 }
    }

    /// Constructs a dimensionless real constant.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Constructs a constant whose parts are snapped to the nearest multiple
    /// of `tolerance`. A zero or non-finite tolerance leaves the parts as they
    /// are.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let c = Constant::rounded(2.3, 0.76, 0.5);
    /// assert_eq!(c, Constant::new(2.5, 1.0));
    /// ```
    #[must_use]
    pub fn rounded(real: f64, imaginary: f64, tolerance: f64) -> Self {
        if tolerance == 0.0 || !tolerance.is_finite() {
            return Self::new(real, imaginary);
        }
        Self::new((real / tolerance).round() * tolerance,
                  (imaginary / tolerance).round() * tolerance)
    }

    /// Returns the same value carrying the given dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        dimensions.iter()
                  .filter(|(_, power)| **power != 0)
                  .for_each(|(dimension, power)| {
                      self.dimensions.insert(*dimension, *power);
                  });
        self
    }

    /// Returns the same value rendered in another radix.
    #[must_use]
    pub fn with_radix(mut self, radix: u32) -> Self {
        self.radix = radix.clamp(2, 36);
        self
    }

    /// Whether both constants carry the same dimensions.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
    }

    /// Whether the constant carries no dimensions.
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Whether the imaginary part vanishes.
    #[must_use]
    pub fn is_real(&self) -> bool {
        self.imaginary == 0.0
    }

    /// Whether the constant is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Whether the constant is exactly a dimensionless one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.real == 1.0 && self.imaginary == 0.0 && self.is_dimensionless()
    }

    /// The integral value of a real constant, if it has one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        if !self.is_real() {
            return None;
        }
        f64_to_i32_checked(self.real)
    }

    /// The magnitude `|z|` as a plain float.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// The rounding granularity of this constant: the power of two nearest
    /// below `|z| * 2^-51`. Zero and non-finite values have no tolerance.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// assert_eq!(Constant::real(1.0).tolerance(), 2f64.powi(-51));
    /// assert_eq!(Constant::real(12.0).tolerance(), 2f64.powi(-48));
    /// assert_eq!(Constant::real(0.0).tolerance(), 0.0);
    /// ```
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return 0.0;
        }
        f64_to_i32_checked(magnitude.log2().floor()).map_or(0.0, |binade| {
                                                            2f64.powi(binade) * RELATIVE_EPSILON
                                                        })
    }

    /// Whether two constants are equal within their tolerances.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let a = Constant::real(3.0);
    /// assert!(a.approx_eq(&Constant::real(3.0 + 1e-15)));
    /// assert!(!a.approx_eq(&Constant::real(3.001)));
    /// ```
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        if !self.matches(other) {
            return false;
        }
        if self.real == other.real && self.imaginary == other.imaginary {
            return true;
        }
        let bound = MATCH_FACTOR * self.tolerance().max(other.tolerance());
        (self.real - other.real).abs() <= bound
        && (self.imaginary - other.imaginary).abs() <= bound
    }

    /// Snaps the value to its own tolerance.
    fn snapped(self) -> Self {
        let tolerance = self.tolerance();
        Self::rounded(self.real, self.imaginary, tolerance).with_dimensions(self.dimensions)
    }

    /// Adds two dimensionless values with tolerance rounding.
    fn sum(&self, other: &Self) -> Self {
        Self::rounded(self.real + other.real,
                      self.imaginary + other.imaginary,
                      self.tolerance().max(other.tolerance()))
    }

    /// Adds two constants, rounding the result to the coarser tolerance of
    /// the operands.
    ///
    /// # Errors
    /// Fails with `IncompatibleDimensions` when the dimensions differ.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::{Constant, MATCH_FACTOR};
    ///
    /// let a = Constant::new(3.7, -1.2);
    /// let b = Constant::new(0.4, 2.9);
    /// let sum = a.plus(&b).unwrap();
    /// let back = sum.negative().plus(&b).unwrap().plus(&a).unwrap();
    ///
    /// let tolerance = sum.tolerance().max(a.tolerance()).max(b.tolerance());
    /// assert!(back.magnitude() <= MATCH_FACTOR * tolerance);
    /// ```
    pub fn plus(&self, other: &Self) -> SimplifyResult<Self> {
        if !self.matches(other) {
            return Err(SimplifyError::IncompatibleDimensions { operation: "add",
                                                               left:      self.to_string(),
                                                               right:     other.to_string(), });
        }
        Ok(self.sum(other).with_dimensions(self.dimensions.clone()))
    }

    /// Returns `-z`.
    #[must_use]
    pub fn negative(&self) -> Self {
        Self::new(-self.real, -self.imaginary).with_dimensions(self.dimensions.clone())
    }

    /// Multiplies two constants; dimension powers add.
    #[must_use]
    pub fn times(&self, other: &Self) -> Self {
        let mut dimensions = self.dimensions.clone();
        dimension::combine(&mut dimensions, &other.dimensions, 1);
        Self::new(self.real.mul_add(other.real, -(self.imaginary * other.imaginary)),
                  self.real.mul_add(other.imaginary, self.imaginary * other.real))
            .with_dimensions(dimensions)
    }

    /// Returns `1/z`; dimension powers negate.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when the magnitude is zero.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::{Constant, ZERO};
    ///
    /// assert_eq!(Constant::real(4.0).recip().unwrap(), Constant::real(0.25));
    /// assert!(ZERO.recip().is_err());
    /// ```
    pub fn recip(&self) -> SimplifyResult<Self> {
        let squared = self.real.mul_add(self.real, self.imaginary * self.imaginary);
        if squared == 0.0 {
            return Err(SimplifyError::DivisionByZero { operation: format!("1/{self}") });
        }
        Ok(Self::new(self.real / squared, -(self.imaginary / squared))
            .with_dimensions(dimension::scaled(&self.dimensions, -1)))
    }

    /// Returns `self / other`.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when `other` is zero.
    pub fn divided_by(&self, other: &Self) -> SimplifyResult<Self> {
        let denominator = other.real.mul_add(other.real, other.imaginary * other.imaginary);
        if denominator == 0.0 {
            return Err(SimplifyError::DivisionByZero { operation: format!("{self}/{other}") });
        }
        let mut dimensions = self.dimensions.clone();
        dimension::combine(&mut dimensions, &other.dimensions, -1);
        Ok(Self::new(self.real.mul_add(other.real, self.imaginary * other.imaginary) / denominator,
                     self.imaginary.mul_add(other.real, -(self.real * other.imaginary))
                     / denominator).with_dimensions(dimensions))
    }

    /// Returns `a - floor(a/b)*b` using the generalized complex floor.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` when `other` is zero, and with
    /// `IncompatibleDimensions` when the operands do not match.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let r = Constant::real(7.0).modulo(&Constant::real(3.0)).unwrap();
    /// assert_eq!(r, Constant::real(1.0));
    /// ```
    pub fn modulo(&self, other: &Self) -> SimplifyResult<Self> {
        if other.is_zero() {
            return Err(SimplifyError::DivisionByZero { operation: format!("{self}%{other}") });
        }
        let quotient = self.divided_by(other)?.floor();
        self.plus(&quotient.times(other).negative())
    }

    /// Scales `z` towards zero so its magnitude becomes `floor(|z|)`. Real
    /// values keep their sign, so negative reals truncate towards zero.
    #[must_use]
    pub fn floor(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return self.clone();
        }
        if self.is_real() {
            return Self::real(self.real.signum() * magnitude.floor())
                .with_dimensions(self.dimensions.clone());
        }
        let scale = magnitude.floor() / magnitude;
        Self::new(scale * self.real, scale * self.imaginary)
            .with_dimensions(self.dimensions.clone())
    }

    /// Returns `e^z`.
    #[must_use]
    pub fn exp(&self) -> Self {
        let magnitude = self.real.exp();
        Self::new(magnitude * self.imaginary.cos(), magnitude * self.imaginary.sin()).snapped()
    }

    /// Returns the logarithm with the argument taken in `[0, 2π)`. The
    /// logarithm of zero has real part `-inf`.
    #[must_use]
    pub fn ln(&self) -> Self {
        Self::new(self.magnitude().ln(), argument(self.imaginary, self.real)).snapped()
    }

    /// `exp(ln(z)/2)` without dimension bookkeeping.
    fn principal_sqrt(&self) -> Self {
        if self.is_zero() {
            return ZERO;
        }
        self.ln().times(&Self::real(0.5)).exp()
    }

    /// Returns the principal square root; dimension powers halve.
    ///
    /// # Errors
    /// Fails with `DimensionedArgument` when a dimension has an odd power.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// assert_eq!(Constant::real(-4.0).sqrt().unwrap().to_string(), "2i");
    /// ```
    pub fn sqrt(&self) -> SimplifyResult<Self> {
        let dimensions = dimension::divided(&self.dimensions, 2).ok_or_else(|| {
                             SimplifyError::DimensionedArgument { function: "sqrt".to_string(),
                                                                  value:    self.to_string(), }
                         })?;
        Ok(self.principal_sqrt().with_dimensions(dimensions))
    }

    /// Raises the constant to an integer power by repeated squaring.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` for a negative power of zero and with
    /// `Overflow` when the result is not finite.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// assert_eq!(Constant::real(2.0).powi(10).unwrap(), Constant::real(1024.0));
    /// assert_eq!(Constant::real(2.0).powi(-1).unwrap(), Constant::real(0.5));
    /// ```
    pub fn powi(&self, exponent: i32) -> SimplifyResult<Self> {
        let dimensions = dimension::scaled(&self.dimensions, exponent);
        if exponent == 0 {
            return Ok(ONE);
        }
        if self.is_zero() && exponent < 0 {
            return Err(SimplifyError::DivisionByZero { operation: format!("{self}^{exponent}") });
        }

        let overflow = || SimplifyError::Overflow { operation: format!("{self}^{exponent}") };
        let mut base = Self::new(self.real, self.imaginary);
        let mut result = ONE;
        let mut n = exponent.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result = result.times(&base);
                if !result.is_finite() {
                    return Err(overflow());
                }
            }
            n /= 2;
            if n > 0 {
                base = base.times(&base);
                if !base.is_finite() {
                    return Err(overflow());
                }
            }
        }

        if exponent < 0 {
            result = result.recip()?;
        }
        Ok(result.with_dimensions(dimensions))
    }

    /// Raises the constant to an arbitrary power. Integral real exponents use
    /// [`Constant::powi`]; everything else goes through [`Constant::powc`].
    ///
    /// # Errors
    /// Fails with `DimensionedArgument` when the exponent has dimensions, or
    /// when a dimensioned base is raised to a non-integral power, and with
    /// `DivisionByZero` for zero raised to a power without positive real part.
    pub fn pow(&self, exponent: &Self) -> SimplifyResult<Self> {
        if !exponent.is_dimensionless() {
            return Err(SimplifyError::DimensionedArgument { function: "^".to_string(),
                                                            value:    exponent.to_string(), });
        }
        if let Some(n) = exponent.as_integer() {
            return self.powi(n);
        }
        if !self.is_dimensionless() {
            return Err(SimplifyError::DimensionedArgument { function: "^".to_string(),
                                                            value:    self.to_string(), });
        }
        if self.is_zero() {
            if exponent.real > 0.0 {
                return Ok(ZERO);
            }
            return Err(SimplifyError::DivisionByZero { operation: format!("{self}^{exponent}") });
        }
        Ok(self.powc(exponent))
    }

    /// Returns `exp(b ln z)` for a dimensionless base.
    #[must_use]
    pub fn powc(&self, exponent: &Self) -> Self {
        exponent.times(&self.ln()).exp()
    }

    /// Returns the `degree`-th root.
    ///
    /// # Errors
    /// Fails like [`Constant::pow`] with the reciprocal degree, and with
    /// `DivisionByZero` for a zero degree.
    pub fn root(&self, degree: &Self) -> SimplifyResult<Self> {
        if degree.is_real() && degree.real == 2.0 {
            return self.sqrt();
        }
        if let Some(n) = degree.as_integer()
           && let Some(dimensions) = dimension::divided(&self.dimensions, n)
        {
            let value = Self::new(self.real, self.imaginary).pow(&degree.recip()?)?;
            return Ok(value.with_dimensions(dimensions));
        }
        self.pow(&degree.recip()?)
    }

    /// Multiplies by `i^turns`.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let z = Constant::new(1.0, 2.0);
    /// assert_eq!(z.rot90(1), Constant::new(-2.0, 1.0));
    /// assert_eq!(z.rot90(-1), Constant::new(2.0, -1.0));
    /// assert_eq!(z.rot90(4), z);
    /// ```
    #[must_use]
    pub fn rot90(&self, turns: i32) -> Self {
        let (real, imaginary) = match turns.rem_euclid(4) {
            0 => (self.real, self.imaginary),
            1 => (-self.imaginary, self.real),
            2 => (-self.real, -self.imaginary),
            _ => (self.imaginary, -self.real),
        };
        Self::new(real, imaginary).with_dimensions(self.dimensions.clone())
    }

    /// Returns `sinh z = (e^z - e^-z) / 2`.
    #[must_use]
    pub fn sinh(&self) -> Self {
        self.exp().sum(&self.negative().exp().negative()).times(&Self::real(0.5))
    }

    /// Returns `cosh z = (e^z + e^-z) / 2`.
    #[must_use]
    pub fn cosh(&self) -> Self {
        self.exp().sum(&self.negative().exp()).times(&Self::real(0.5))
    }

    /// Returns `tanh z = sinh z / cosh z`.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` at the poles.
    pub fn tanh(&self) -> SimplifyResult<Self> {
        self.sinh().divided_by(&self.cosh())
    }

    /// Returns `asinh z = ln(z + sqrt(z² + 1))`.
    #[must_use]
    pub fn asinh(&self) -> Self {
        self.times(self).sum(&ONE).principal_sqrt().sum(self).ln()
    }

    /// Returns `acosh z = ln(z + sqrt(z² - 1))`.
    #[must_use]
    pub fn acosh(&self) -> Self {
        self.times(self).sum(&NEG_ONE).principal_sqrt().sum(self).ln()
    }

    /// Returns `atanh z = ln(sqrt((1 + z) / (1 - z)))`.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` at `z = 1`.
    pub fn atanh(&self) -> SimplifyResult<Self> {
        Ok(ONE.sum(self).divided_by(&ONE.sum(&self.negative()))?.principal_sqrt().ln())
    }

    /// Returns `sin z = -i sinh(iz)`.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::{Constant, PI, ZERO};
    ///
    /// assert!(PI.sin().approx_eq(&ZERO));
    /// assert!(Constant::real(std::f64::consts::FRAC_PI_2).sin().approx_eq(&Constant::real(1.0)));
    /// ```
    #[must_use]
    pub fn sin(&self) -> Self {
        self.rot90(1).sinh().rot90(-1)
    }

    /// Returns `cos z = cosh(iz)`.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.rot90(1).cosh()
    }

    /// Returns `tan z = sin z / cos z`.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` where the cosine vanishes exactly.
    pub fn tan(&self) -> SimplifyResult<Self> {
        self.sin().divided_by(&self.cos())
    }

    /// Returns `asin z = -i asinh(iz)`.
    #[must_use]
    pub fn asin(&self) -> Self {
        self.rot90(1).asinh().rot90(-1)
    }

    /// Returns `acos z = -i acosh z`.
    #[must_use]
    pub fn acos(&self) -> Self {
        self.acosh().rot90(-1)
    }

    /// Returns `atan z = -i atanh(iz)`.
    ///
    /// # Errors
    /// Fails with `DivisionByZero` at `z = -i`.
    pub fn atan(&self) -> SimplifyResult<Self> {
        Ok(self.rot90(1).atanh()?.rot90(-1))
    }

    /// The real part, with the dimensions kept.
    #[must_use]
    pub fn re(&self) -> Self {
        Self::real(self.real).with_dimensions(self.dimensions.clone())
    }

    /// The imaginary part, with the dimensions kept.
    #[must_use]
    pub fn im(&self) -> Self {
        Self::real(self.imaginary).with_dimensions(self.dimensions.clone())
    }

    /// The magnitude, with the dimensions kept.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// assert_eq!(Constant::new(3.0, 4.0).abs(), Constant::real(5.0));
    /// ```
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::real(self.magnitude()).with_dimensions(self.dimensions.clone())
    }

    /// The argument in `[0, 2π)`.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::value::constant::Constant;
    ///
    /// let arg = Constant::new(0.0, -1.0).arg();
    /// assert!((arg.real - 1.5 * std::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn arg(&self) -> Self {
        Self::real(argument(self.imaginary, self.real))
    }

    /// Whether both components are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }
}

/// Angle of `(x, y)` in `[0, 2π)`. The quadrant is decided with explicit
/// comparisons so that a negative zero never moves a value across the branch
/// cut.
fn argument(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        0.0
    } else if x >= 0.0 && y >= 0.0 {
        (y / x).atan()
    } else if x < 0.0 {
        (y / x).atan() + consts::PI
    } else {
        (y / x).atan() + consts::TAU
    }
}

/// Renders one component, printing values within tolerance of an integer
/// without a decimal point.
fn format_component(value: f64, tolerance: f64, radix: u32) -> String {
    match integral_value(value, MATCH_FACTOR * tolerance) {
        Some(n) if radix == 10 => n.to_string(),
        Some(n) => format_radix(n, radix),
        None => format!("{value}"),
    }
}

fn format_radix(value: i64, radix: u32) -> String {
    let mut digits = Vec::new();
    let mut rest = value.unsigned_abs();
    loop {
        let digit = u32::try_from(rest % u64::from(radix)).unwrap_or(0);
        digits.push(std::char::from_digit(digit, radix).unwrap_or('?'));
        rest /= u64::from(radix);
        if rest == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

impl Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tolerance = self.tolerance();
        let real = format_component(self.real, tolerance, self.radix);
        let imaginary = format_component(self.imaginary, tolerance, self.radix);
        let units = dimension::render(&self.dimensions);

        match (real.as_str(), imaginary.as_str()) {
            (_, "0") => write!(f, "{real}{units}"),
            ("0", _) => write!(f, "{imaginary}i{units}"),
            _ => write!(f, "({real} + {imaginary}i){units}"),
        }
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Self::real(value)
    }
}

impl PartialEq for Constant {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
        && self.dimensions == other.dimensions
    }
}

impl Eq for Constant {}

impl Hash for Constant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
        self.dimensions.hash(state);
    }
}
