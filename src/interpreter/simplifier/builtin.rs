use std::fmt::Display;

use crate::{
    error::SimplifyError,
    interpreter::{
        simplifier::core::SimplifyResult,
        value::constant::{Constant, TEN},
    },
};

/// Type alias for built-in function handlers.
///
/// A built-in receives its simplified constant argument and returns the
/// resulting constant.
type BuiltinFn = fn(&Constant) -> SimplifyResult<Constant>;

/// Defines the built-in functions by generating the `BuiltInFunction` enum,
/// its name lookup and its dispatch.
///
/// Each entry provides:
/// - a string name, as written in notation,
/// - the enum variant,
/// - a function pointer implementing the built-in.
///
/// The macro also produces `BUILTIN_FUNCTIONS`, the list of every name.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident : $func:expr
        ),* $(,)?
    ) => {
        /// A function from the closed registry of standard functions.
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum BuiltInFunction {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        /// Names of every built-in function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl BuiltInFunction {
            /// Looks a built-in up by the name it is written with.
            ///
            /// # Example
            /// ```
            /// use mathnote::interpreter::simplifier::builtin::BuiltInFunction;
            ///
            /// assert_eq!(BuiltInFunction::from_name("sin"), Some(BuiltInFunction::Sin));
            /// assert_eq!(BuiltInFunction::from_name("f"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The name the built-in is written with.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            const fn handler(self) -> BuiltinFn {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    "sin"   => Sin:   sin,
    "cos"   => Cos:   cos,
    "tan"   => Tan:   tan,
    "asin"  => Asin:  asin,
    "acos"  => Acos:  acos,
    "atan"  => Atan:  atan,
    "sinh"  => Sinh:  sinh,
    "cosh"  => Cosh:  cosh,
    "tanh"  => Tanh:  tanh,
    "asinh" => Asinh: asinh,
    "acosh" => Acosh: acosh,
    "atanh" => Atanh: atanh,
    "exp"   => Exp:   exp,
    "log"   => Log:   log,
    "re"    => Re:    re,
    "im"    => Im:    im,
    "abs"   => Abs:   abs,
    "arg"   => Arg:   arg,
    "floor" => Floor: floor,
}

impl BuiltInFunction {
    /// Evaluates the built-in on a constant.
    ///
    /// # Errors
    /// Fails with `DimensionedArgument` when a transcendental function gets a
    /// dimensioned value, and with the kernel's errors at poles.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::{
    ///     simplifier::builtin::BuiltInFunction,
    ///     value::constant::Constant,
    /// };
    ///
    /// let r = BuiltInFunction::Log.apply(&Constant::real(1000.0)).unwrap();
    /// assert_eq!(r.to_string(), "3");
    /// ```
    pub fn apply(self, argument: &Constant) -> SimplifyResult<Constant> {
        (self.handler())(argument)
    }
}

impl Display for BuiltInFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rejects dimensioned arguments of transcendental functions.
fn dimensionless<'c>(function: &str, z: &'c Constant) -> SimplifyResult<&'c Constant> {
    if z.is_dimensionless() {
        Ok(z)
    } else {
        Err(SimplifyError::DimensionedArgument { function: function.to_string(),
                                                 value:    z.to_string(), })
    }
}

/// Generates a built-in that applies a kernel function to a dimensionless
/// argument. The `fallible` form is for kernel functions that can fail.
macro_rules! transcendental_builtin {
    ($fname:ident) => {
        fn $fname(z: &Constant) -> SimplifyResult<Constant> {
            Ok(dimensionless(stringify!($fname), z)?.$fname())
        }
    };
    (fallible $fname:ident) => {
        fn $fname(z: &Constant) -> SimplifyResult<Constant> {
            dimensionless(stringify!($fname), z)?.$fname()
        }
    };
}

transcendental_builtin!(sin);
transcendental_builtin!(cos);
transcendental_builtin!(fallible tan);
transcendental_builtin!(asin);
transcendental_builtin!(acos);
transcendental_builtin!(fallible atan);
transcendental_builtin!(sinh);
transcendental_builtin!(cosh);
transcendental_builtin!(fallible tanh);
transcendental_builtin!(asinh);
transcendental_builtin!(acosh);
transcendental_builtin!(fallible atanh);
transcendental_builtin!(exp);

/// The base-10 logarithm.
fn log(z: &Constant) -> SimplifyResult<Constant> {
    if dimensionless("log", z)?.is_zero() {
        return Err(SimplifyError::LogarithmOfZero);
    }
    z.ln().divided_by(&TEN.ln())
}

#[allow(clippy::unnecessary_wraps)]
fn re(z: &Constant) -> SimplifyResult<Constant> {
    Ok(z.re())
}

#[allow(clippy::unnecessary_wraps)]
fn im(z: &Constant) -> SimplifyResult<Constant> {
    Ok(z.im())
}

#[allow(clippy::unnecessary_wraps)]
fn abs(z: &Constant) -> SimplifyResult<Constant> {
    Ok(z.abs())
}

#[allow(clippy::unnecessary_wraps)]
fn arg(z: &Constant) -> SimplifyResult<Constant> {
    Ok(z.arg())
}

#[allow(clippy::unnecessary_wraps)]
fn floor(z: &Constant) -> SimplifyResult<Constant> {
    Ok(z.floor())
}
