use mathnote::{
    error::{ErrorKind, SimplifyError},
    interpreter::value::{
        constant::{Constant, E, I, MATCH_FACTOR, ONE, PI, TWO, ZERO},
        dimension::{Dimension, Dimensions},
    },
};
use pretty_assertions::assert_eq;

fn samples() -> Vec<Constant> {
    vec![Constant::real(2.0),
         Constant::real(-4.0),
         Constant::real(0.1),
         Constant::real(1234.5678),
         Constant::new(3.0, 4.0),
         Constant::new(0.5, -2.0),
         Constant::new(-1.25, 0.75),
         I]
}

fn length() -> Dimensions {
    Dimensions::from([(Dimension::Length, 1)])
}

#[test]
fn addition_cancels_back_to_zero() {
    for a in samples() {
        for b in samples() {
            let sum = a.plus(&b).unwrap();
            let back = sum.negative().plus(&b).unwrap().plus(&a).unwrap();
            let tolerance = sum.tolerance().max(a.tolerance()).max(b.tolerance());
            assert!(back.magnitude() <= MATCH_FACTOR * tolerance,
                    "{a} and {b} left {back}");
        }
    }
}

#[test]
fn square_roots_square_back() {
    for a in samples() {
        let root = a.sqrt().unwrap();
        assert!(root.times(&root).approx_eq(&a), "sqrt({a}) = {root}");
    }
}

#[test]
fn reciprocal_of_zero_is_an_arithmetic_error() {
    let error = ZERO.recip().unwrap_err();
    assert!(matches!(error, SimplifyError::DivisionByZero { .. }));
    assert_eq!(error.kind(), ErrorKind::Arithmetic);
    assert!(Constant::new(0.0, -0.0).recip().is_err());
}

#[test]
fn reciprocal_inverts() {
    for a in samples() {
        assert!(a.times(&a.recip().unwrap()).approx_eq(&ONE), "{a}");
    }
}

#[test]
fn tolerance_is_a_power_of_two() {
    for a in samples() {
        let tolerance = a.tolerance();
        assert!(tolerance > 0.0);
        assert_eq!(tolerance.log2().fract(), 0.0);
        assert!(tolerance <= a.magnitude() * 2f64.powi(-51));
    }
    assert_eq!(ZERO.tolerance(), 0.0);
}

#[test]
fn rendering() {
    assert_eq!(Constant::real(14.0).to_string(), "14");
    assert_eq!(Constant::real(-2.5).to_string(), "-2.5");
    assert_eq!(Constant::new(0.0, 2.0).to_string(), "2i");
    assert_eq!(Constant::new(3.0, 4.0).to_string(), "(3 + 4i)");
    assert_eq!(Constant::real(255.0).with_radix(16).to_string(), "ff");
    assert_eq!(Constant::real(-5.0).with_radix(2).to_string(), "-101");
    assert_eq!(Constant::real(3.0).with_dimensions(Dimensions::from([(Dimension::Length, 2),
                                                                    (Dimension::Time, -1)]))
                                  .to_string(),
               "3 [L^2 T^-1]");
}

#[test]
fn near_integers_render_as_integers() {
    assert_eq!(Constant::real(2.000_000_000_000_000_4).to_string(), "2");
    assert_eq!(Constant::real(1.0 / 3.0).to_string(), (1.0f64 / 3.0).to_string());
}

#[test]
fn dimensions_follow_the_arithmetic() {
    let metres = Constant::real(3.0).with_dimensions(length());
    let area = metres.times(&metres);
    assert_eq!(area.dimensions, Dimensions::from([(Dimension::Length, 2)]));

    let side = area.sqrt().unwrap();
    assert!(side.approx_eq(&metres), "sqrt({area}) = {side}");
    assert!(metres.divided_by(&metres).unwrap().is_dimensionless());
    assert_eq!(metres.powi(3).unwrap().dimensions, Dimensions::from([(Dimension::Length, 3)]));
    assert_eq!(metres.recip().unwrap().dimensions, Dimensions::from([(Dimension::Length, -1)]));
    assert_eq!(metres.abs().dimensions, length());
}

#[test]
fn dimension_mismatches_are_errors() {
    let metres = Constant::real(3.0).with_dimensions(length());

    assert!(matches!(metres.plus(&ONE), Err(SimplifyError::IncompatibleDimensions { .. })));
    assert!(matches!(metres.sqrt(), Err(SimplifyError::DimensionedArgument { .. })));
    assert!(matches!(TWO.pow(&metres), Err(SimplifyError::DimensionedArgument { .. })));
    assert!(matches!(metres.pow(&Constant::real(0.5)),
                     Err(SimplifyError::DimensionedArgument { .. })));
    assert!(!metres.approx_eq(&Constant::real(3.0)));
}

#[test]
fn integer_powers_are_exact() {
    assert_eq!(Constant::real(3.0).powi(4).unwrap(), Constant::real(81.0));
    assert_eq!(I.powi(2).unwrap(), Constant::real(-1.0));
    assert_eq!(Constant::real(7.0).powi(0).unwrap(), ONE);
    assert!(matches!(ZERO.powi(-2), Err(SimplifyError::DivisionByZero { .. })));
    assert!(matches!(Constant::real(10.0).powi(400), Err(SimplifyError::Overflow { .. })));
}

#[test]
fn transcendental_identities() {
    assert!(E.ln().approx_eq(&ONE));
    assert!(ZERO.exp().approx_eq(&ONE));
    assert!(PI.rot90(1).exp().approx_eq(&Constant::real(-1.0)));
    assert!(PI.cos().approx_eq(&Constant::real(-1.0)));

    let x = Constant::real(0.3);
    assert!(x.sin().asin().approx_eq(&x));
    assert!(x.tan().unwrap().atan().unwrap().approx_eq(&x));
    assert!(x.sinh().asinh().approx_eq(&x));
    assert!(x.tanh().unwrap().atanh().unwrap().approx_eq(&x));
}

#[test]
fn roots() {
    assert_eq!(Constant::real(-9.0).sqrt().unwrap().to_string(), "3i");
    assert!(Constant::real(8.0).root(&Constant::real(3.0)).unwrap().approx_eq(&TWO));
    assert!(ZERO.root(&Constant::real(3.0)).unwrap().is_zero());
}

#[test]
fn argument_stays_in_one_turn() {
    for z in [Constant::new(1.0, 1.0),
              Constant::new(-1.0, 1.0),
              Constant::new(-1.0, -1.0),
              Constant::new(1.0, -1.0)]
    {
        let arg = z.arg().real;
        assert!((0.0..std::f64::consts::TAU).contains(&arg), "arg({z}) = {arg}");
    }
    assert_eq!(ZERO.arg(), ZERO);
}

#[test]
fn floor_and_modulo() {
    assert_eq!(Constant::real(2.7).floor(), Constant::real(2.0));
    assert_eq!(Constant::real(-2.7).floor(), Constant::real(-2.0));
    assert!(Constant::new(3.0, 4.0).floor().approx_eq(&Constant::new(3.0, 4.0)));

    assert_eq!(Constant::real(7.5).modulo(&TWO).unwrap(), Constant::real(1.5));
    assert!(TWO.modulo(&ZERO).is_err());
}
