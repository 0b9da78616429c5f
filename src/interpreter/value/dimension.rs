use std::{collections::BTreeMap, fmt::Display};

/// Exponent map from base dimension to power. Zero powers are never stored, so
/// two maps describe the same physical quantity iff they are equal.
pub type Dimensions = BTreeMap<Dimension, i32>;

/// One of the seven SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    /// `L`, measured in metres.
    Length,
    /// `M`, measured in kilograms.
    Mass,
    /// `T`, measured in seconds.
    Time,
    /// `I`, measured in amperes.
    Current,
    /// `Θ`, measured in kelvin.
    Temperature,
    /// `N`, measured in moles.
    Amount,
    /// `J`, measured in candela.
    Luminosity,
}

impl Dimension {
    /// The conventional single-letter symbol of the dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "L",
            Self::Mass => "M",
            Self::Time => "T",
            Self::Current => "I",
            Self::Temperature => "Θ",
            Self::Amount => "N",
            Self::Luminosity => "J",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combines two exponent maps by adding `scale * right` into `left`, dropping
/// every entry whose power cancels to zero.
///
/// # Example
/// ```
/// use mathnote::interpreter::value::dimension::{Dimension, Dimensions, combine};
///
/// let mut speed = Dimensions::from([(Dimension::Length, 1), (Dimension::Time, -1)]);
/// let time = Dimensions::from([(Dimension::Time, 1)]);
///
/// combine(&mut speed, &time, 1);
/// assert_eq!(speed, Dimensions::from([(Dimension::Length, 1)]));
/// ```
pub fn combine(left: &mut Dimensions, right: &Dimensions, scale: i32) {
    for (dimension, power) in right {
        let entry = left.entry(*dimension).or_insert(0);
        *entry += power * scale;
        if *entry == 0 {
            left.remove(dimension);
        }
    }
}

/// Multiplies every power by `factor`.
#[must_use]
pub fn scaled(dimensions: &Dimensions, factor: i32) -> Dimensions {
    if factor == 0 {
        return Dimensions::new();
    }
    dimensions.iter()
              .map(|(dimension, power)| (*dimension, power * factor))
              .collect()
}

/// Divides every power by `divisor`, or returns `None` if any power is not a
/// multiple of it.
#[must_use]
pub fn divided(dimensions: &Dimensions, divisor: i32) -> Option<Dimensions> {
    if divisor == 0 {
        return None;
    }
    dimensions.iter()
              .map(|(dimension, power)| {
                  (power % divisor == 0).then_some((*dimension, power / divisor))
              })
              .collect()
}

/// Renders an exponent map as ` [L^2 T^-1]`, or an empty string when the map
/// is dimensionless.
#[must_use]
pub fn render(dimensions: &Dimensions) -> String {
    if dimensions.is_empty() {
        return String::new();
    }
    let parts = dimensions.iter()
                          .map(|(dimension, power)| {
                              if *power == 1 {
                                  dimension.to_string()
                              } else {
                                  format!("{dimension}^{power}")
                              }
                          })
                          .collect::<Vec<_>>();
    format!(" [{}]", parts.join(" "))
}
