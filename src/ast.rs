use std::fmt::{self, Display};

use crate::{
    error::SimplifyError,
    interpreter::{
        simplifier::{builtin::BuiltInFunction, core::SimplifyResult},
        value::constant::{Constant, TWO},
        workspace::Workspace,
    },
};

/// The closed set of operators an [`Expression::Operation`] can apply.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Subtract,
    /// Unary negation (`-a`).
    Negate,
    /// Multiplication (`*`, `∗`, or implicit).
    Multiply,
    /// Division (`/`, or `\` with the operands reversed).
    Divide,
    /// Remainder (`%`).
    Modulo,
    /// Exponentiation (`^`).
    Power,
    /// Cross product (`×`).
    Cross,
    /// Absolute value or norm (`|a|`).
    Absolute,
    /// Natural logarithm (`ln(a)`).
    Ln,
    /// Root with `(radicand, degree)` operands (`sqrt(a)`).
    Root,
    /// Explicit grouping (`(a)`).
    Parentheses,
    /// A token that could not be parsed into anything.
    Error,
    /// Nothing at all.
    Null,
}

impl Operator {
    /// Number of operands the operator takes.
    ///
    /// # Example
    /// ```
    /// use mathnote::ast::Operator;
    ///
    /// assert_eq!(Operator::Null.arity(), 0);
    /// assert_eq!(Operator::Negate.arity(), 1);
    /// assert_eq!(Operator::Root.arity(), 2);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Error | Self::Null => 0,
            Self::Negate | Self::Absolute | Self::Ln | Self::Parentheses => 1,
            _ => 2,
        }
    }

    /// Binding strength used when rendering.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract | Self::Negate => 1,
            Self::Multiply | Self::Divide | Self::Modulo | Self::Cross => 2,
            Self::Power => 3,
            _ => ATOM,
        }
    }

    /// The infix glyph of a binary operator.
    const fn infix(self) -> Option<&'static str> {
        match self {
            Self::Add => Some(" + "),
            Self::Subtract => Some(" - "),
            Self::Multiply => Some("*"),
            Self::Divide => Some("/"),
            Self::Modulo => Some("%"),
            Self::Power => Some("^"),
            Self::Cross => Some(" × "),
            _ => None,
        }
    }
}

const ATOM: u8 = 4;
const LIST: u8 = 0;

/// A relation between two adjacent expressions of a [`Comparison`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `=`
    Equal,
    /// `≠`
    NotEqual,
    /// `<`
    Less,
    /// `≤`
    LessEqual,
    /// `>`
    Greater,
    /// `≥`
    GreaterEqual,
}

impl Relation {
    /// The glyph used when rendering.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "≠",
            Self::Less => "<",
            Self::LessEqual => "≤",
            Self::Greater => ">",
            Self::GreaterEqual => "≥",
        }
    }

    /// Whether the relation is `<` or `≤`.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Less | Self::LessEqual)
    }

    /// Whether the relation is `>` or `≥`.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterEqual)
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A bound variable of a [`Locus`], ranging strictly between two expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bound {
    /// The bound name.
    pub name:  String,
    /// The lower limit.
    pub lower: Expression,
    /// The upper limit.
    pub upper: Expression,
}

/// A set-builder comprehension: a template expression and the bounds of its
/// named variables.
///
/// `{x^2 : 0 < x < 5}` has template `x^2` and a single bound `x ∈ (0, 5)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locus {
    /// The expression describing each member.
    pub template: Box<Expression>,
    /// The bounds of the template's variables.
    pub bounds:   Vec<Bound>,
}

impl Locus {
    /// The names bound by this locus.
    pub fn bound_names(&self) -> impl Iterator<Item = &str> {
        self.bounds.iter().map(|bound| bound.name.as_str())
    }
}

/// An expression tree.
///
/// Expressions are immutable values; simplifying one produces a new tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A numeric constant.
    Constant(Constant),
    /// A bare name.
    Variable(String),
    /// An operator applied to its operands.
    Operation {
        /// The operator.
        operator: Operator,
        /// The operands, as many as [`Operator::arity`].
        operands: Vec<Self>,
    },
    /// A call to a user function, such as `f(x, y)`.
    Function {
        /// The function name.
        name:      String,
        /// The call arguments.
        arguments: Vec<Self>,
    },
    /// A call to a built-in function.
    BuiltIn {
        /// The function.
        function: BuiltInFunction,
        /// The argument.
        argument: Box<Self>,
    },
    /// A list of components.
    Vector {
        /// The components.
        components:  Vec<Self>,
        /// Whether the vector was written inside explicit parentheses.
        parenthetic: bool,
    },
    /// A set of distinct members.
    Set(Vec<Self>),
    /// A set-builder comprehension.
    Locus(Locus),
}

impl Expression {
    /// Builds an operation.
    #[must_use]
    pub const fn operation(operator: Operator, operands: Vec<Self>) -> Self {
        Self::Operation { operator, operands }
    }

    /// Builds a one-operand operation.
    #[must_use]
    pub fn unary(operator: Operator, operand: Self) -> Self {
        Self::operation(operator, vec![operand])
    }

    /// Builds a two-operand operation.
    #[must_use]
    pub fn binary(operator: Operator, left: Self, right: Self) -> Self {
        Self::operation(operator, vec![left, right])
    }

    /// The empty expression.
    #[must_use]
    pub const fn null() -> Self {
        Self::operation(Operator::Null, Vec::new())
    }

    /// The placeholder left by a token that could not be parsed.
    #[must_use]
    pub const fn error() -> Self {
        Self::operation(Operator::Error, Vec::new())
    }

    /// A square root.
    #[must_use]
    pub fn sqrt(radicand: Self) -> Self {
        Self::binary(Operator::Root, radicand, Self::Constant(TWO))
    }

    /// Joins two expressions into a non-parenthetic vector. Non-parenthetic
    /// vectors on either side contribute their components.
    ///
    /// # Example
    /// ```
    /// use mathnote::ast::Expression;
    ///
    /// let x = Expression::Variable("x".to_string());
    /// let y = Expression::Variable("y".to_string());
    /// let z = Expression::Variable("z".to_string());
    ///
    /// let xyz = Expression::concat(Expression::concat(x, y), z);
    /// assert_eq!(xyz.to_string(), "x, y, z");
    /// ```
    #[must_use]
    pub fn concat(left: Self, right: Self) -> Self {
        let mut components = left.into_components();
        components.extend(right.into_components());
        Self::Vector { components,
                       parenthetic: false }
    }

    /// The components of a non-parenthetic vector, or the expression itself.
    #[must_use]
    pub fn into_components(self) -> Vec<Self> {
        match self {
            Self::Vector { components,
                           parenthetic: false, } => components,
            other => vec![other],
        }
    }

    /// The constant, if the expression is one.
    #[must_use]
    pub const fn as_constant(&self) -> Option<&Constant> {
        match self {
            Self::Constant(c) => Some(c),
            _ => None,
        }
    }

    /// The name, if the expression is a bare variable.
    #[must_use]
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// The name and parameter names, if the expression is a call whose every
    /// argument is a bare variable and can therefore be defined.
    #[must_use]
    pub fn as_storable(&self) -> Option<(&str, Vec<String>)> {
        let Self::Function { name, arguments } = self else {
            return None;
        };
        arguments.iter()
                 .map(|argument| argument.as_variable().map(str::to_string))
                 .collect::<Option<Vec<_>>>()
                 .map(|parameters| (name.as_str(), parameters))
    }

    /// The `(rows, columns)` shape: `(n, 1)` for vectors and sets, `(1, 1)`
    /// for everything else.
    ///
    /// # Example
    /// ```
    /// use mathnote::parse_statement;
    /// use mathnote::ast::Statement;
    ///
    /// let Statement::Expression(e) = parse_statement("(1, 2, 3)").unwrap() else { panic!() };
    /// assert_eq!(e.shape(), (3, 1));
    /// ```
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Vector { components, .. } | Self::Set(components) => (components.len(), 1),
            Self::Operation { operator: Operator::Parentheses,
                              operands, } => operands.first().map_or((1, 1), Self::shape),
            _ => (1, 1),
        }
    }

    /// Renames free variables: every `old[i]` becomes `new[i]`. Names bound by
    /// a locus are left alone inside its template.
    #[must_use]
    pub fn replaced(&self, old: &[String], new: &[String]) -> Self {
        let rename = |expressions: &[Self]| {
            expressions.iter()
                       .map(|e| e.replaced(old, new))
                       .collect::<Vec<_>>()
        };

        match self {
            Self::Constant(_) => self.clone(),
            Self::Variable(name) => old.iter()
                                       .zip(new)
                                       .find(|(from, _)| *from == name)
                                       .map_or_else(|| self.clone(),
                                                    |(_, to)| Self::Variable(to.clone())),
            Self::Operation { operator, operands } => Self::operation(*operator, rename(operands)),
            Self::Function { name, arguments } => Self::Function { name:      name.clone(),
                                                                   arguments: rename(arguments), },
            Self::BuiltIn { function, argument } => {
                Self::BuiltIn { function: *function,
                                argument: Box::new(argument.replaced(old, new)), }
            },
            Self::Vector { components,
                           parenthetic, } => Self::Vector { components:  rename(components),
                                                            parenthetic: *parenthetic, },
            Self::Set(members) => Self::Set(rename(members)),
            Self::Locus(locus) => {
                let (free_old, free_new): (Vec<String>, Vec<String>) =
                    old.iter()
                       .zip(new)
                       .filter(|(from, _)| !locus.bound_names().any(|bound| bound == *from))
                       .map(|(from, to)| (from.clone(), to.clone()))
                       .unzip();
                let bounds = locus.bounds
                                  .iter()
                                  .map(|bound| Bound { name:  bound.name.clone(),
                                                       lower: bound.lower.replaced(old, new),
                                                       upper: bound.upper.replaced(old, new), })
                                  .collect();
                Self::Locus(Locus { template: Box::new(locus.template
                                                            .replaced(&free_old, &free_new)),
                                    bounds })
            },
        }
    }

    /// Free variable names not bound in the workspace, in order of first
    /// occurrence.
    ///
    /// # Example
    /// ```
    /// use mathnote::{ast::Statement, interpreter::workspace::Workspace, parse_statement};
    ///
    /// let Statement::Expression(e) = parse_statement("a*x + b*x + pi").unwrap() else { panic!() };
    /// assert_eq!(e.inputs(&Workspace::standard()), vec!["a", "x", "b"]);
    /// ```
    #[must_use]
    pub fn inputs(&self, workspace: &Workspace) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_inputs(workspace, &mut Vec::new(), &mut found);
        found
    }

    /// Whether the expression depends on exactly one free variable.
    #[must_use]
    pub fn is_single_variable(&self, workspace: &Workspace) -> bool {
        self.inputs(workspace).len() == 1
    }

    fn collect_inputs(&self, workspace: &Workspace, bound: &mut Vec<String>, found: &mut Vec<String>) {
        match self {
            Self::Constant(_) => {},
            Self::Variable(name) => {
                if !workspace.contains(name) && !bound.contains(name) && !found.contains(name) {
                    found.push(name.clone());
                }
            },
            Self::Operation { operands: children, .. }
            | Self::Function { arguments: children,
                               .. }
            | Self::Vector { components: children,
                             .. }
            | Self::Set(children) => {
                for child in children {
                    child.collect_inputs(workspace, bound, found);
                }
            },
            Self::BuiltIn { argument, .. } => argument.collect_inputs(workspace, bound, found),
            Self::Locus(locus) => {
                for limit in locus.bounds.iter().flat_map(|b| [&b.lower, &b.upper]) {
                    limit.collect_inputs(workspace, bound, found);
                }
                let depth = bound.len();
                bound.extend(locus.bound_names().map(str::to_string));
                locus.template.collect_inputs(workspace, bound, found);
                bound.truncate(depth);
            },
        }
    }

    /// Binding strength used when rendering.
    fn precedence(&self) -> u8 {
        match self {
            Self::Operation { operator, .. } => operator.precedence(),
            Self::Vector { parenthetic: false,
                           .. } => LIST,
            Self::Constant(c) if c.to_string().starts_with('-') => 1,
            _ => ATOM,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, wrap: bool) -> fmt::Result {
        if wrap { write!(f, "({self})") } else { write!(f, "{self}") }
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operation { operator, operands } => fmt_operation(f, *operator, operands),
            Self::Function { name, arguments } => {
                write!(f, "{name}(")?;
                fmt_list(f, arguments)?;
                write!(f, ")")
            },
            Self::BuiltIn { function, argument } => write!(f, "{function}({argument})"),
            Self::Vector { components,
                           parenthetic, } => {
                if *parenthetic {
                    write!(f, "(")?;
                }
                fmt_list(f, components)?;
                if *parenthetic {
                    write!(f, ")")?;
                }
                Ok(())
            },
            Self::Set(members) => {
                write!(f, "{{")?;
                fmt_list(f, members)?;
                write!(f, "}}")
            },
            Self::Locus(locus) => {
                write!(f, "{{{} : ", locus.template)?;
                for (index, bound) in locus.bounds.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} < {} < {}", bound.lower, bound.name, bound.upper)?;
                }
                write!(f, "}}")
            },
        }
    }
}

fn fmt_operation(f: &mut fmt::Formatter<'_>, operator: Operator, operands: &[Expression]) -> fmt::Result {
    let precedence = operator.precedence();
    match (operator, operands) {
        (Operator::Null, _) => Ok(()),
        (Operator::Error, _) => write!(f, "?"),
        (Operator::Negate, [operand]) => {
            write!(f, "-")?;
            operand.fmt_operand(f, operand.precedence() <= precedence)
        },
        (Operator::Absolute, [operand]) => write!(f, "|{operand}|"),
        (Operator::Ln, [operand]) => write!(f, "ln({operand})"),
        (Operator::Parentheses, [operand]) => write!(f, "({operand})"),
        (Operator::Root, [radicand, Expression::Constant(degree)]) if *degree == TWO => {
            write!(f, "sqrt({radicand})")
        },
        (Operator::Root, [radicand, degree]) => write!(f, "root({radicand}, {degree})"),
        (_, [left, right]) => {
            let glyph = operator.infix().unwrap_or(" ? ");
            left.fmt_operand(f, left.precedence() < precedence)?;
            write!(f, "{glyph}")?;
            right.fmt_operand(f, right.precedence() <= precedence)
        },
        _ => write!(f, "?"),
    }
}

/// An ordered chain of expressions joined by relations, such as
/// `0 < x ≤ 5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comparison {
    expressions: Vec<Expression>,
    relations:   Vec<Relation>,
}

impl Comparison {
    /// Builds a comparison of `n` expressions joined by `n - 1` relations.
    ///
    /// # Errors
    /// Fails with `InvalidComparison` when the counts are inconsistent.
    ///
    /// # Example
    /// ```
    /// use mathnote::ast::{Comparison, Expression, Relation};
    ///
    /// let x = Expression::Variable("x".to_string());
    /// assert!(Comparison::new(vec![x.clone(), x.clone()], vec![Relation::Equal]).is_ok());
    /// assert!(Comparison::new(vec![x], vec![Relation::Equal]).is_err());
    /// ```
    pub fn new(expressions: Vec<Expression>, relations: Vec<Relation>) -> SimplifyResult<Self> {
        if expressions.len() < 2 || relations.len() + 1 != expressions.len() {
            return Err(SimplifyError::InvalidComparison { expressions: expressions.len(),
                                                          relations:   relations.len(), });
        }
        Ok(Self { expressions,
                  relations })
    }

    /// Builds a comparison from segments split on relations, which always
    /// number one more than the relations.
    pub(crate) const fn chain(expressions: Vec<Expression>, relations: Vec<Relation>) -> Self {
        Self { expressions,
               relations }
    }

    /// The chained expressions.
    #[must_use]
    pub fn expressions(&self) -> &[Expression] {
        &self.expressions
    }

    /// The relations between adjacent expressions.
    #[must_use]
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expressions[0])?;
        for (relation, expression) in self.relations.iter().zip(&self.expressions[1..]) {
            write!(f, " {relation} {expression}")?;
        }
        Ok(())
    }
}

/// A top-level parsed unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// A bare expression.
    Expression(Expression),
    /// A chain of relations.
    Comparison(Comparison),
    /// A decided truth value.
    TrueFalse(bool),
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(e) => write!(f, "{e}"),
            Self::Comparison(c) => write!(f, "{c}"),
            Self::TrueFalse(b) => write!(f, "{b}"),
        }
    }
}

impl From<Expression> for Statement {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

impl From<Constant> for Expression {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}
