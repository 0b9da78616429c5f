use std::{collections::BTreeMap, rc::Rc};

use log::debug;

use crate::{
    ast::Expression,
    error::SimplifyError,
    interpreter::{
        simplifier::core::SimplifyResult,
        value::constant::{E, I, PI, TAU},
    },
};

/// Deepest nesting of localized workspaces, and hence of function calls.
pub const MAX_CALL_DEPTH: usize = 256;

/// What a name is bound to: a body and the parameters it is a function of.
/// Variables are bindings without parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The parameter names, empty for a variable.
    pub parameters: Vec<String>,
    /// The simplified value or function body.
    pub body:       Expression,
    /// Whether the body is read as stored. Session values are not settled;
    /// they are simplified again against the current bindings on each read.
    pub settled:    bool,
}

impl Binding {
    /// Whether the binding is a plain value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Session-scoped store of variable and function definitions.
///
/// ## Usage
///
/// A `Workspace` is created once per session and passed by mutable reference
/// into every simplification. Function calls evaluate their body in a
/// [`Workspace::localize`]d child, which shares the caller's bindings but can
/// never write back to them.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    bindings: BTreeMap<String, Rc<Binding>>,
    depth:    usize,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a workspace holding the named constants `pi`, `tau`, `e` and
    /// `i`.
    ///
    /// # Example
    /// ```
    /// use mathnote::interpreter::workspace::Workspace;
    ///
    /// let workspace = Workspace::standard();
    /// assert!(workspace.contains("pi"));
    /// assert!(!Workspace::new().contains("pi"));
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut workspace = Self::new();
        for (name, value) in [("pi", PI), ("tau", TAU), ("e", E), ("i", I)] {
            workspace.bindings.insert(name.to_string(),
                                      Rc::new(Binding { parameters: Vec::new(),
                                                        body:       Expression::Constant(value),
                                                        settled:    true, }));
        }
        workspace
    }

    /// Whether the name is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// The binding of a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name).map(Rc::as_ref)
    }

    /// The value of a name bound as a variable.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Expression> {
        self.get(name)
            .filter(|binding| binding.is_value())
            .map(|binding| &binding.body)
    }

    /// The parameter names of a bound name.
    #[must_use]
    pub fn parameters(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|binding| binding.parameters.as_slice())
    }

    /// Binds a name to a value, replacing any earlier binding.
    pub fn store_value(&mut self, name: &str, value: Expression) {
        debug!("Storing {name} = {value}");
        self.bindings.insert(name.to_string(),
                             Rc::new(Binding { parameters: Vec::new(),
                                               body:       value,
                                               settled:    false, }));
    }

    /// Binds a name to a function of the given parameters.
    pub fn store_function(&mut self, name: &str, parameters: Vec<String>, body: Expression) {
        debug!("Storing {name}({}) = {body}", parameters.join(", "));
        self.bindings.insert(name.to_string(),
                             Rc::new(Binding { parameters,
                                               body,
                                               settled: false }));
    }

    /// Every bound name, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// How many localizations deep this workspace is.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a child workspace in which each parameter is bound to the
    /// matching argument. The child shares every other binding with `self`;
    /// stores made into the child are not visible here. Arguments are settled
    /// bindings.
    ///
    /// # Errors
    /// - `ArityMismatch` when the counts differ.
    /// - `RecursionLimit` when the child would be deeper than
    ///   [`MAX_CALL_DEPTH`].
    ///
    /// # Example
    /// ```
    /// use mathnote::{
    ///     ast::Expression,
    ///     interpreter::{value::constant::Constant, workspace::Workspace},
    /// };
    ///
    /// let workspace = Workspace::new();
    /// let child = workspace.localize(&["x".to_string()],
    ///                                &[Expression::Constant(Constant::real(3.0))])
    ///                      .unwrap();
    ///
    /// assert_eq!(child.value("x").unwrap().to_string(), "3");
    /// assert!(!workspace.contains("x"));
    /// ```
    pub fn localize(&self, parameters: &[String], arguments: &[Expression]) -> SimplifyResult<Self> {
        if parameters.len() != arguments.len() {
            return Err(SimplifyError::ArityMismatch { name:     format!("({})",
                                                                        parameters.join(", ")),
                                                      expected: parameters.len(),
                                                      found:    arguments.len(), });
        }
        if self.depth >= MAX_CALL_DEPTH {
            return Err(SimplifyError::RecursionLimit { name:  format!("({})", parameters.join(", ")),
                                                       limit: MAX_CALL_DEPTH, });
        }

        let mut child = self.clone();
        child.depth += 1;
        for (parameter, argument) in parameters.iter().zip(arguments) {
            child.bindings.insert(parameter.clone(),
                                  Rc::new(Binding { parameters: Vec::new(),
                                                    body:       argument.clone(),
                                                    settled:    true, }));
        }
        Ok(child)
    }

    /// Returns a child workspace in which each name is bound to itself, so it
    /// stays symbolic while a body is simplified.
    ///
    /// # Errors
    /// Fails with `RecursionLimit` like [`Workspace::localize`].
    pub fn localize_symbolic(&self, names: &[String]) -> SimplifyResult<Self> {
        let symbols = names.iter().cloned().map(Expression::Variable).collect::<Vec<_>>();
        self.localize(names, &symbols)
    }
}
