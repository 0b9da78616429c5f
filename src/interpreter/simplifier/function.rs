use log::debug;

use crate::{
    ast::{Bound, Expression, Locus},
    error::SimplifyError,
    interpreter::{
        simplifier::core::{SimplifyResult, simplified_all},
        workspace::{MAX_CALL_DEPTH, Workspace},
    },
};

impl Expression {
    /// Simplifies a call to a user function.
    ///
    /// Arguments are simplified in the caller's workspace. A bound name then
    /// has its body simplified in a workspace localized with the parameters
    /// bound to those arguments. An unbound name stays a symbolic call.
    ///
    /// # Errors
    /// - `ArityMismatch` when the argument count differs from the parameter
    ///   count.
    /// - `RecursionLimit` when calls nest deeper than [`MAX_CALL_DEPTH`].
    pub(in crate::interpreter::simplifier) fn simplified_call(name: &str,
                                                              arguments: &[Self],
                                                              workspace: &Workspace)
                                                              -> SimplifyResult<Self> {
        let arguments = simplified_all(arguments, workspace)?;

        let Some(binding) = workspace.get(name) else {
            return Ok(Self::Function { name: name.to_string(),
                                       arguments });
        };

        if binding.parameters.len() != arguments.len() {
            return Err(SimplifyError::ArityMismatch { name:     name.to_string(),
                                                      expected: binding.parameters.len(),
                                                      found:    arguments.len(), });
        }
        if workspace.depth() >= MAX_CALL_DEPTH {
            return Err(SimplifyError::RecursionLimit { name:  name.to_string(),
                                                       limit: MAX_CALL_DEPTH, });
        }

        debug!("Calling {name} at depth {}", workspace.depth());
        let local = workspace.localize(&binding.parameters, &arguments)?;
        binding.body.simplified(&local)
    }

    /// Simplifies a locus: its limits in the workspace, its template with the
    /// bound names kept symbolic.
    pub(in crate::interpreter::simplifier) fn simplified_locus(locus: &Locus,
                                                               workspace: &Workspace)
                                                               -> SimplifyResult<Self> {
        let bounds = locus.bounds
                          .iter()
                          .map(|bound| {
                              Ok(Bound { name:  bound.name.clone(),
                                         lower: bound.lower.simplified(workspace)?,
                                         upper: bound.upper.simplified(workspace)?, })
                          })
                          .collect::<SimplifyResult<Vec<_>>>()?;

        let names = locus.bound_names().map(str::to_string).collect::<Vec<_>>();
        let local = workspace.localize_symbolic(&names)?;
        let template = locus.template.simplified(&local)?;

        Ok(Self::Locus(Locus { template: Box::new(template),
                               bounds }))
    }
}
