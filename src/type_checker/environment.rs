//! Name resolution state for one verification run.
//!
//! `ScopeStack` holds one `Environment` per open block, outermost first, and
//! `FunctionStack` holds the return type expected by each enclosing function
//! or closure body.

use std::collections::HashMap;

use log::trace;

use crate::{
    ast::types::TypeSpec,
    errors::errors::{Error, ErrorImpl},
};

/// A single block's bindings.
#[derive(Debug, Default)]
pub struct Environment {
    pub variable_lookup: HashMap<String, TypeSpec>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare_variable(&mut self, variable_name: &str, variable_type: TypeSpec) -> Result<(), Error> {
        if self.variable_lookup.contains_key(variable_name) {
            return Err(Error::semantic(ErrorImpl::VariableAlreadyDeclared {
                variable: String::from(variable_name),
            }));
        }

        self.variable_lookup
            .insert(String::from(variable_name), variable_type);
        Ok(())
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&TypeSpec> {
        self.variable_lookup.get(variable_name)
    }
}

/// Nested scopes. The bottom environment is the global scope and is never
/// popped.
#[derive(Debug)]
pub struct ScopeStack {
    environments: Vec<Environment>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack {
            environments: vec![Environment::new()],
        }
    }

    /// A stack whose global scope starts out holding `global`.
    pub fn with_global(global: Environment) -> Self {
        ScopeStack {
            environments: vec![global],
        }
    }

    pub fn push_scope(&mut self) {
        self.environments.push(Environment::new());
        trace!("pushed scope, depth {}", self.depth());
    }

    pub fn pop_scope(&mut self) -> Result<(), Error> {
        if self.environments.len() <= 1 {
            return Err(Error::semantic(ErrorImpl::ScopeUnderflow));
        }

        self.environments.pop();
        trace!("popped scope, depth {}", self.depth());
        Ok(())
    }

    /// Binds `name` in the innermost scope. Only that scope is checked for an
    /// existing binding, so outer names may be shadowed.
    pub fn add(&mut self, name: &str, ty: TypeSpec) -> Result<(), Error> {
        match self.environments.last_mut() {
            Some(environment) => environment.declare_variable(name, ty),
            None => Err(Error::semantic(ErrorImpl::ScopeUnderflow)),
        }
    }

    /// Resolves `name`, innermost scope first.
    pub fn get(&self, name: &str) -> Result<&TypeSpec, Error> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(name))
            .ok_or_else(|| {
                Error::semantic(ErrorImpl::VariableNotDeclared {
                    variable: String::from(name),
                })
            })
    }

    /// Number of open scopes, the global scope included.
    pub fn depth(&self) -> usize {
        self.environments.len()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct FunctionStack {
    return_types: Vec<TypeSpec>,
}

impl FunctionStack {
    pub fn new() -> Self {
        FunctionStack {
            return_types: Vec::new(),
        }
    }

    pub fn push_func(&mut self, return_type: TypeSpec) {
        trace!("entering function returning {}", return_type);
        self.return_types.push(return_type);
    }

    pub fn pop_func(&mut self) -> Option<TypeSpec> {
        self.return_types.pop()
    }

    /// The return type of the innermost enclosing function.
    pub fn top(&self) -> Result<&TypeSpec, Error> {
        self.return_types
            .last()
            .ok_or_else(|| Error::semantic(ErrorImpl::ReturnOutsideFunction))
    }

    pub fn is_empty(&self) -> bool {
        self.return_types.is_empty()
    }
}
