//! Type model for the language.
//!
//! A `TypeSpec` is a base (a named primitive or a function signature) wrapped
//! in zero or more array levels. Equality is structural and the primitive
//! `ANY` is a wildcard that equals every type at every depth. `PartialEq` is
//! therefore not transitive and there is no `Eq`.

use std::fmt::Display;

use super::expressions::Expr;

/// The wildcard primitive used by built-ins and empty array literals.
pub const ANY: &str = "ANY";

const ARITHMETIC_PRIMITIVES: [&str; 3] = ["int", "float", "bool"];

#[derive(Debug, Clone)]
pub struct TypeSpec {
    pub base: TypeBase,
    pub array_depth: usize,
}

#[derive(Debug, Clone)]
pub enum TypeBase {
    Primitive(String),
    Function(FunctionType),
}

#[derive(Debug, Clone)]
pub struct FunctionType {
    /// Compared as an unordered set; source order is kept for display.
    pub parameters: Vec<Param>,
    pub return_type: Box<TypeSpec>,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub id: String,
    pub ty: TypeSpec,
    pub default: Option<Expr>,
}

impl TypeSpec {
    pub fn primitive(name: &str) -> Self {
        TypeSpec {
            base: TypeBase::Primitive(String::from(name)),
            array_depth: 0,
        }
    }

    pub fn function(parameters: Vec<Param>, return_type: TypeSpec) -> Self {
        TypeSpec {
            base: TypeBase::Function(FunctionType {
                parameters,
                return_type: Box::new(return_type),
            }),
            array_depth: 0,
        }
    }

    pub fn with_array_depth(mut self, array_depth: usize) -> Self {
        self.array_depth = array_depth;
        self
    }

    pub fn is_any(&self) -> bool {
        matches!(&self.base, TypeBase::Primitive(name) if name == ANY)
    }

    /// `int`, `float` or `bool` with no array levels.
    pub fn is_arithmetic(&self) -> bool {
        self.array_depth == 0
            && matches!(&self.base, TypeBase::Primitive(name) if ARITHMETIC_PRIMITIVES.contains(&name.as_str()))
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match &self.base {
            TypeBase::Function(function) if self.array_depth == 0 => Some(function),
            _ => None,
        }
    }
}

impl PartialEq for TypeSpec {
    fn eq(&self, other: &Self) -> bool {
        if self.is_any() || other.is_any() {
            return true;
        }

        self.array_depth == other.array_depth && self.base == other.base
    }
}

impl PartialEq for TypeBase {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeBase::Primitive(left), TypeBase::Primitive(right)) => {
                left == ANY || right == ANY || left == right
            }
            (TypeBase::Function(left), TypeBase::Function(right)) => left == right,
            _ => false,
        }
    }
}

impl FunctionType {
    pub fn parameter(&self, id: &str) -> Option<&Param> {
        self.parameters.iter().find(|param| param.id == id)
    }
}

impl PartialEq for FunctionType {
    fn eq(&self, other: &Self) -> bool {
        let covers = |from: &[Param], into: &[Param]| {
            from.iter().all(|param| into.iter().any(|candidate| candidate == param))
        };

        *self.return_type == *other.return_type
            && covers(&self.parameters, &other.parameters)
            && covers(&other.parameters, &self.parameters)
    }
}

impl Param {
    pub fn new(id: &str, ty: TypeSpec) -> Self {
        Param {
            id: String::from(id),
            ty,
            default: None,
        }
    }
}

/// Parameters compare by name and type only; default values are ignored.
impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.ty == other.ty
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", "[".repeat(self.array_depth))?;
        match &self.base {
            TypeBase::Primitive(name) => write!(f, "{}", name)?,
            TypeBase::Function(function) => write!(f, "{}", function)?,
        }
        write!(f, "{}", "]".repeat(self.array_depth))
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| format!("{}: {}", param.id, param.ty))
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "({}): {}", parameters, self.return_type)
    }
}
