//! Problem code definitions for compiler diagnostics
//!
//! Each code names one kind of problem the compiler collaborator can
//! report. The classifier dispatches on these codes; codes it has no
//! handler for are left unclassified by design.

use std::fmt;

/// Enumerated problem kinds reported by the compiler.
///
/// The set mirrors the diagnostics a Java-like sketch compiler emits
/// for beginner errors, from semantic problems (undefined names, type
/// mismatches) down to the two generic parse-recovery codes
/// ([`InsertToComplete`](Self::InsertToComplete) and
/// [`DeleteToken`](Self::DeleteToken)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemCode {
    /// Array creation with neither dimension expressions nor initializer.
    MissingArrayDimension,
    /// A later dimension is given but the first is missing.
    IllegalArrayDimension,
    /// Dimension expressions combined with an initializer.
    DimensionWithInitializer,
    /// Call to a method that does not exist.
    UndefinedMethod,
    /// Call arguments do not match the resolved method's parameters.
    ParameterMismatch,
    /// A non-void method is missing a return statement.
    ShouldReturnValue,
    /// Assigned value's type does not match the variable's type.
    TypeMismatch,
    /// Returned value's type does not match the declared return type.
    ReturnTypeMismatch,
    /// Reference to a type that does not exist.
    UndefinedType,
    /// Reference to a variable that does not exist.
    UnresolvedVariable,
    /// Local variable used before it is assigned.
    UninitializedLocalVariable,
    /// Non-static method called from a static context.
    StaticMethodRequested,
    /// Reference to a field that does not exist.
    UndefinedField,
    /// Reference to a name that does not exist.
    UndefinedName,
    /// Parser recovery: a token must be inserted to complete a construct.
    InsertToComplete,
    /// Parser recovery: a token must be deleted.
    DeleteToken,
    /// Method call on a primitive value.
    MessageSendOnBaseType,
    /// Method call on an array value.
    MessageSendOnArrayType,
}

impl ProblemCode {
    /// Get the string representation of the problem code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingArrayDimension => "MissingArrayDimension",
            Self::IllegalArrayDimension => "IllegalArrayDimension",
            Self::DimensionWithInitializer => "DimensionWithInitializer",
            Self::UndefinedMethod => "UndefinedMethod",
            Self::ParameterMismatch => "ParameterMismatch",
            Self::ShouldReturnValue => "ShouldReturnValue",
            Self::TypeMismatch => "TypeMismatch",
            Self::ReturnTypeMismatch => "ReturnTypeMismatch",
            Self::UndefinedType => "UndefinedType",
            Self::UnresolvedVariable => "UnresolvedVariable",
            Self::UninitializedLocalVariable => "UninitializedLocalVariable",
            Self::StaticMethodRequested => "StaticMethodRequested",
            Self::UndefinedField => "UndefinedField",
            Self::UndefinedName => "UndefinedName",
            Self::InsertToComplete => "InsertToComplete",
            Self::DeleteToken => "DeleteToken",
            Self::MessageSendOnBaseType => "MessageSendOnBaseType",
            Self::MessageSendOnArrayType => "MessageSendOnArrayType",
        }
    }

    /// Get a short description of the problem kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MissingArrayDimension => "array is missing its dimension",
            Self::IllegalArrayDimension => "first array dimension is missing",
            Self::DimensionWithInitializer => "array has both dimension and initializer",
            Self::UndefinedMethod => "method not found",
            Self::ParameterMismatch => "call arguments do not match the method",
            Self::ShouldReturnValue => "method is missing a return statement",
            Self::TypeMismatch => "value type does not match variable type",
            Self::ReturnTypeMismatch => "returned type does not match declaration",
            Self::UndefinedType => "type not found",
            Self::UnresolvedVariable => "variable not found",
            Self::UninitializedLocalVariable => "variable used before initialization",
            Self::StaticMethodRequested => "non-static method called from static context",
            Self::UndefinedField => "field not found",
            Self::UndefinedName => "name not found",
            Self::InsertToComplete => "token must be inserted to complete",
            Self::DeleteToken => "token must be deleted",
            Self::MessageSendOnBaseType => "method called on a primitive value",
            Self::MessageSendOnArrayType => "method called on an array value",
        }
    }

    /// Check if this is a parse-recovery code (as opposed to a semantic
    /// problem with resolved context behind it).
    pub fn is_parse_recovery(&self) -> bool {
        matches!(self, Self::InsertToComplete | Self::DeleteToken)
    }
}

impl fmt::Display for ProblemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
