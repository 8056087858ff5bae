//! Help topics — the classified, parameterized explanation categories.

use smol_str::SmolStr;

/// Enclosing method context recovered for static-context errors.
///
/// Both fields come from the nearest enclosing method declaration; the
/// pair is present or absent together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingMethod {
    pub name: SmolStr,
    pub return_type: SmolStr,
}

impl EnclosingMethod {
    pub fn new(name: impl Into<SmolStr>, return_type: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
        }
    }
}

/// A classified problem, carrying exactly the parameters its
/// pre-authored explanation page needs.
///
/// Invariant: every name and type string in a topic is already reduced
/// to its simple (unqualified) form; the link assembler encodes values
/// but never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpTopic {
    /// Array creation with neither a dimension nor an initializer.
    MissingDimension {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// First of two array dimensions missing, e.g. `new int[][3]`.
    MissingFirstDimension {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// Dimension expressions combined with an initializer.
    ExtraInitializer {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// Malformed array declaration the parser could not complete.
    IncorrectDeclaration {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// Call to a method that does not exist.
    MissingMethod {
        method_name: SmolStr,
        return_type: SmolStr,
        provided_args: Vec<SmolStr>,
        provided_types: Vec<SmolStr>,
    },
    /// Call arguments do not match the resolved method signature.
    ParameterMismatch {
        class_name: SmolStr,
        method_name: SmolStr,
        return_type: SmolStr,
        provided_types: Vec<SmolStr>,
        required_types: Vec<SmolStr>,
    },
    /// Non-void method missing a return statement.
    MissingReturn {
        method_name: SmolStr,
        return_type: SmolStr,
        required_types: Vec<SmolStr>,
    },
    /// Assigned or returned value's type does not match what is required.
    TypeMismatch {
        provided_type: SmolStr,
        required_type: SmolStr,
        var_name: SmolStr,
    },
    /// Reference to a type that does not exist.
    MissingType {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// Reference to a variable that does not exist.
    MissingVariable {
        type_name: SmolStr,
        var_name: SmolStr,
    },
    /// Local variable read before it is assigned.
    UninitializedVariable {
        var_name: SmolStr,
        type_name: SmolStr,
    },
    /// Stray token that is lexically an identifier.
    UnexpectedToken { type_name: SmolStr },
    /// Non-static method called from a static context.
    NonStaticFromStatic {
        method_name: SmolStr,
        enclosing_method: Option<EnclosingMethod>,
        invoked_return_type: Option<SmolStr>,
        file_name: SmolStr,
    },
    /// Statement begins like an expression where declarators belong.
    VariableDeclarators {
        expr_text: SmolStr,
        type_name: SmolStr,
    },
    /// Method invoked on a primitive or array value.
    MethodCallOnWrongType {
        method_name: SmolStr,
        return_type: SmolStr,
        type_name: SmolStr,
        var_text: SmolStr,
    },
    /// Extra closing curly brace in raw source.
    ExtraClosingBrace { original: SmolStr, fixed: SmolStr },
    /// Method declaration mixed into statement-level code.
    IncorrectMethodDeclaration { method_name: SmolStr },
}

impl HelpTopic {
    /// Fixed path segment of the pre-authored page for this topic.
    ///
    /// These strings are a compatibility contract with the authored
    /// destination content and must be reproduced verbatim.
    pub fn page(&self) -> &'static str {
        match self {
            Self::MissingDimension { .. } => "incorrectdimensionexpression1",
            Self::MissingFirstDimension { .. } => "incorrectdimensionexpression2",
            Self::ExtraInitializer { .. } => "incorrectdimensionexpression3",
            Self::IncorrectDeclaration { .. } => "incorrectvariabledeclaration",
            Self::MissingMethod { .. } => "methodnotfound",
            Self::ParameterMismatch { .. } => "parametermismatch",
            Self::MissingReturn { .. } => "returnmissing",
            Self::TypeMismatch { .. } => "typemismatch",
            Self::MissingType { .. } => "typenotfound",
            Self::MissingVariable { .. } => "variablenotfound",
            Self::UninitializedVariable { .. } => "variablenotinit",
            Self::UnexpectedToken { .. } => "unexpectedtoken",
            Self::NonStaticFromStatic { .. } => "nonstaticfromstatic",
            Self::VariableDeclarators { .. } => "syntaxerrorvariabledeclarators",
            Self::MethodCallOnWrongType { .. } => "methodcallonwrongtype",
            Self::ExtraClosingBrace { .. } => "extraneousclosingcurlybrace",
            Self::IncorrectMethodDeclaration { .. } => "incorrectmethoddeclaration",
        }
    }
}
