//! Node identifiers, kinds, operators, and payloads for the syntax tree.

use smol_str::SmolStr;

use crate::base::Span;

/// Index of a node in its tree's arena.
///
/// Ids are only minted by [`TreeBuilder`](super::TreeBuilder) and are
/// meaningful only for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Operator of a prefix (unary) expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOp {
    /// Logical negation `!`
    Not,
    /// Unary plus `+`
    Plus,
    /// Unary minus `-`
    Minus,
    /// Pre-increment `++`
    Increment,
    /// Pre-decrement `--`
    Decrement,
    /// Bitwise complement `~`
    Complement,
}

/// Operator of an infix (binary) expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOp {
    Plus,
    Minus,
    Times,
    Divide,
    Remainder,
    LeftShift,
    RightShiftSigned,
    RightShiftUnsigned,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    /// Bitwise `&`
    And,
    /// Bitwise `|`
    Or,
    /// Bitwise `^`
    Xor,
    /// Short-circuit `&&`
    ConditionalAnd,
    /// Short-circuit `||`
    ConditionalOr,
    Equals,
    NotEquals,
}

impl InfixOp {
    /// Short-circuit logical operators, which force boolean operands.
    pub fn is_conditional(self) -> bool {
        matches!(self, Self::ConditionalAnd | Self::ConditionalOr)
    }

    /// Arithmetic, shift, relational, and bitwise operators, which all
    /// accept integer operands.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Plus
                | Self::Minus
                | Self::Times
                | Self::Divide
                | Self::Remainder
                | Self::LeftShift
                | Self::RightShiftSigned
                | Self::RightShiftUnsigned
                | Self::Less
                | Self::Greater
                | Self::LessEquals
                | Self::GreaterEquals
                | Self::And
                | Self::Or
                | Self::Xor
        )
    }
}

/// Operator of a postfix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

/// The role a child node plays under its parent.
///
/// Roles are how the classifier reaches typed children without knowing
/// the producing parser's node layout: "the left operand", "the
/// arguments list", and so on. `Child` is the catch-all for structure
/// the classifier never inspects by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRole {
    LeftOperand,
    RightOperand,
    Argument,
    Fragment,
    Expression,
    Condition,
    Body,
    Dimension,
    Child,
}

/// A resolved method signature attached to an invocation or declaration
/// node when semantic resolution succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    /// Declared method name.
    pub name: SmolStr,
    /// Declared return type.
    pub return_type: SmolStr,
    /// Declared parameter types, in declaration order.
    pub param_types: Vec<SmolStr>,
}

impl MethodBinding {
    /// Create a new binding from a declared signature.
    pub fn new(
        name: impl Into<SmolStr>,
        return_type: impl Into<SmolStr>,
        param_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            param_types: param_types.into_iter().map(Into::into).collect(),
        }
    }
}

/// Kind of a syntax-tree node.
///
/// A language-neutral tagged variant covering the node shapes the
/// classifier inspects. Kinds that carry a name or declared type carry
/// it inline so classification never needs the producing parser's
/// symbol tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of one compiled unit.
    Unit,
    Block,
    SimpleName,
    QualifiedName,

    PrefixExpr(PrefixOp),
    InfixExpr(InfixOp),
    PostfixExpr(PostfixOp),
    /// Ternary `cond ? a : b` expression.
    ConditionalExpr,
    InstanceOfExpr,
    CastExpr { target_type: SmolStr },
    Assignment,

    MethodInvocation { name: SmolStr },
    MethodDeclaration { name: SmolStr, return_type: SmolStr },

    /// One `name = initializer` piece of a declaration.
    VariableFragment { name: SmolStr },
    FieldDeclaration { type_name: SmolStr },
    LocalDeclaration { type_name: SmolStr },

    ArrayCreation { type_name: SmolStr },
    ArrayAccess,
    ArrayInitializer,

    ExpressionStatement,

    CharLiteral,
    BooleanLiteral,
    NumberLiteral,
    StringLiteral,
    NullLiteral,

    ForStatement,
    EnhancedForStatement,
    WhileStatement,
    DoStatement,
    IfStatement,
    SwitchStatement,
    TryStatement,
}

impl NodeKind {
    /// Control-structure statements: `for`, `try`, `do`, `switch`,
    /// `if`, enhanced `for`, and `while`.
    pub fn is_control_statement(&self) -> bool {
        matches!(
            self,
            Self::ForStatement
                | Self::EnhancedForStatement
                | Self::WhileStatement
                | Self::DoStatement
                | Self::IfStatement
                | Self::SwitchStatement
                | Self::TryStatement
        )
    }
}

/// Arena payload of one node.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) text: SmolStr,
    pub(crate) resolved_type: Option<SmolStr>,
    pub(crate) method_binding: Option<MethodBinding>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<(ChildRole, NodeId)>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, span: Span, text: SmolStr, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            span,
            text,
            resolved_type: None,
            method_binding: None,
            parent,
            children: Vec::new(),
        }
    }
}
