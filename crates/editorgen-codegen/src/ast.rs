//! Syntax tree of a generated editor.
//!
//! The tree is assembled bottom-up: expressions and statements first, then
//! members, the class, and finally the [`CompilationUnit`]. The root keeps
//! its parts private so a finished unit cannot be altered before it is
//! rendered.
//!
//! # Structure
//!
//! - [`CompilationUnit`]: optional namespace, imports, one class
//! - [`ClassDecl`]: attributes, base type, ordered [`Member`]s
//! - [`Member`]: a [`FieldDecl`] or a [`MethodDecl`]
//! - [`Stmt`] / [`Expr`]: the small expression language the generator needs

/// Access modifier of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Private,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal (escaped on render).
    Str(String),

    /// Integer literal.
    Int(i64),

    /// Single-precision float literal.
    Float(f32),

    /// Bare identifier, e.g. `serializedObject`.
    Ident(String),

    /// `typeof(T)`.
    TypeOf(String),

    /// `target.name`.
    Member { target: Box<Expr>, name: String },

    /// `target.method(args)`.
    Call {
        target: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// `new T(args)`.
    New { ty: String, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn new_object(ty: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::New {
            ty: ty.into(),
            args,
        }
    }

    /// `self.name`
    pub fn member(self, name: impl Into<String>) -> Self {
        Expr::Member {
            target: Box::new(self),
            name: name.into(),
        }
    }

    /// `self.method(args)`
    pub fn call(self, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            target: Box::new(self),
            method: method.into(),
            args,
        }
    }

    /// Wrap as an expression statement.
    pub fn stmt(self) -> Stmt {
        Stmt::Expr(self)
    }
}

/// A statement inside a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `expr;`
    Expr(Expr),
}

/// An attribute such as `[CustomEditor(typeof(Foo))]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDecl {
    pub name: String,
    pub args: Vec<Expr>,
}

/// A field declaration with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub access: Access,
    pub ty: String,
    pub name: String,
    pub initializer: Option<Expr>,
}

/// A method declaration with an ordered body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub access: Access,
    pub is_override: bool,
    pub return_type: String,
    pub name: String,
    pub body: Vec<Stmt>,
}

/// A class member.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub access: Access,
    pub name: String,
    pub base: String,
    pub attributes: Vec<AttributeDecl>,
    pub members: Vec<Member>,
}

/// Root of a generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    namespace: Option<String>,
    imports: Vec<String>,
    class: ClassDecl,
}

impl CompilationUnit {
    /// Assemble a unit. Imports keep their first-occurrence order with
    /// duplicates dropped.
    pub fn new<I, S>(namespace: Option<String>, imports: I, class: ClassDecl) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for import in imports {
            let import = import.into();
            if !unique.contains(&import) {
                unique.push(import);
            }
        }

        Self {
            namespace,
            imports: unique,
            class,
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn class(&self) -> &ClassDecl {
        &self.class
    }

    /// Field declarations of the class, in member order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.class.members.iter().filter_map(|m| match m {
            Member::Field(field) => Some(field),
            Member::Method(_) => None,
        })
    }

    /// Method declarations of the class, in member order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.class.members.iter().filter_map(|m| match m {
            Member::Method(method) => Some(method),
            Member::Field(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn class(name: &str) -> ClassDecl {
        ClassDecl {
            access: Access::Public,
            name: name.to_string(),
            base: "UnityEditor.Editor".to_string(),
            attributes: vec![],
            members: vec![
                Member::Field(FieldDecl {
                    access: Access::Private,
                    ty: "GUIContent".into(),
                    name: "aContent".into(),
                    initializer: None,
                }),
                Member::Method(MethodDecl {
                    access: Access::Public,
                    is_override: true,
                    return_type: "void".into(),
                    name: "OnInspectorGUI".into(),
                    body: vec![],
                }),
            ],
        }
    }

    #[test]
    fn CompilationUnit___new___removes_duplicate_imports() {
        let unit = CompilationUnit::new(
            None,
            ["UnityEditor", "UnityEngine", "UnityEditor"],
            class("FooEditor"),
        );

        assert_eq!(unit.imports(), ["UnityEditor", "UnityEngine"]);
    }

    #[test]
    fn CompilationUnit___new___keeps_first_occurrence_order() {
        let unit = CompilationUnit::new(None, ["B", "A", "B", "C", "A"], class("FooEditor"));

        assert_eq!(unit.imports(), ["B", "A", "C"]);
    }

    #[test]
    fn CompilationUnit___fields_and_methods___split_members() {
        let unit = CompilationUnit::new(Some("Game.Editor".into()), ["UnityEditor"], class("X"));

        assert_eq!(unit.fields().count(), 1);
        assert_eq!(unit.methods().count(), 1);
        assert_eq!(unit.namespace(), Some("Game.Editor"));
    }

    #[test]
    fn Expr___call_chain___nests_targets() {
        let expr = Expr::ident("serializedObject").call("FindProperty", vec![Expr::str("speed")]);

        match expr {
            Expr::Call {
                target,
                method,
                args,
            } => {
                assert_eq!(*target, Expr::Ident("serializedObject".into()));
                assert_eq!(method, "FindProperty");
                assert_eq!(args, vec![Expr::Str("speed".into())]);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }
}
