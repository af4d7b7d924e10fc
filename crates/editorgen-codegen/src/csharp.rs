//! C# source rendering.
//!
//! Output layout is fixed: a generated-code banner, one `using` per import,
//! an optional namespace block, and the class. Braces always sit on their
//! own line and each nesting level adds four spaces.

use crate::ast::{
    Access, AttributeDecl, ClassDecl, CompilationUnit, Expr, FieldDecl, Member, MethodDecl, Stmt,
};

const INDENT: &str = "    ";

const BANNER: &[&str] = &[
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by editorgen.",
    "//",
    "//     Changes to this file may cause incorrect behavior and will be lost if",
    "//     the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];

/// Render a compilation unit to C# source text.
///
/// Rendering is deterministic: the same unit always yields byte-identical
/// text.
///
/// # Panics
///
/// Panics if the unit is malformed (a class, field, method, attribute, or
/// type reference with an empty name). Such a unit can only come from a
/// defect in the code that assembled it.
pub fn render(unit: &CompilationUnit) -> String {
    let mut w = SourceWriter::default();

    for line in BANNER {
        w.line(line);
    }
    w.blank();

    for import in unit.imports() {
        w.line(&format!("using {import};"));
    }
    if !unit.imports().is_empty() {
        w.blank();
    }

    match unit.namespace() {
        Some(ns) => {
            w.line(&format!("namespace {ns}"));
            w.open();
            write_class(&mut w, unit.class());
            w.close();
        }
        None => write_class(&mut w, unit.class()),
    }

    w.finish()
}

fn write_class(w: &mut SourceWriter, class: &ClassDecl) {
    require_name("class", &class.name);
    require_name("base type", &class.base);

    for attribute in &class.attributes {
        write_attribute(w, attribute);
    }
    w.line(&format!(
        "{} class {} : {}",
        access(class.access),
        class.name,
        class.base
    ));
    w.open();
    for (i, member) in class.members.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        match member {
            Member::Field(field) => write_field(w, field),
            Member::Method(method) => write_method(w, method),
        }
    }
    w.close();
}

fn write_attribute(w: &mut SourceWriter, attribute: &AttributeDecl) {
    require_name("attribute", &attribute.name);

    if attribute.args.is_empty() {
        w.line(&format!("[{}]", attribute.name));
    } else {
        w.line(&format!("[{}({})]", attribute.name, args(&attribute.args)));
    }
}

fn write_field(w: &mut SourceWriter, field: &FieldDecl) {
    require_name("field", &field.name);
    require_name("field type", &field.ty);

    let mut line = format!("{} {} {}", access(field.access), field.ty, field.name);
    if let Some(init) = &field.initializer {
        line.push_str(" = ");
        write_expr(&mut line, init);
    }
    line.push(';');
    w.line(&line);
}

fn write_method(w: &mut SourceWriter, method: &MethodDecl) {
    require_name("method", &method.name);
    require_name("return type", &method.return_type);

    let modifier = if method.is_override { " override" } else { "" };
    w.line(&format!(
        "{}{} {} {}()",
        access(method.access),
        modifier,
        method.return_type,
        method.name
    ));
    w.open();
    for stmt in &method.body {
        match stmt {
            Stmt::Expr(expr) => {
                let mut line = String::new();
                write_expr(&mut line, expr);
                line.push(';');
                w.line(&line);
            }
        }
    }
    w.close();
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Str(value) => write_string_literal(out, value),
        Expr::Int(value) => out.push_str(&value.to_string()),
        Expr::Float(value) => out.push_str(&float_literal(*value)),
        Expr::Ident(name) => {
            require_name("identifier", name);
            out.push_str(name);
        }
        Expr::TypeOf(ty) => {
            require_name("typeof operand", ty);
            out.push_str(&format!("typeof({ty})"));
        }
        Expr::Member { target, name } => {
            write_expr(out, target);
            out.push('.');
            out.push_str(name);
        }
        Expr::Call {
            target,
            method,
            args: call_args,
        } => {
            require_name("called method", method);
            write_expr(out, target);
            out.push('.');
            out.push_str(method);
            out.push('(');
            out.push_str(&args(call_args));
            out.push(')');
        }
        Expr::New { ty, args: ctor_args } => {
            require_name("constructed type", ty);
            out.push_str("new ");
            out.push_str(ty);
            out.push('(');
            out.push_str(&args(ctor_args));
            out.push(')');
        }
    }
}

fn args(exprs: &[Expr]) -> String {
    let mut out = String::new();
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_expr(&mut out, expr);
    }
    out
}

fn write_string_literal(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Shortest round-trip digits with an `f` suffix.
fn float_literal(value: f32) -> String {
    if value.is_nan() {
        "float.NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "float.PositiveInfinity".to_string()
        } else {
            "float.NegativeInfinity".to_string()
        }
    } else {
        format!("{value}f")
    }
}

fn access(access: Access) -> &'static str {
    match access {
        Access::Public => "public",
        Access::Private => "private",
    }
}

fn require_name(what: &str, name: &str) {
    assert!(
        !name.is_empty(),
        "render precondition violated: {what} has an empty name"
    );
}

/// Line-oriented writer tracking brace depth.
#[derive(Default)]
struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn open(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    fn finish(self) -> String {
        self.out
    }
}
