//! Java source generation from class metamodels.

use cgraml_core::{ClassMeta, CodeEmitter, EmitError, Expr, FieldMeta, MethodMeta, Statement};
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &str = "    ";

/// Writes one `.java` file per class under `<output>/<package path>/`.
#[derive(Debug)]
pub struct JavaEmitter {
    output_dir: PathBuf,
}

impl JavaEmitter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }
}

impl CodeEmitter for JavaEmitter {
    fn emit(&mut self, class: &ClassMeta) -> Result<(), EmitError> {
        if class.class_name().is_empty() {
            return Err(EmitError::Render(format!(
                "class in package '{}' has no name",
                class.package_name()
            )));
        }

        let package_dir = self.output_dir.join(class.package_name().replace('.', "/"));
        fs::create_dir_all(&package_dir)?;

        let path = package_dir.join(format!("{}.java", class.class_name()));
        fs::write(path, render_class(class))?;
        Ok(())
    }
}

/// Render a class as Java source.
pub fn render_class(class: &ClassMeta) -> String {
    let mut code = String::new();

    code.push_str(&format!("package {};\n\n", class.package_name()));

    if class.fields().iter().any(|f| f.serialized_name.is_some()) {
        code.push_str("import com.google.gson.annotations.SerializedName;\n\n");
    }

    push_javadoc(&mut code, "", class.documentation());

    code.push_str(&format!("public class {}", class.class_name()));
    if !class.interfaces().is_empty() {
        code.push_str(&format!(" implements {}", class.interfaces().join(", ")));
    }
    code.push_str(" {\n");

    for field in class.fields() {
        code.push('\n');
        render_field(&mut code, field);
    }

    for method in class.methods() {
        code.push('\n');
        render_method(&mut code, method);
    }

    code.push_str("}\n");
    code
}

fn render_field(code: &mut String, field: &FieldMeta) {
    if let Some(description) = &field.description {
        push_javadoc(code, INDENT, description);
    }
    if let Some(wire_name) = &field.serialized_name {
        code.push_str(&format!(
            "{INDENT}@SerializedName(\"{}\")\n",
            escape_java_string(wire_name)
        ));
    }
    code.push_str(&format!(
        "{INDENT}{} {} {};\n",
        field.visibility, field.ty, field.name
    ));
}

fn render_method(code: &mut String, method: &MethodMeta) {
    let parameters: Vec<String> = method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect();

    code.push_str(&format!(
        "{INDENT}{} {} {}({}) {{\n",
        method.visibility,
        method.return_type.as_deref().unwrap_or("void"),
        method.name,
        parameters.join(", ")
    ));

    let body_indent = INDENT.repeat(2);
    for statement in &method.body {
        let line = match statement {
            Statement::Assign { field, value } => {
                format!("this.{field} = {};", render_expr(value, &body_indent))
            }
            Statement::Return(value) => format!("return {};", render_expr(value, &body_indent)),
        };
        code.push_str(&format!("{body_indent}{line}\n"));
    }

    code.push_str(&format!("{INDENT}}}\n"));
}

/// Render an expression; call chains of two or more calls put each call on
/// its own continuation line.
fn render_expr(expr: &Expr, indent: &str) -> String {
    let mut segments = Vec::new();
    let mut root = expr;
    while let Expr::Call {
        receiver,
        method,
        args,
    } = root
    {
        segments.push((method.as_str(), args.as_slice()));
        root = receiver.as_ref();
    }

    if segments.len() < 2 {
        return render_inline(expr);
    }

    let mut out = render_inline(root);
    for (method, args) in segments.into_iter().rev() {
        out.push_str(&format!("\n{indent}{INDENT}.{method}({})", render_args(args)));
    }
    out
}

fn render_inline(expr: &Expr) -> String {
    match expr {
        Expr::This => "this".to_string(),
        Expr::Null => "null".to_string(),
        Expr::Field { name } => format!("this.{name}"),
        Expr::Variable { name } => name.clone(),
        Expr::StaticCall {
            class,
            method,
            args,
        } => format!("{class}.{method}({})", render_args(args)),
        Expr::Call {
            receiver,
            method,
            args,
        } => format!("{}.{method}({})", render_inline(receiver), render_args(args)),
    }
}

fn render_args(args: &[Expr]) -> String {
    args.iter().map(render_inline).collect::<Vec<_>>().join(", ")
}

/// Escape text for use inside a Java string literal.
fn escape_java_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Append a javadoc block; blank lines are kept and `*/` is neutralised.
fn push_javadoc(code: &mut String, indent: &str, text: &str) {
    if text.trim().is_empty() {
        return;
    }

    code.push_str(&format!("{indent}/**\n"));
    for line in text.lines() {
        let line = line.replace("*/", "*&#47;");
        if line.trim().is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", line.trim_end()));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}
