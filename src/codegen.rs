/// Structured Solidity fragment builder.
///
/// Feature modules assemble TYPED values here (struct literals,
/// array-returning functions); a single final formatting pass
/// turns them into text. Translation and numeric logic never
/// concatenate source strings directly.
///
/// IMPORTANT:
/// - Rendering is deterministic: same input, same bytes.
/// - Field order is emission order. Callers control it.
///
use std::fmt::Write;

const INDENT: &str = "  ";

/// A value on the right-hand side of a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Pre-rendered expression (library constant, integer literal)
    Expr(String),

    /// Nested struct literal
    Struct(StructLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// A Solidity struct literal, e.g.
/// `IAaveV3ConfigEngine.InterestRateInputData({...})`.
///
/// An empty field list renders as `Type({})` — a literal with
/// every member left at its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLiteral {
    pub type_name: String,
    pub fields: Vec<Field>,
}

impl StructLiteral {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field_expr(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: Value::Expr(expr.into()),
        });
        self
    }

    pub fn field_struct(mut self, name: impl Into<String>, lit: StructLiteral) -> Self {
        self.fields.push(Field {
            name: name.into(),
            value: Value::Struct(lit),
        });
        self
    }

    fn render_into(&self, out: &mut String, level: usize) {
        if self.fields.is_empty() {
            let _ = write!(out, "{}({{}})", self.type_name);
            return;
        }

        let _ = writeln!(out, "{}({{", self.type_name);
        let inner = INDENT.repeat(level + 1);
        for (ix, field) in self.fields.iter().enumerate() {
            let _ = write!(out, "{inner}{}: ", field.name);
            match &field.value {
                Value::Expr(expr) => out.push_str(expr),
                Value::Struct(lit) => lit.render_into(out, level + 1),
            }
            if ix + 1 < self.fields.len() {
                out.push(',');
            }
            out.push('\n');
        }
        let _ = write!(out, "{}}})", INDENT.repeat(level));
    }
}

/// A `public pure override` function that fills and returns a
/// fixed-size memory array of struct literals.
///
/// Shape of the output:
///
///     function <name>()
///       public
///       pure
///       override
///       returns (<element_type>[] memory)
///     {
///       <element_type>[] memory <array_var> = new <element_type>[](N);
///       <array_var>[0] = <element 0>;
///       ...
///       return <array_var>;
///     }
///
/// The declared length is always exactly `elements.len()`,
/// including zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayFunction {
    pub name: String,
    pub element_type: String,
    pub array_var: String,
    pub elements: Vec<StructLiteral>,
}

impl ArrayFunction {
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "function {}()", self.name);
        let _ = writeln!(out, "{INDENT}public");
        let _ = writeln!(out, "{INDENT}pure");
        let _ = writeln!(out, "{INDENT}override");
        let _ = writeln!(out, "{INDENT}returns ({}[] memory)", self.element_type);
        let _ = writeln!(out, "{{");
        let _ = writeln!(
            out,
            "{INDENT}{ty}[] memory {var} = new {ty}[]({len});",
            ty = self.element_type,
            var = self.array_var,
            len = self.elements.len()
        );

        for (ix, element) in self.elements.iter().enumerate() {
            let _ = write!(out, "{INDENT}{}[{ix}] = ", self.array_var);
            element.render_into(&mut out, 1);
            out.push_str(";\n");
        }

        let _ = writeln!(out, "{INDENT}return {};", self.array_var);
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_renders_flat() {
        let mut out = String::new();
        StructLiteral::new("Engine.InputData").render_into(&mut out, 1);
        assert_eq!(out, "Engine.InputData({})");
    }

    #[test]
    fn nested_struct_indents_one_level_per_depth() {
        let lit = StructLiteral::new("Engine.Update")
            .field_expr("asset", "PoolAssets.USDC_UNDERLYING")
            .field_struct(
                "params",
                StructLiteral::new("Engine.InputData").field_expr("rate", "0"),
            );

        let mut out = String::new();
        lit.render_into(&mut out, 1);
        assert_eq!(
            out,
            "Engine.Update({\n    asset: PoolAssets.USDC_UNDERLYING,\n    params: Engine.InputData({\n      rate: 0\n    })\n  })"
        );
    }

    #[test]
    fn empty_function_allocates_zero_length_array() {
        let rendered = ArrayFunction {
            name: "rateStrategiesUpdates".into(),
            element_type: "Engine.Update".into(),
            array_var: "rateStrategies".into(),
            elements: vec![],
        }
        .render();

        assert!(rendered.contains("new Engine.Update[](0);"));
        assert!(rendered.contains("return rateStrategies;"));
        assert!(!rendered.contains("rateStrategies[0]"));
    }

    #[test]
    fn elements_are_assigned_in_order() {
        let rendered = ArrayFunction {
            name: "f".into(),
            element_type: "T".into(),
            array_var: "xs".into(),
            elements: vec![
                StructLiteral::new("T").field_expr("a", "1"),
                StructLiteral::new("T").field_expr("a", "2"),
            ],
        }
        .render();

        let first = rendered.find("xs[0]").expect("element 0");
        let second = rendered.find("xs[1]").expect("element 1");
        assert!(first < second);
        assert!(rendered.contains("new T[](2);"));
    }
}
