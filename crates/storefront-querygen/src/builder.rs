//! Query text rendering

use serde_json::{Map, Value};

use crate::error::{QueryBuildError, Result};
use crate::predicate::{CompareOp, Direction, Operand, Predicate};
use crate::value::{quote, Constant};
use crate::Field;

/// Rendered query text and its variables
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQlQuery {
    pub query: String,
    pub variables: Map<String, Value>,
}

impl GraphQlQuery {
    /// Standard GraphQL-over-HTTP request body
    pub fn to_request_body(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": Value::Object(self.variables.clone()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootShape {
    /// Paged field, selection goes under `nodes`
    Connection,
    /// Object or list field, selection goes directly under the field
    Plain,
}

/// Builder for a single-root-field query
#[derive(Debug, Clone)]
pub struct QueryBuilder<F> {
    root: String,
    shape: RootShape,
    operation_name: Option<String>,
    selection: Vec<F>,
    arguments: Vec<(String, Constant)>,
    filter: Option<Predicate<F>>,
    order: Vec<(F, Direction)>,
    first: Option<u32>,
    after: Option<String>,
    last: Option<u32>,
    before: Option<String>,
    total_count: bool,
    page_info: bool,
}

impl<F: Field> QueryBuilder<F> {
    fn new(root: &str, shape: RootShape) -> Self {
        Self {
            root: root.to_string(),
            shape,
            operation_name: None,
            selection: Vec::new(),
            arguments: Vec::new(),
            filter: None,
            order: Vec::new(),
            first: None,
            after: None,
            last: None,
            before: None,
            total_count: false,
            page_info: false,
        }
    }

    /// Query a paged connection field such as `products`
    pub fn connection(root: &str) -> Self {
        Self::new(root, RootShape::Connection)
    }

    /// Query an object or list field such as `product(id:)`
    pub fn field(root: &str) -> Self {
        Self::new(root, RootShape::Plain)
    }

    pub fn operation_name(mut self, name: &str) -> Self {
        self.operation_name = Some(name.to_string());
        self
    }

    /// Fields to project, appended in order
    pub fn select(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        self.selection.extend(fields);
        self
    }

    pub fn argument(mut self, name: &str, value: impl Into<Constant>) -> Self {
        self.arguments.push((name.to_string(), value.into()));
        self
    }

    /// Set the `where` predicate. A second call combines with `and`.
    pub fn filter(mut self, predicate: Predicate<F>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    /// Replace the ordering with a single key
    pub fn order_by(mut self, field: F, direction: Direction) -> Self {
        self.order.clear();
        self.order.push((field, direction));
        self
    }

    /// Append a secondary ordering key
    pub fn then_by(mut self, field: F, direction: Direction) -> Self {
        self.order.push((field, direction));
        self
    }

    pub fn first(mut self, n: u32) -> Self {
        self.first = Some(n);
        self
    }

    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    pub fn last(mut self, n: u32) -> Self {
        self.last = Some(n);
        self
    }

    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub fn with_total_count(mut self) -> Self {
        self.total_count = true;
        self
    }

    pub fn with_page_info(mut self) -> Self {
        self.page_info = true;
        self
    }

    pub fn build(&self) -> Result<GraphQlQuery> {
        if self.selection.is_empty() {
            return Err(QueryBuildError::EmptySelection);
        }

        let mut vars = Variables::default();
        let mut args = Vec::new();

        for (name, value) in &self.arguments {
            args.push(format!("{}: {}", name, vars.render(value)?));
        }
        if let Some(predicate) = &self.filter {
            args.push(format!("where: {}", render_predicate(predicate, &mut vars)?));
        }
        if !self.order.is_empty() {
            let terms: Vec<String> = self
                .order
                .iter()
                .map(|(f, dir)| format!("{{ {}: {} }}", f.name(), dir.keyword()))
                .collect();
            args.push(format!("order: [{}]", terms.join(", ")));
        }
        if let Some(n) = self.first {
            args.push(format!("first: {}", n));
        }
        if let Some(cursor) = &self.after {
            args.push(format!("after: {}", quote(cursor)));
        }
        if let Some(n) = self.last {
            args.push(format!("last: {}", n));
        }
        if let Some(cursor) = &self.before {
            args.push(format!("before: {}", quote(cursor)));
        }

        let fields: Vec<&str> = self.selection.iter().map(|f| f.name()).collect();
        let fields = fields.join(" ");
        let selection = match self.shape {
            RootShape::Plain => fields,
            RootShape::Connection => {
                let mut parts = vec![format!("nodes {{ {} }}", fields)];
                if self.page_info {
                    parts.push(
                        "pageInfo { hasNextPage hasPreviousPage startCursor endCursor }".to_string(),
                    );
                }
                if self.total_count {
                    parts.push("totalCount".to_string());
                }
                parts.join(" ")
            }
        };

        let root = if args.is_empty() {
            self.root.clone()
        } else {
            format!("{}({})", self.root, args.join(", "))
        };

        let mut header = String::from("query");
        if let Some(name) = &self.operation_name {
            header.push(' ');
            header.push_str(name);
        }
        if !vars.definitions.is_empty() {
            header.push_str(&format!("({})", vars.definitions.join(", ")));
        }

        Ok(GraphQlQuery {
            query: format!("{} {{ {} {{ {} }} }}", header, root, selection),
            variables: vars.values,
        })
    }
}

/// Collects values promoted to operation variables
#[derive(Default)]
struct Variables {
    definitions: Vec<String>,
    values: Map<String, Value>,
}

impl Variables {
    fn promote(&mut self, value: &Constant, ty: &str) -> String {
        let name = format!("p{}", self.values.len());
        self.definitions.push(format!("${}: {}", name, ty));
        self.values.insert(name.clone(), value.to_json());
        format!("${}", name)
    }

    fn render(&mut self, value: &Constant) -> Result<String> {
        Ok(match value {
            Constant::Decimal(_) => self.promote(value, "Decimal!"),
            Constant::DateTime(_) => self.promote(value, "DateTime!"),
            Constant::Null => "null".to_string(),
            Constant::Bool(b) => b.to_string(),
            Constant::Int(i) => i.to_string(),
            Constant::Float(f) if f.is_finite() => f.to_string(),
            Constant::Float(f) => {
                return Err(QueryBuildError::Unsupported(format!(
                    "non-finite float {}",
                    f
                )))
            }
            Constant::String(s) => quote(s),
            Constant::List(items) => {
                let rendered = items
                    .iter()
                    .map(|item| self.render(item))
                    .collect::<Result<Vec<_>>>()?;
                format!("[{}]", rendered.join(", "))
            }
        })
    }
}

fn render_predicate<F: Field>(predicate: &Predicate<F>, vars: &mut Variables) -> Result<String> {
    match predicate {
        Predicate::Compare { lhs, op, rhs } => {
            let (field, op, value) = normalize(lhs, *op, rhs)?;
            check_shape(field, op, value)?;
            Ok(format!(
                "{{ {}: {{ {}: {} }} }}",
                field.name(),
                op.keyword(),
                vars.render(value)?
            ))
        }
        Predicate::And(items) => render_group("and", items, vars),
        Predicate::Or(items) => render_group("or", items, vars),
        Predicate::Not(_) => Err(QueryBuildError::Unsupported(
            "negation has no filter input form".to_string(),
        )),
    }
}

fn render_group<F: Field>(keyword: &str, items: &[Predicate<F>], vars: &mut Variables) -> Result<String> {
    if items.is_empty() {
        return Err(QueryBuildError::Unsupported(format!("empty `{}` group", keyword)));
    }
    let rendered = items
        .iter()
        .map(|p| render_predicate(p, vars))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{{ {}: [{}] }}", keyword, rendered.join(", ")))
}

/// Put the field on the left, mirroring the operator if needed.
fn normalize<'a, F: Field>(
    lhs: &'a Operand<F>,
    op: CompareOp,
    rhs: &'a Operand<F>,
) -> Result<(F, CompareOp, &'a Constant)> {
    match (lhs, rhs) {
        (Operand::Field(f), Operand::Const(c)) => Ok((*f, op, c)),
        (Operand::Const(c), Operand::Field(f)) => {
            let mirrored = op.mirrored().ok_or_else(|| {
                QueryBuildError::Unsupported(format!(
                    "operator `{}` with the constant on the left",
                    op.keyword()
                ))
            })?;
            Ok((*f, mirrored, c))
        }
        (Operand::Field(a), Operand::Field(b)) => Err(QueryBuildError::Unsupported(format!(
            "comparison between fields `{}` and `{}`",
            a.name(),
            b.name()
        ))),
        (Operand::Const(_), Operand::Const(_)) => Err(QueryBuildError::Unsupported(
            "comparison between two constants".to_string(),
        )),
    }
}

fn check_shape<F: Field>(field: F, op: CompareOp, value: &Constant) -> Result<()> {
    let ok = if op.takes_list() {
        matches!(value, Constant::List(_))
    } else if op.takes_string() {
        matches!(value, Constant::String(_))
    } else {
        !matches!(value, Constant::List(_))
    };
    if ok {
        Ok(())
    } else {
        Err(QueryBuildError::Unsupported(format!(
            "operator `{}` on `{}` with value {:?}",
            op.keyword(),
            field.name(),
            value
        )))
    }
}
