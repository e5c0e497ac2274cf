//! Typed predicates and orderings

use crate::value::Constant;
use crate::Field;

/// Comparison operators understood by the filter inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
}

impl CompareOp {
    /// Operation field name in the filter input
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::NotIn => "nin",
            Self::Contains => "contains",
            Self::NotContains => "ncontains",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
        }
    }

    /// The operator that keeps the meaning when operands swap sides.
    pub fn mirrored(self) -> Option<Self> {
        match self {
            Self::Eq => Some(Self::Eq),
            Self::Neq => Some(Self::Neq),
            Self::Gt => Some(Self::Lt),
            Self::Gte => Some(Self::Lte),
            Self::Lt => Some(Self::Gt),
            Self::Lte => Some(Self::Gte),
            _ => None,
        }
    }

    pub(crate) fn takes_list(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    pub(crate) fn takes_string(self) -> bool {
        matches!(
            self,
            Self::Contains | Self::NotContains | Self::StartsWith | Self::EndsWith
        )
    }
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<F> {
    Field(F),
    Const(Constant),
}

/// Field operand
pub fn field<F: Field>(f: F) -> Operand<F> {
    Operand::Field(f)
}

/// Constant operand
pub fn constant<F: Field>(value: impl Into<Constant>) -> Operand<F> {
    Operand::Const(value.into())
}

impl<F: Field> Operand<F> {
    fn against(self, op: CompareOp, rhs: impl Into<Constant>) -> Predicate<F> {
        Predicate::compare(self, op, Operand::Const(rhs.into()))
    }

    pub fn equals(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Eq, rhs)
    }

    pub fn not_equals(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Neq, rhs)
    }

    pub fn gt(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Gt, rhs)
    }

    pub fn gte(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Gte, rhs)
    }

    pub fn lt(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Lt, rhs)
    }

    pub fn lte(self, rhs: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Lte, rhs)
    }

    pub fn is_in(self, values: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::In, values)
    }

    pub fn not_in(self, values: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::NotIn, values)
    }

    pub fn contains(self, needle: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::Contains, needle)
    }

    pub fn not_contains(self, needle: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::NotContains, needle)
    }

    pub fn starts_with(self, prefix: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::StartsWith, prefix)
    }

    pub fn ends_with(self, suffix: impl Into<Constant>) -> Predicate<F> {
        self.against(CompareOp::EndsWith, suffix)
    }
}

/// Boolean filter expression over the fields of one entity
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<F> {
    Compare {
        lhs: Operand<F>,
        op: CompareOp,
        rhs: Operand<F>,
    },
    And(Vec<Predicate<F>>),
    Or(Vec<Predicate<F>>),
    Not(Box<Predicate<F>>),
}

impl<F: Field> Predicate<F> {
    pub fn compare(lhs: Operand<F>, op: CompareOp, rhs: Operand<F>) -> Self {
        Self::Compare { lhs, op, rhs }
    }

    pub fn all(items: impl IntoIterator<Item = Predicate<F>>) -> Self {
        Self::And(items.into_iter().collect())
    }

    pub fn any(items: impl IntoIterator<Item = Predicate<F>>) -> Self {
        Self::Or(items.into_iter().collect())
    }

    pub fn and(self, other: Predicate<F>) -> Self {
        match self {
            Self::And(mut items) => {
                items.push(other);
                Self::And(items)
            }
            first => Self::And(vec![first, other]),
        }
    }

    pub fn or(self, other: Predicate<F>) -> Self {
        match self {
            Self::Or(mut items) => {
                items.push(other);
                Self::Or(items)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum ItemField {
        Id,
        Name,
    }

    impl Field for ItemField {
        fn name(&self) -> &'static str {
            match self {
                Self::Id => "id",
                Self::Name => "name",
            }
        }
    }

    #[test]
    fn test_mirrored_operators() {
        assert_eq!(CompareOp::Gt.mirrored(), Some(CompareOp::Lt));
        assert_eq!(CompareOp::Lte.mirrored(), Some(CompareOp::Gte));
        assert_eq!(CompareOp::Eq.mirrored(), Some(CompareOp::Eq));
        assert_eq!(CompareOp::Contains.mirrored(), None);
        assert_eq!(CompareOp::In.mirrored(), None);
    }

    #[test]
    fn test_and_flattens_chain() {
        let p = field(ItemField::Id)
            .gt(1)
            .and(field(ItemField::Id).lt(5))
            .and(field(ItemField::Name).equals("x"));

        match p {
            Predicate::And(items) => assert_eq!(items.len(), 3),
            other => panic!("expected And, got {:?}", other),
        }
    }

    #[test]
    fn test_or_wraps_and() {
        let p = field(ItemField::Id)
            .equals(1)
            .and(field(ItemField::Name).equals("a"))
            .or(field(ItemField::Id).equals(2));

        match p {
            Predicate::Or(items) => {
                assert_eq!(items.len(), 2);
                assert!(matches!(items[0], Predicate::And(_)));
            }
            other => panic!("expected Or, got {:?}", other),
        }
    }
}
