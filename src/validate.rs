//! Field constraints for query parameters.
//!
//! Every parameter type lists its constrained fields through [`Validate`];
//! [`validate`] evaluates the whole table and reports every violation at once.
//! Absent fields are never checked.

use std::fmt;

use thiserror::Error;

/// A constraint on a single query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Integer must be `>= 0`.
    NonNegative,
    /// Integer must lie in `min..=max`.
    Range { min: i64, max: i64 },
    /// Text must hold at least this many characters.
    MinLen(usize),
    /// Text must hold exactly this many characters.
    Len(usize),
}

impl Constraint {
    /// Whether this constraint is meant for values of `value`'s kind.
    pub fn applies_to(&self, value: FieldValue<'_>) -> bool {
        matches!(
            (self, value),
            (Self::NonNegative | Self::Range { .. }, FieldValue::Int(_))
                | (Self::MinLen(_) | Self::Len(_), FieldValue::Text(_))
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonNegative => write!(f, "must be >= 0"),
            Self::Range { min, max } => write!(f, "must be between {min} and {max}"),
            Self::MinLen(n) => write!(f, "must be at least {n} characters long"),
            Self::Len(n) => write!(f, "must be exactly {n} characters long"),
        }
    }
}

/// The present value of a constrained field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(i64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
        }
    }
}

/// One row of a parameter type's constraint table.
#[derive(Debug, Clone, Copy)]
pub struct FieldCheck<'a> {
    pub field: &'static str,
    pub value: Option<FieldValue<'a>>,
    pub constraint: Constraint,
}

impl<'a> FieldCheck<'a> {
    /// Check an optional integer field.
    pub fn int(field: &'static str, value: Option<impl Into<i64>>, constraint: Constraint) -> Self {
        Self {
            field,
            value: value.map(|v| FieldValue::Int(v.into())),
            constraint,
        }
    }

    /// Check an optional text field.
    pub fn text(field: &'static str, value: Option<&'a str>, constraint: Constraint) -> Self {
        Self {
            field,
            value: value.map(FieldValue::Text),
            constraint,
        }
    }

    fn holds(&self) -> bool {
        let Some(value) = self.value else {
            return true;
        };

        match (value, self.constraint) {
            (FieldValue::Int(v), Constraint::NonNegative) => v >= 0,
            (FieldValue::Int(v), Constraint::Range { min, max }) => (min..=max).contains(&v),
            (FieldValue::Text(s), Constraint::MinLen(n)) => s.chars().count() >= n,
            (FieldValue::Text(s), Constraint::Len(n)) => s.chars().count() == n,
            (value, constraint) => {
                debug_assert!(
                    constraint.applies_to(value),
                    "{}: `{constraint:?}` cannot apply to {value:?}",
                    self.field
                );
                true
            }
        }
    }
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Query parameter name.
    pub field: &'static str,
    /// The constraint that failed.
    pub constraint: Constraint,
    /// Rendered offending value.
    pub value: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (got {})", self.field, self.constraint, self.value)
    }
}

/// All constraint violations found in one parameter object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error while validating field(s): {}", render(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Every violation, in table order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Names of the offending fields.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.violations.iter().map(|v| v.field)
    }

    /// Whether `field` is among the offending fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Declares the constraint table of a parameter type.
pub trait Validate {
    /// One entry per constrained field.
    fn checks(&self) -> Vec<FieldCheck<'_>>;
}

impl<T: Validate + ?Sized> Validate for &T {
    fn checks(&self) -> Vec<FieldCheck<'_>> {
        (**self).checks()
    }
}

/// Evaluate every check of `params`.
///
/// # Errors
///
/// Returns a [`ValidationError`] listing all violations when at least one
/// check fails.
pub fn validate<V: Validate + ?Sized>(params: &V) -> Result<(), ValidationError> {
    let violations: Vec<Violation> = params
        .checks()
        .into_iter()
        .filter(|check| !check.holds())
        .filter_map(|check| {
            check.value.map(|value| Violation {
                field: check.field,
                constraint: check.constraint,
                value: value.to_string(),
            })
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { violations })
    }
}

/// Inclusive range `1000..=9999` used for season years.
pub(crate) const SEASON: Constraint = Constraint::Range {
    min: 1000,
    max: 9999,
};

/// Inclusive range `0..=99` used for "last N"/"next N" counts.
pub(crate) const COUNT: Constraint = Constraint::Range { min: 0, max: 99 };

/// Fields of `params` whose constraint does not fit the kind of value the
/// field holds. Only present fields can be inspected.
#[cfg(test)]
pub(crate) fn mistyped_fields<V: Validate + ?Sized>(params: &V) -> Vec<&'static str> {
    params
        .checks()
        .into_iter()
        .filter(|check| {
            check
                .value
                .is_some_and(|value| !check.constraint.applies_to(value))
        })
        .map(|check| check.field)
        .collect()
}
