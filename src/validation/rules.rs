use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// The address shape browsers accept for <input type="email">.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Read access to a form's current values by field name.
/// Unknown fields read as the empty string.
pub trait FormValues {
    fn value(&self, field: &str) -> &str;
}

/// A single constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required,
    /// At least this many characters (Unicode scalar values).
    MinLength(usize),
    /// Address shape. Empty values pass; pair with `Required` to reject them.
    Email,
    /// Byte-for-byte equal to the named field.
    Matches(&'static str),
}

impl Rule {
    /// Returns true when `value` satisfies the rule.
    pub fn check(&self, value: &str, values: &dyn FormValues) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::MinLength(min) => value.chars().count() >= *min,
            Rule::Email => value.is_empty() || EMAIL_SHAPE.is_match(value),
            Rule::Matches(other) => value == values.value(other),
        }
    }
}

#[derive(Debug, Clone)]
struct FieldRules {
    field: &'static str,
    rules: Vec<(Rule, &'static str)>,
}

/// Field name to ordered `(rule, message)` pairs.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field with its rules, checked in the given order.
    pub fn field(
        mut self,
        field: &'static str,
        rules: impl IntoIterator<Item = (Rule, &'static str)>,
    ) -> Self {
        self.fields.push(FieldRules {
            field,
            rules: rules.into_iter().collect(),
        });
        self
    }

    /// Evaluates every field and reports the first failing rule of each.
    pub fn validate(&self, values: &dyn FormValues) -> ValidationErrors {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            let value = values.value(field.field);
            if let Some((_, message)) = field
                .rules
                .iter()
                .find(|(rule, _)| !rule.check(value, values))
            {
                errors.insert(field.field, *message);
            }
        }
        ValidationErrors(errors)
    }
}

/// Field name to error message. Empty means valid.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, &'static str>);

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
