//! Search predicate built from a sparse inventory filter.
//!
//! The predicate is an ordered conjunction of equality clauses. It always
//! starts with `enabled = true`, followed by one clause per populated filter
//! field in the order name, inventory type, quantity. Storage bindings either
//! evaluate it in memory ([`InventoryPredicate::matches`]) or render each
//! clause to SQL ([`Clause::column`]).

use std::fmt;

use crate::models::{Inventory, InventoryFilter};

/// One equality test against an inventory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Enabled(bool),
    NameEquals(String),
    TypeNameEquals(String),
    QuantityEquals(i64),
}

impl Clause {
    /// Column the clause compares, qualified for the inventory/type join
    pub fn column(&self) -> &'static str {
        match self {
            Clause::Enabled(_) => "i.enabled",
            Clause::NameEquals(_) => "i.name",
            Clause::TypeNameEquals(_) => "t.type_name",
            Clause::QuantityEquals(_) => "i.quantity",
        }
    }

    pub fn matches(&self, record: &Inventory) -> bool {
        match self {
            Clause::Enabled(enabled) => record.enabled == *enabled,
            Clause::NameEquals(name) => record.name == *name,
            // untyped records never match a type clause
            Clause::TypeNameEquals(type_name) => record.type_name() == Some(type_name.as_str()),
            Clause::QuantityEquals(quantity) => record.quantity == *quantity,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Enabled(v) => write!(f, "{} = {}", self.column(), v),
            Clause::NameEquals(v) | Clause::TypeNameEquals(v) => {
                write!(f, "{} = {:?}", self.column(), v)
            }
            Clause::QuantityEquals(v) => write!(f, "{} = {}", self.column(), v),
        }
    }
}

/// Conjunction of clauses; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryPredicate {
    clauses: Vec<Clause>,
}

impl InventoryPredicate {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when every clause holds for the record
    pub fn matches(&self, record: &Inventory) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }
}

impl fmt::Display for InventoryPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build the search predicate for a filter.
///
/// Absent fields add nothing; an empty string counts as absent, a zero
/// quantity does not.
pub fn search_inventory(filter: &InventoryFilter) -> InventoryPredicate {
    let mut clauses = vec![Clause::Enabled(true)];

    if let Some(name) = non_empty(&filter.name) {
        clauses.push(Clause::NameEquals(name.to_string()));
    }
    if let Some(type_name) = non_empty(&filter.inventory_type) {
        clauses.push(Clause::TypeNameEquals(type_name.to_string()));
    }
    if let Some(quantity) = filter.quantity {
        clauses.push(Clause::QuantityEquals(quantity));
    }

    InventoryPredicate { clauses }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InventoryType;

    fn record(name: &str, quantity: i64, type_name: Option<&str>, enabled: bool) -> Inventory {
        let mut r = Inventory::new(name, quantity, type_name.map(|t| InventoryType::new(1, t)));
        r.enabled = enabled;
        r
    }

    #[test]
    fn test_empty_filter_only_requires_enabled() {
        let predicate = search_inventory(&InventoryFilter::default());
        assert_eq!(predicate.clauses(), &[Clause::Enabled(true)]);
        assert!(predicate.matches(&record("Widget", 5, None, true)));
        assert!(!predicate.matches(&record("Widget", 5, None, false)));
    }

    #[test]
    fn test_clause_order_is_stable() {
        let filter = InventoryFilter {
            quantity: Some(3),
            inventory_type: Some("Hardware".into()),
            name: Some("Widget".into()),
        };
        assert_eq!(
            search_inventory(&filter).clauses(),
            &[
                Clause::Enabled(true),
                Clause::NameEquals("Widget".into()),
                Clause::TypeNameEquals("Hardware".into()),
                Clause::QuantityEquals(3),
            ]
        );
    }

    #[test]
    fn test_empty_strings_are_absent_but_zero_is_not() {
        let filter = InventoryFilter {
            name: Some(String::new()),
            inventory_type: Some(String::new()),
            quantity: Some(0),
        };
        assert_eq!(
            search_inventory(&filter).clauses(),
            &[Clause::Enabled(true), Clause::QuantityEquals(0)]
        );
    }

    #[test]
    fn test_whitespace_name_is_kept_verbatim() {
        let filter = InventoryFilter {
            name: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(search_inventory(&filter).clauses().len(), 2);
    }

    #[test]
    fn test_name_is_exact_match() {
        let filter = InventoryFilter {
            name: Some("Widget".into()),
            ..Default::default()
        };
        let predicate = search_inventory(&filter);
        assert!(predicate.matches(&record("Widget", 1, None, true)));
        assert!(!predicate.matches(&record("Widget XL", 1, None, true)));
        assert!(!predicate.matches(&record("widget", 1, None, true)));
    }

    #[test]
    fn test_type_clause_skips_untyped_records() {
        let filter = InventoryFilter {
            inventory_type: Some("Hardware".into()),
            ..Default::default()
        };
        let predicate = search_inventory(&filter);
        assert!(predicate.matches(&record("A", 1, Some("Hardware"), true)));
        assert!(!predicate.matches(&record("B", 1, Some("Software"), true)));
        assert!(!predicate.matches(&record("C", 1, None, true)));
    }

    #[test]
    fn test_all_clauses_must_hold() {
        let filter = InventoryFilter {
            name: Some("Widget".into()),
            inventory_type: Some("Hardware".into()),
            quantity: Some(0),
        };
        let predicate = search_inventory(&filter);
        assert!(predicate.matches(&record("Widget", 0, Some("Hardware"), true)));
        assert!(!predicate.matches(&record("Widget", 1, Some("Hardware"), true)));
        assert!(!predicate.matches(&record("Widget", 0, Some("Hardware"), false)));
    }

    #[test]
    fn test_display() {
        let filter = InventoryFilter {
            name: Some("Widget".into()),
            quantity: Some(5),
            ..Default::default()
        };
        assert_eq!(
            search_inventory(&filter).to_string(),
            r#"i.enabled = true AND i.name = "Widget" AND i.quantity = 5"#
        );
    }
}
