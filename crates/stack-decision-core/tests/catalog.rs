// crates/stack-decision-core/tests/catalog.rs
// ============================================================================
// Module: Tool Catalog Tests
// Description: Built-in catalog coverage and catalog validation errors.
// Purpose: Ensure every category is recommendable and lookups stay total.
// ============================================================================

//! ## Overview
//! Checks that the built-in catalog covers every category in declaration
//! order and that `Catalog::validate` rejects empty categories, duplicate ids,
//! and out-of-range popularity.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use stack_decision_core::Catalog;
use stack_decision_core::CatalogError;
use stack_decision_core::ComponentCategory;

mod common;
use crate::common::tool;

#[test]
fn builtin_catalog_passes_validation() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.validate(), Ok(()));
    for category in ComponentCategory::ALL {
        let candidates = catalog.candidates(category);
        assert!(!candidates.is_empty(), "no candidates for {category}");
        assert!(candidates.iter().all(|candidate| candidate.category == category));
    }
    assert_eq!(catalog.len(), catalog.tools().count());
}

#[test]
fn builtin_catalog_keeps_declaration_order() {
    let databases: Vec<&str> =
        Catalog::builtin().candidates(ComponentCategory::Database).iter().map(|t| t.id.as_str()).collect();
    assert_eq!(databases.first().copied(), Some("postgresql"));
    assert_eq!(databases.get(1).copied(), Some("mysql"));
    assert_eq!(Catalog::builtin().find("redis").map(|t| t.category), Some(ComponentCategory::Cache));
    assert!(Catalog::builtin().find("missing").is_none());
}

#[test]
fn missing_category_lookup_is_empty() {
    let catalog = Catalog::from_tools(vec![tool("pg", ComponentCategory::Database, 90)]);
    assert!(catalog.candidates(ComponentCategory::Cdn).is_empty());
    assert_eq!(catalog.validate(), Err(CatalogError::EmptyCategory(ComponentCategory::Cache)));
}

#[test]
fn validation_rejects_duplicates_and_bad_popularity() {
    let base = Catalog::from_tools(
        ComponentCategory::ALL.into_iter().map(|category| tool(category.as_str(), category, 50)),
    );
    assert_eq!(base.validate(), Ok(()));

    let duplicate = base.clone().with_candidates(
        ComponentCategory::Cdn,
        vec![tool("cdn", ComponentCategory::Cdn, 50), tool("cdn", ComponentCategory::Cdn, 60)],
    );
    assert_eq!(duplicate.validate(), Err(CatalogError::DuplicateToolId("cdn".to_string())));

    let mut loud = tool("loud", ComponentCategory::Cdn, 50);
    loud.popularity = Some(101);
    let out_of_range = base.with_candidates(ComponentCategory::Cdn, vec![loud]);
    assert_eq!(
        out_of_range.validate(),
        Err(CatalogError::PopularityOutOfRange {
            id: "loud".to_string(),
            value: 101,
        })
    );
}
