//! Integration tests for the generic entity table widget.
//!
//! These tests verify:
//! 1. Pagination footer and page navigation
//! 2. Header clicks cycle the sort
//! 3. Search narrows rows and its chip clears it
//! 4. Column toggles hide columns
//! 5. Row and toolbar buttons raise events for the owner

use crate::common::{TableFixture, parts_config, table_harness};
use kittest::Queryable;
use stockroom_business::table::{SortDirection, TableAction, TableConfig};
use stockroom_ui::widgets::TableEvent;
use ustr::Ustr;

mod common;

// =============================================================================
// PAGINATION
// =============================================================================

#[test]
fn test_first_page_and_next() {
    let mut harness = table_harness(TableFixture::new(parts_config()));

    assert!(harness.query_by_label("Showing 5 of 7 results").is_some());
    assert!(harness.query_by_label("Page 1 of 2").is_some());
    assert!(harness.query_by_label("clamp").is_none(), "7th row belongs to page 2");

    harness.query_by_label("Next").unwrap().click();
    harness.run();

    assert_eq!(harness.state().table.view().page(), 2);
    assert!(harness.query_by_label("Page 2 of 2").is_some());
    assert!(harness.query_by_label("Showing 2 of 7 results").is_some());
    assert!(harness.query_by_label("clamp").is_some());

    harness.query_by_label("Previous").unwrap().click();
    harness.run();
    assert_eq!(harness.state().table.view().page(), 1);
}

#[test]
fn test_single_page_hides_navigation() {
    let config = TableConfig::builder().title("Parts").build();
    let harness = table_harness(TableFixture::new(config));

    assert!(harness.query_by_label("Showing 7 of 7 results").is_some());
    assert!(harness.query_by_label("Next").is_none());
    assert!(harness.query_by_label("Previous").is_none());
}

#[test]
fn test_stale_page_is_clamped_after_rows_shrink() {
    let mut harness = table_harness(TableFixture::new(parts_config()));
    harness.state_mut().table.dispatch(TableAction::SetPage(2));
    harness.run();

    harness.state_mut().rows.truncate(3);
    harness.run();

    assert_eq!(harness.state().table.view().page(), 1);
    assert!(harness.query_by_label("Showing 3 of 3 results").is_some());
}

// =============================================================================
// SORTING
// =============================================================================

#[test]
fn test_header_click_cycles_sort() {
    let mut harness = table_harness(TableFixture::new(parts_config()));

    harness.query_by_label("Name ↕").unwrap().click();
    harness.run();

    let view = harness.state().table.view();
    assert_eq!(view.sort_column(), Some(Ustr::from("name")));
    assert_eq!(view.sort_direction(), SortDirection::Ascending);
    assert!(harness.query_by_label("Name ▲").is_some());
    // bolt, clamp, hinge, nut, rivet
    assert!(harness.query_by_label("clamp").is_some());
    assert!(harness.query_by_label("washer").is_none());

    harness.query_by_label("Name ▲").unwrap().click();
    harness.run();
    assert_eq!(
        harness.state().table.view().sort_direction(),
        SortDirection::Descending
    );
    assert!(harness.query_by_label("washer").is_some());

    harness.query_by_label("Name ▼").unwrap().click();
    harness.run();
    assert_eq!(harness.state().table.view().sort_column(), None);
    assert!(harness.query_by_label("Name ↕").is_some());
}

// =============================================================================
// SEARCH AND FILTERS
// =============================================================================

#[test]
fn test_search_narrows_rows_and_chip_clears_it() {
    let mut harness = table_harness(TableFixture::new(parts_config()));
    harness
        .state_mut()
        .table
        .dispatch(TableAction::SetSearch("nut".to_owned()));
    harness.run();

    assert!(harness.query_by_label("Showing 1 of 1 results (7 total)").is_some());
    assert!(harness.query_by_label("Filters (1)").is_some());

    harness.query_by_label("Search: nut ✕").unwrap().click();
    harness.run();

    assert_eq!(harness.state().table.view().search(), "");
    assert!(harness.query_by_label("Filters").is_some());
    assert!(harness.query_by_label("Showing 5 of 7 results").is_some());
}

#[test]
fn test_no_match_shows_filtered_empty_message() {
    let mut harness = table_harness(TableFixture::new(parts_config()));
    harness
        .state_mut()
        .table
        .dispatch(TableAction::SetSearch("zzz".to_owned()));
    harness.run();

    assert!(harness.query_by_label("No results match the active filters.").is_some());
    assert!(harness.query_by_label("Showing 0 of 0 results (7 total)").is_some());
}

#[test]
fn test_empty_rows_show_no_data() {
    let mut fixture = TableFixture::new(parts_config());
    fixture.rows.clear();
    let harness = table_harness(fixture);

    assert!(harness.query_by_label("No data found.").is_some());
}

#[test]
fn test_clear_button_resets_every_filter() {
    let mut harness = table_harness(TableFixture::new(parts_config()));
    {
        let table = &mut harness.state_mut().table;
        table.dispatch(TableAction::SetSearch("n".to_owned()));
        table.dispatch(TableAction::SetColumnFilter {
            column: Ustr::from("qty"),
            value: "10".to_owned(),
        });
    }
    harness.run();
    assert!(harness.query_by_label("Filters (2)").is_some());
    assert!(harness.query_by_label("Quantity: 10 ✕").is_some());

    harness.query_by_label("Clear").unwrap().click();
    harness.run();

    assert_eq!(harness.state().table.view().active_filter_count(), 0);
    assert!(harness.query_by_label("Clear").is_none());
}

#[test]
fn test_filters_button_opens_panel() {
    let mut harness = table_harness(TableFixture::new(parts_config()));

    harness.query_by_label("Filters").unwrap().click();
    harness.run();

    assert!(harness.state().table.filters_open());
    assert!(harness.query_by_label("Quantity").is_some());
}

// =============================================================================
// COLUMNS
// =============================================================================

#[test]
fn test_column_checkbox_hides_column() {
    let mut harness = table_harness(TableFixture::new(parts_config()));

    harness.query_by_label("Columns").unwrap().click();
    harness.run();
    assert!(harness.state().table.columns_open());

    harness.query_by_label("Quantity").unwrap().click();
    harness.run();

    assert!(!harness.state().table.view().is_visible(Ustr::from("qty")));
    assert!(harness.query_by_label("Quantity ↕").is_none());
    assert!(harness.query_by_label("Name ↕").is_some());
}

#[test]
fn test_disabled_toggles_are_not_rendered() {
    let config = TableConfig::builder()
        .title("Parts")
        .enable_column_toggle(false)
        .build();
    let harness = table_harness(TableFixture::new(config));

    assert!(harness.query_by_label("Columns").is_none());
    assert!(harness.query_by_label("Actions").is_none());
    assert!(harness.query_by_label("Edit").is_none());
}

// =============================================================================
// EVENTS
// =============================================================================

#[test]
fn test_row_buttons_raise_events() {
    let mut harness = table_harness(TableFixture::new(parts_config()));

    harness.query_all_by_label("Edit").next().unwrap().click();
    harness.run();
    harness.query_all_by_label("Delete").nth(1).unwrap().click();
    harness.run();
    harness.query_by_label("Add part").unwrap().click();
    harness.run();

    assert_eq!(
        harness.state().events,
        [TableEvent::Edit(1), TableEvent::Delete(2), TableEvent::Add]
    );
}
