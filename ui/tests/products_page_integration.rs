//! Integration tests for the products page: navigation, the product form
//! and the delete confirmation.

use crate::common::app_harness;
use kittest::Queryable;
use stockroom_ui::pages::Page;
use stockroom_ui::state::FormMode;

mod common;

#[test]
fn test_nav_button_switches_page() {
    let mut harness = app_harness(Page::Dashboard);
    assert!(harness.query_by_label("Total products").is_some());

    harness.query_all_by_label("Products").next().unwrap().click();
    harness.run();

    assert_eq!(harness.state().state().page, Page::Products);
    assert!(harness.query_by_label("Add product").is_some());
}

#[test]
fn test_products_table_shows_first_page() {
    let harness = app_harness(Page::Products);

    assert!(harness.query_by_label("Showing 10 of 12 results").is_some());
    assert!(harness.query_by_label("Page 1 of 2").is_some());
    assert!(harness.query_by_label("Copy paper A4").is_some());
    assert!(harness.query_by_label("$4.75").is_some());
}

#[test]
fn test_save_empty_form_shows_errors() {
    let mut harness = app_harness(Page::Products);

    harness.query_by_label("Add product").unwrap().click();
    harness.run();

    let form = harness.state().state().product_form.as_ref();
    assert_eq!(form.map(|f| f.mode), Some(FormMode::Create));

    harness.query_by_label("Save").unwrap().click();
    harness.run();

    assert!(harness.query_by_label("Code is required").is_some());
    assert!(harness.query_by_label("Description is required").is_some());
    assert!(harness.state().state().product_form.is_some(), "form stays open");
    assert_eq!(harness.state().state().store.products().len(), 12);
}

#[test]
fn test_save_valid_form_creates_product() {
    let mut harness = app_harness(Page::Products);

    harness.query_by_label("Add product").unwrap().click();
    harness.run();
    {
        let form = harness
            .state_mut()
            .state_mut()
            .product_form
            .as_mut()
            .unwrap();
        form.values.set("code", "OF-010");
        form.values.set("description", "Label maker");
        form.values.set("stock", "4");
    }

    harness.query_by_label("Save").unwrap().click();
    harness.run();

    let state = harness.state().state();
    assert!(state.product_form.is_none());
    assert!(state.error.is_none());
    let created = state.store.products().last().unwrap();
    assert_eq!(created.code, "OF-010");
    assert_eq!(created.stock, Some(4));
}

#[test]
fn test_edit_prefills_form() {
    let mut harness = app_harness(Page::Products);

    harness.query_all_by_label("Edit").next().unwrap().click();
    harness.run();

    let form = harness.state().state().product_form.as_ref().unwrap();
    assert_eq!(form.mode, FormMode::Edit(1));
    assert_eq!(form.values.get("code"), "OF-001");
    assert!(harness.query_by_label("Edit product #1").is_some());
}

#[test]
fn test_duplicate_code_reports_store_error() {
    let mut harness = app_harness(Page::Products);

    harness.query_by_label("Add product").unwrap().click();
    harness.run();
    {
        let form = harness
            .state_mut()
            .state_mut()
            .product_form
            .as_mut()
            .unwrap();
        form.values.set("code", "of-001");
        form.values.set("description", "Another paper");
    }

    harness.query_by_label("Save").unwrap().click();
    harness.run();

    let state = harness.state().state();
    assert!(state.product_form.is_some());
    assert_eq!(
        state.error.as_deref(),
        Some("Product code already in use: of-001")
    );
}

#[test]
fn test_delete_requires_confirmation() {
    let mut harness = app_harness(Page::Products);

    harness.query_all_by_label("Delete").next().unwrap().click();
    harness.run();

    assert_eq!(harness.state().state().pending_delete, Some(1));
    assert!(harness.query_by_label("Delete product").is_some());
    assert_eq!(harness.state().state().store.products().len(), 12);

    harness.query_by_label("Confirm delete").unwrap().click();
    harness.run();

    let state = harness.state().state();
    assert!(state.pending_delete.is_none());
    assert_eq!(state.store.products().len(), 11);
    assert!(state.store.products().iter().all(|p| p.id != 1));
}

#[test]
fn test_keep_cancels_delete() {
    let mut harness = app_harness(Page::Products);

    harness.query_all_by_label("Delete").next().unwrap().click();
    harness.run();
    harness.query_by_label("Keep").unwrap().click();
    harness.run();

    let state = harness.state().state();
    assert!(state.pending_delete.is_none());
    assert_eq!(state.store.products().len(), 12);
}
