//! Integration tests for ansicodes

use ansicodes::codes::{self, BOLD, RESET, TXT_DEFAULT, TXT_GREEN, TXT_RED, TXT_YELLOW};
use ansicodes::{
    bkg_rgb, pad_leading, strip, txt_rgb, visible_width, OverrideStore, Rgb, StoreCommand,
    StoreError,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_rgb_exact_strings() {
    assert_eq!(bkg_rgb(0, 128, 255), "\u{1b}[48;2;0;128;255m");
    assert_eq!(txt_rgb(0, 128, 255), "\u{1b}[38;2;0;128;255m");
}

#[test]
fn test_rgb_clamp() {
    assert_eq!(bkg_rgb(-5, 300, 128), bkg_rgb(0, 255, 128));
}

#[test]
fn test_rgb_string_numerals() {
    assert_eq!(txt_rgb("10", "20", "30"), txt_rgb(10, 20, 30));
}

#[test]
fn test_rgb_owned_strings() {
    let (r, g, b) = (String::from("1"), String::from("2"), String::from("3"));
    assert_eq!(bkg_rgb(&r, &g, b), bkg_rgb(1, 2, 3));
}

#[test]
fn test_omitted_channels_default_to_white() {
    assert_eq!(Rgb::default().background(), bkg_rgb(255, 255, 255));
}

#[test]
fn test_strip_removes_color() {
    assert_eq!(strip("\u{1b}[31mHello\u{1b}[39m"), "Hello");
}

#[test]
fn test_strip_adjacent() {
    assert_eq!(strip("\u{1b}[1m\u{1b}[31mBold Red\u{1b}[0m"), "Bold Red");
}

#[test]
fn test_strip_boundaries() {
    assert_eq!(strip("abc\u{1b}[32m"), "abc");
    assert_eq!(strip("\u{1b}[32mabc"), "abc");
}

#[test]
fn test_named_constants() {
    assert_eq!(TXT_RED, "\u{1b}[31m");
    assert_eq!(RESET, "\u{1b}[0m");
    assert_eq!(BOLD, "\u{1b}[1m");
    assert_eq!(codes::lookup("TxtOrange"), Some(txt_rgb(255, 102, 0).as_str()));
}

#[test]
fn test_status_column_alignment() {
    // Status cells of different styles line up once padded by visible width.
    let cells = [
        format!("{TXT_RED} No {TXT_DEFAULT}"),
        format!("{TXT_GREEN}Done{TXT_DEFAULT}"),
        format!("{TXT_YELLOW} In {TXT_DEFAULT}"),
        String::from("?"),
    ];
    for cell in &cells {
        let padded = pad_leading(cell, 6);
        assert_eq!(visible_width(&padded), 6);
    }
    assert_eq!(strip(&pad_leading(&cells[0], 6)), "   No ");
}

#[test]
fn test_store_full_cycle() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("factions.json");

    let mut store = OverrideStore::builder()
        .path(&path)
        .len(5)
        .load()
        .expect("Failed to load store");
    store.apply(StoreCommand::Toggle(5)).expect("Toggle failed");
    store.save().expect("Save failed");
    assert_eq!(
        fs::read_to_string(&path).expect("Missing file"),
        "[false,false,false,false,true]"
    );

    // A newer version tracks more items; the old flags survive.
    let mut store = OverrideStore::builder()
        .path(&path)
        .len(7)
        .load()
        .expect("Failed to reload store");
    assert_eq!(
        store.as_slice(),
        &[false, false, false, false, true, false, false]
    );

    store
        .apply("all".parse().expect("Bad command"))
        .expect("SetAll failed");
    store.save().expect("Save failed");
    let store = OverrideStore::builder()
        .path(&path)
        .load()
        .expect("Failed to reload store");
    assert!(store.as_slice().iter().all(|done| *done));
}

#[test]
fn test_store_rejects_bad_toggle() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = OverrideStore::builder()
        .path(dir.path().join("o.json"))
        .len(2)
        .load()
        .expect("Failed to load store");

    let result = store.apply(StoreCommand::Toggle(9));
    assert!(matches!(
        result,
        Err(StoreError::OutOfRange {
            position: 9,
            len: 2
        })
    ));
}

#[test]
fn test_store_not_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("o.json");
    fs::write(&path, "not json").expect("Failed to write");

    let err = OverrideStore::builder().path(&path).load().unwrap_err();
    assert!(err.to_string().contains("Malformed"));
}
