// Host-side tests for CSS formatting of the icon transform.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;
use upload_core::IconTransform;

#[test]
fn identity_is_detected() {
    assert!(is_identity(&IconTransform::IDENTITY));
    assert!(!is_identity(&IconTransform {
        translate_y: -10.0,
        scale: 1.0
    }));
    assert!(!is_identity(&IconTransform {
        translate_y: 0.0,
        scale: 1.1
    }));
}

#[test]
fn transform_css_translates_before_scaling() {
    let css = icon_transform_css(&IconTransform {
        translate_y: -360.0,
        scale: 1.1,
    });
    assert_eq!(css, "translateY(-360.00px) scale(1.1000)");
}

#[test]
fn transform_css_keeps_sub_pixel_bob() {
    let css = icon_transform_css(&IconTransform {
        translate_y: -4.126,
        scale: 1.0,
    });
    assert_eq!(css, "translateY(-4.13px) scale(1.0000)");
}
