// Test serialization using json
#![cfg(feature = "serde")]

use serde::{de::Deserialize, ser::Serialize};
use std::cmp::PartialEq;
use std::fmt::Debug;
use vellum_fonts::{FontResolvingOptions, FontSlant, FontStretch, StyleSimulations, WeightClass};

fn test<X: Debug + PartialEq + Serialize + for<'a> Deserialize<'a>>(x: X, t: &str) {
    match serde_json::to_string(&x) {
        Ok(text) => assert_eq!(text, t),
        Err(err) => panic!("Ser of '{x:?}' failed: {err}"),
    }

    match serde_json::from_str::<X>(t) {
        Ok(v) => assert_eq!(v, x),
        Err(err) => panic!("Deser of '{t}' failed: {err}"),
    }
}

#[test]
fn axes() {
    test(FontSlant::Normal, "\"Normal\"");
    test(FontSlant::Italic, "\"Italic\"");
    test(WeightClass::Bold, "\"Bold\"");
    test(FontStretch::Normal, "\"Normal\"");
}

#[test]
fn simulations() {
    test(StyleSimulations::empty(), "\"\"");
    test(StyleSimulations::BOLD, "\"BOLD\"");
    test(
        StyleSimulations::BOLD | StyleSimulations::ITALIC,
        "\"BOLD | ITALIC\"",
    );
}

#[test]
fn options() {
    test(
        FontResolvingOptions::new(true, false),
        "{\"is_bold\":true,\"is_italic\":false,\"override_style_simulations\":null}",
    );
    test(
        FontResolvingOptions::new(false, true).with_style_simulations(StyleSimulations::ITALIC),
        "{\"is_bold\":false,\"is_italic\":true,\"override_style_simulations\":\"ITALIC\"}",
    );
}
