use super::*;

#[test]
fn names_are_kebab_case() {
    assert_eq!(Category::AnonymousVariable.name(), "anonymous-variable");
    assert_eq!(Category::NamedSingleton.name(), "named-singleton");
    assert_eq!(Category::Punctuation.to_string(), "punctuation");
}

#[test]
fn none_has_no_style() {
    assert_eq!(Category::None.style(), None);
    assert_eq!(Category::Atom.style(), Some("atom"));
}

#[test]
fn names_round_trip_through_lookup() {
    for category in Category::ALL {
        assert_eq!(Category::from_name(category.name()), Some(category));
    }
    assert_eq!(Category::from_name("operator"), None);
}

#[test]
fn all_is_in_discriminant_order() {
    for (i, category) in Category::ALL.into_iter().enumerate() {
        assert_eq!(category as usize, i);
    }
}
