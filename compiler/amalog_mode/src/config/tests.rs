use super::*;

#[test]
fn defaults() {
    let config = ModeConfig::default();
    assert_eq!(config.indent_unit, 4);
    assert_eq!(config.tab_size, 4);
    assert_eq!(config.statement_indent_unit(), 4);
    assert_eq!(config.indent_style, IndentStyle::Contextual);
    assert!(config.extra_atoms.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn statement_unit_falls_back_to_indent_unit() {
    let mut config = ModeConfig::with_indent_unit(2);
    assert_eq!(config.statement_indent_unit(), 2);
    config.statement_indent_unit = Some(8);
    assert_eq!(config.statement_indent_unit(), 8);
}

#[test]
fn zero_indent_unit_is_rejected() {
    let config = ModeConfig::with_indent_unit(0);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroIndentUnit)));
}

#[test]
fn zero_tab_size_is_rejected() {
    let config = ModeConfig {
        tab_size: 0,
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTabSize)));
}

#[test]
fn extra_atoms_must_be_lowercase_words() {
    for bad in ["", "Foo", "_x", "9lives", "two words", "a-b"] {
        let config = ModeConfig::with_extra_atoms([bad]);
        match config.validate() {
            Err(ConfigError::InvalidAtom(atom)) => assert_eq!(atom, bad),
            other => panic!("expected InvalidAtom for {bad:?}, got {other:?}"),
        }
    }
    for good in ["main", "x_1", "$tmp"] {
        assert!(ModeConfig::with_extra_atoms([good]).validate().is_ok(), "{good:?}");
    }
}

#[test]
fn extra_atom_lookup() {
    let config = ModeConfig::with_extra_atoms(["load", "true"]);
    assert!(config.is_extra_atom("load"));
    assert!(config.is_extra_atom("true"));
    assert!(!config.is_extra_atom("store"));
}

#[test]
fn from_json_fills_missing_fields() {
    let config = ModeConfig::from_json(r#"{ "indent_unit": 2, "extra_atoms": ["nil"] }"#)
        .unwrap_or_else(|e| panic!("valid config rejected: {e}"));
    assert_eq!(config.indent_unit, 2);
    assert_eq!(config.tab_size, 4);
    assert!(config.is_extra_atom("nil"));
}

#[test]
fn from_json_reads_indent_style() {
    let config = ModeConfig::from_json(r#"{ "indent_style": "preserve" }"#)
        .unwrap_or_else(|e| panic!("valid config rejected: {e}"));
    assert_eq!(config.indent_style, IndentStyle::Preserve);
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = ModeConfig::from_json(r#"{ "indentUnit": 2 }"#);
    assert!(matches!(err, Err(ConfigError::Json(_))));
}

#[test]
fn from_json_validates() {
    let err = ModeConfig::from_json(r#"{ "tab_size": 0 }"#);
    assert!(matches!(err, Err(ConfigError::ZeroTabSize)));
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::ZeroIndentUnit.to_string(),
        "indent unit must be at least one column"
    );
    assert_eq!(
        ConfigError::InvalidAtom("Foo".into()).to_string(),
        "extra atom \"Foo\" is not a lowercase bare word"
    );
}
