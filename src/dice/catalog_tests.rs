// src/dice/catalog_tests.rs

use crate::dice::{DiceCatalog, GroupCombination, STANDARD_CATALOG};
use crate::utils::{DiceError, ErrorKind};

#[test]
fn test_lookup_every_die_type() {
    for name in ["D4", "D6", "D8", "D10", "D%", "D12", "D20"] {
        let die = STANDARD_CATALOG.die_type(name).unwrap();
        assert_eq!(die.name, name);
    }
}

#[test]
fn test_lookup_is_case_insensitive_and_trimmed() {
    assert_eq!(STANDARD_CATALOG.die_type("d20").unwrap().name, "D20");
    assert_eq!(STANDARD_CATALOG.group_type(" d100 ").unwrap().name, "D100");
}

#[test]
fn test_unknown_names_are_not_found() {
    let err = STANDARD_CATALOG.die_type("D7").unwrap_err();
    assert_eq!(err, DiceError::UnknownDieType("D7".to_string()));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // D100 is a group, not a physical die.
    assert!(STANDARD_CATALOG.die_type("D100").is_err());

    let err = STANDARD_CATALOG.group_type("D3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_every_die_type_has_a_simple_group() {
    for die in STANDARD_CATALOG.die_types() {
        let group = STANDARD_CATALOG.group_type(die.name).unwrap();
        assert_eq!(group.combination, GroupCombination::Simple);
        assert_eq!(group.components, std::slice::from_ref(die));
    }
    assert_eq!(STANDARD_CATALOG.group_types().len(), 8);
}

#[test]
fn test_default_catalog_is_standard() {
    let catalog = DiceCatalog::default();
    assert_eq!(catalog.die_types().len(), STANDARD_CATALOG.die_types().len());
    assert!(catalog.group_type("D100").is_ok());
}
