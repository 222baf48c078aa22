use super::*;
use crate::store::MemoryStore;
use rstest::rstest;

const SECTION: &str = "rootSection";

fn field(name: &str, value: &str) -> Field {
    Field::new(name, value).unwrap()
}

/// `Derived : Base : Object`, with `Object` living in another unit.
fn base() -> TypeDescriptor {
    TypeDescriptor::new("Base", "tests").with_base(TypeDescriptor::new("Object", "core"))
}

fn derived() -> TypeDescriptor {
    TypeDescriptor::new("Derived", "tests").with_base(base())
}

fn hierarchy_store() -> Arc<MemoryStore> {
    let mut section = Section::new();
    section.add(field("SettingOne", "boot")).unwrap();
    section.set(field("SettingOne", "Root"));
    for (name, value) in [
        ("Base.SettingTwo", "Base"),
        ("Base.Derived.SettingThree", "Derived"),
        ("SettingFour", "Root"),
        ("Base.SettingFour", "Base"),
        ("SettingFive", "Root"),
        ("Base.SettingFive", "Base"),
        ("Base.Derived.SettingFive", "Derived"),
        ("SettingSix", "Root"),
        ("Base.Derived.SettingSix", "Derived"),
    ] {
        section.add(field(name, value)).unwrap();
    }
    Arc::new(MemoryStore::from_sections([(SECTION, section)]))
}

fn resolver(store: &Arc<MemoryStore>, origin: Option<TypeDescriptor>) -> SettingResolver<MemoryStore> {
    SettingResolver::new(Arc::clone(store), SECTION, origin)
}

#[rstest]
#[case("SettingOne", "Root")]
#[case("SettingTwo", "Base")]
#[case("SettingThree", "Derived")]
#[case("SettingFour", "Base")]
#[case("SettingFive", "Derived")]
#[case("SettingSix", "Derived")]
fn test_derived_resolution(#[case] name: &str, #[case] expected: &str) {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));
    assert_eq!(settings.get::<String>(name).unwrap(), expected);
}

#[test]
fn test_less_specific_bindings() {
    let store = hierarchy_store();
    let base_settings = resolver(&store, Some(base()));
    assert_eq!(base_settings.get::<String>("SettingTwo").unwrap(), "Base");
    assert_eq!(base_settings.get::<String>("SettingFive").unwrap(), "Base");
    assert_eq!(base_settings.get::<String>("SettingOne").unwrap(), "Root");

    let unbound = resolver(&store, None);
    assert_eq!(unbound.get::<String>("SettingOne").unwrap(), "Root");
    assert_eq!(unbound.get::<String>("SettingFive").unwrap(), "Root");
}

#[test]
fn test_three_level_chain_most_specific_first() {
    let mut section = Section::new();
    section.add(field("A.B.C.X", "c")).unwrap();
    section.add(field("A.B.X", "b")).unwrap();
    section.add(field("X", "bare")).unwrap();
    let store = Arc::new(MemoryStore::from_sections([("s", section)]));

    let c = TypeDescriptor::chain("app", ["A", "B", "C"]).unwrap();
    let b = c.base().cloned();

    let get = |origin| {
        SettingResolver::new(Arc::clone(&store), "s", origin)
            .get::<String>("X")
            .unwrap()
    };
    assert_eq!(get(Some(c.clone())), "c");
    assert_eq!(get(b), "b");
    assert_eq!(get(None), "bare");
}

#[test]
fn test_missing_setting_message() {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));

    assert_eq!(settings.try_get::<i32>("Missing").unwrap(), None);
    let err = settings.get::<i32>("Missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Setting 'Missing' not found for type tests::Derived. Section name is 'rootSection'"
    );
}

#[test]
fn test_unbound_does_not_see_qualified_fields() {
    let store = hierarchy_store();
    let err = resolver(&store, None).get::<String>("SettingTwo").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Setting 'SettingTwo' not found for type none. Section name is 'rootSection'"
    );
}

#[test]
fn test_conversion_error_is_not_not_found() {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));

    let err = settings.get::<i32>("SettingOne").unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(
        err,
        SettingsError::Conversion { ref field, type_name: "i32", .. } if field == "SettingOne"
    ));
    assert_eq!(
        err.to_string(),
        "'Root' is not a valid value for i32: invalid digit found in string"
    );

    // try_get propagates it rather than reporting "absent"
    assert!(settings.try_get::<i32>("SettingOne").is_err());
}

#[test]
fn test_set_uses_full_qualifier_and_round_trips() {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));

    resolver(&store, Some(derived()))
        .set("SettingSix", "different".to_string())
        .unwrap();
    assert_eq!(settings.get::<String>("SettingSix").unwrap(), "different");

    settings.set("SettingSix", "Derived".to_string()).unwrap();
    assert_eq!(settings.get::<String>("SettingSix").unwrap(), "Derived");

    // other levels untouched
    assert_eq!(resolver(&store, None).get::<String>("SettingSix").unwrap(), "Root");
}

#[test]
fn test_set_creates_new_qualified_field() {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));

    settings.set("SettingTwo", 7_u8).unwrap();
    assert_eq!(settings.get::<u8>("SettingTwo").unwrap(), 7);
    assert_eq!(resolver(&store, Some(base())).get::<String>("SettingTwo").unwrap(), "Base");

    let names: Vec<String> = settings.fields().unwrap().map(|f| f.name().to_string()).collect();
    assert_eq!(names.last().map(String::as_str), Some("Base.Derived.SettingTwo"));
}

#[test]
fn test_unbound_set_writes_bare_name() {
    let store = hierarchy_store();
    let derived_settings = resolver(&store, Some(derived()));

    resolver(&store, None).set("SettingOne", 12).unwrap();
    assert_eq!(derived_settings.get::<i32>("SettingOne").unwrap(), 12);
    resolver(&store, None).set("SettingOne", "Root".to_string()).unwrap();
    assert_eq!(derived_settings.get::<String>("SettingOne").unwrap(), "Root");
}

#[test]
fn test_ancestors_outside_unit_are_ignored() {
    let mut section = Section::new();
    section.add(field("Object.Base.Derived.Level", "full")).unwrap();
    section.add(field("Object.Level", "foreign")).unwrap();
    let store = Arc::new(MemoryStore::from_sections([(SECTION, section)]));

    let settings = resolver(&store, Some(derived()));
    assert_eq!(
        settings.candidate_names("Level"),
        ["Base.Derived.Level", "Base.Level", "Level"]
    );
    assert_eq!(settings.try_get::<String>("Level").unwrap(), None);
}

#[test]
fn test_chain_entirely_in_one_unit() {
    let mut section = Section::new();
    section.add(field("Object.ValueType.Int32.SettingOne", "foo")).unwrap();
    let store = Arc::new(MemoryStore::from_sections([("blah", section)]));

    let int32 = TypeDescriptor::chain("core", ["Object", "ValueType", "Int32"]);
    let settings = SettingResolver::new(store, "blah", int32);
    assert_eq!(settings.get::<String>("SettingOne").unwrap(), "foo");
}

#[test]
fn test_missing_section_is_surfaced() {
    let store = Arc::new(MemoryStore::new());
    let settings = SettingResolver::new(Arc::clone(&store), "rootSection", Some(derived()));

    let expected = "No settings section found for section name 'rootSection'.";
    assert_eq!(settings.fields().unwrap_err().to_string(), expected);
    assert_eq!(settings.get::<i32>("Missing").unwrap_err().to_string(), expected);
    assert!(matches!(
        settings.try_get::<i32>("Missing"),
        Err(SettingsError::SectionNotFound { .. })
    ));
    assert!(matches!(
        settings.set("Missing", 1),
        Err(SettingsError::SectionNotFound { .. })
    ));
}

#[test]
fn test_fields_empty_and_restartable() {
    let store = Arc::new(MemoryStore::new());
    store.create_section("empty");
    let empty = SettingResolver::new(Arc::clone(&store), "empty", None);
    assert_eq!(empty.fields().unwrap().count(), 0);

    let store = hierarchy_store();
    let settings = resolver(&store, None);
    let fields = settings.fields().unwrap();
    assert_eq!(fields.len(), 10);

    let first_pass: Vec<Field> = fields.clone().collect();
    let second_pass: Vec<Field> = fields.collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass[0], field("SettingOne", "Root"));
}

#[test]
fn test_works_through_trait_object() {
    let store: Arc<dyn SettingStore> = hierarchy_store();
    let settings = SettingResolver::new(store, SECTION, Some(derived()));
    assert_eq!(settings.get::<String>("SettingThree").unwrap(), "Derived");
}

#[test]
fn test_qualified_name_matches_written_field() {
    let store = hierarchy_store();
    let settings = resolver(&store, Some(derived()));
    assert_eq!(settings.qualified_name("Level"), "Base.Derived.Level");
    assert_eq!(resolver(&store, None).qualified_name("Level"), "Level");

    settings.set("Level", 2_u8).unwrap();
    let written = settings.find("Level").unwrap().unwrap();
    assert_eq!(written.name(), settings.qualified_name("Level"));
}
