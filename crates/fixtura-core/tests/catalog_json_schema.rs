use fixtura_core::CatalogFile;
use schemars::schema_for;

#[test]
fn json_schema_describes_every_metadata_record() {
    let generated = schema_for!(CatalogFile);
    for name in [
        "ClassMeta",
        "ClassKind",
        "FieldMeta",
        "MethodMeta",
        "ParamMeta",
        "TypeRef",
        "AnnotationMeta",
        "Modifiers",
    ] {
        assert!(
            generated.definitions.contains_key(name),
            "missing definition for {name}"
        );
    }

    let json = serde_json::to_value(&generated).expect("serialize generated schema");
    let required = json["required"].as_array().expect("required list");
    assert!(required.iter().any(|item| item == "classes"));
}
