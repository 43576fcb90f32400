use fixtura_core::{
    AnnotationMeta, ClassCatalog, ClassKind, ClassMeta, FieldMeta, MethodMeta, Modifiers,
    OBJECT_CLASS, TypeRef,
};

#[test]
fn serializes_catalog_deterministically() {
    let catalog = ClassCatalog::new().with(
        ClassMeta::new("com.acme.Pojo")
            .extends(OBJECT_CLASS)
            .field(
                FieldMeta::new("id", TypeRef::new("long"))
                    .annotated(AnnotationMeta::new("com.acme.Id")),
            )
            .method(MethodMeta::getter("getId", TypeRef::new("long"))),
    );

    let json = catalog.to_json().expect("serialize catalog");
    let expected = r#"{
  "catalog_version": "0.1",
  "root_type": "java.lang.Object",
  "classes": [
    {
      "name": "com.acme.Pojo",
      "kind": "class",
      "superclass": "java.lang.Object",
      "fields": [
        {
          "name": "id",
          "ty": {
            "name": "long"
          },
          "annotations": [
            {
              "type_name": "com.acme.Id"
            }
          ]
        }
      ],
      "methods": [
        {
          "name": "getId",
          "params": [],
          "returns": {
            "name": "long"
          }
        }
      ]
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn parses_minimal_catalog_with_defaults() {
    let json = r#"{
        "classes": [
            {
                "name": "com.acme.Named",
                "kind": "interface",
                "methods": [{ "name": "getName", "returns": { "name": "java.lang.String" } }]
            },
            {
                "name": "com.acme.Pojo",
                "interfaces": ["com.acme.Named"],
                "fields": [
                    { "name": "name", "ty": { "name": "java.lang.String" } },
                    { "name": "COUNT", "ty": { "name": "int" }, "modifiers": { "is_static": true } }
                ]
            }
        ]
    }"#;

    let catalog = ClassCatalog::from_json(json).expect("parse catalog");
    assert_eq!(catalog.root_type(), OBJECT_CLASS);
    assert_eq!(catalog.len(), 2);

    let pojo = catalog.get("com.acme.Pojo").expect("pojo present");
    assert_eq!(pojo.kind, ClassKind::Class);
    assert!(pojo.superclass.is_none());
    assert!(!pojo.opaque);
    assert!(pojo.fields[0].is_instance_field());
    assert!(!pojo.fields[1].is_instance_field());

    let named = catalog.get("com.acme.Named").expect("interface present");
    assert!(named.is_interface());
    assert!(named.methods[0].params.is_empty());
    assert!(!named.methods[0].returns_void());
    assert!(catalog.is_assignable_from("com.acme.Named", "com.acme.Pojo"));
}

#[test]
fn modifiers_keep_only_discovery_flags() {
    let json = r#"{
        "classes": [
            {
                "name": "com.acme.Shape",
                "methods": [
                    {
                        "name": "getArea",
                        "returns": { "name": "java.lang.Object" },
                        "modifiers": { "is_bridge": true, "is_abstract": true }
                    }
                ]
            }
        ]
    }"#;

    let catalog = ClassCatalog::from_json(json).expect("parse catalog");
    let shape = catalog.get("com.acme.Shape").expect("shape present");
    let getter = shape.declared_methods("getArea").next().expect("getter present");
    assert_eq!(
        getter.modifiers,
        Modifiers {
            is_bridge: true,
            ..Modifiers::default()
        }
    );
    assert!(shape.declared_field("area").is_none());
}
