use apigen_types::{PrimitiveType, TypeDescriptor};

#[test]
fn test_serialize_as_canonical_name() {
    let ty = TypeDescriptor::array_of(PrimitiveType::Int.into(), 2);
    let json = serde_json::to_string(&ty).unwrap();
    assert_eq!(json, r#""int[][]""#);

    let named = TypeDescriptor::named("java.lang.String");
    assert_eq!(serde_json::to_string(&named).unwrap(), r#""java.lang.String""#);
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(TypeDescriptor::named("a.B"), TypeDescriptor::named("a.B"));
    assert_ne!(TypeDescriptor::named("a.B"), TypeDescriptor::named("B"));
    assert_ne!(
        TypeDescriptor::array_of(PrimitiveType::Int.into(), 1),
        TypeDescriptor::array_of(PrimitiveType::Long.into(), 1)
    );
    assert_ne!(
        TypeDescriptor::array_of(PrimitiveType::Int.into(), 1),
        TypeDescriptor::array_of(PrimitiveType::Int.into(), 2)
    );
}

#[test]
fn test_array_of_named_dimensions() {
    let base = TypeDescriptor::named("java.util.Map");
    let arr = TypeDescriptor::array_of(base.clone(), 3);
    let array = arr.as_array().unwrap();
    assert_eq!(array.dimensions, 3);
    assert_eq!(*array.component, base);
}
