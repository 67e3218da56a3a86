//! Integration tests for the full signature pipeline

use apigen_parser::{
    ApiMethodParser, ClassManifest, MethodModel, ParseError, PrimitiveType, RegistryManifest,
    TypeDescriptor, TypeRegistry,
};

const TARGET: &str = "com.example.Api";

fn registry() -> TypeRegistry {
    let manifest = RegistryManifest {
        types: vec!["java.util.List".to_string()],
        classes: vec![ClassManifest {
            name: TARGET.to_string(),
            methods: [
                "int[] foo(int[] bar)",
                "int[][] x()",
                "String get()",
                "String get(int index)",
                "String get(String key)",
                "String get(String key, int index)",
                "void a(int x)",
                "void b(String x)",
                "String greet(String name)",
                "java.util.List list(int index, int count)",
                "java.lang.String qualified(java.lang.Object value)",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }],
        ..Default::default()
    };
    TypeRegistry::from_manifest(&manifest).unwrap()
}

fn parse(signatures: &[&str]) -> Result<Vec<MethodModel>, ParseError> {
    ApiMethodParser::with_context(TARGET, registry())
        .signatures(signatures.iter().copied())
        .parse()
}

fn unique_names(models: &[MethodModel]) -> Vec<String> {
    models
        .iter()
        .map(|m| m.unique_name().unwrap().to_string())
        .collect()
}

const BATCH: [&str; 7] = [
    "public String greet(String name);",
    "String get(String key, int index)",
    "String get()",
    "java.util.List<String> list(int index, int count)",
    "String get(int index)",
    "int[] foo(int[] bar)",
    "String get(String key)",
];

#[test]
fn test_round_trip_determinism() {
    let first = parse(&BATCH).unwrap();
    let second = parse(&BATCH).unwrap();
    assert_eq!(unique_names(&first), unique_names(&second));
    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_matter() {
    let forward = parse(&BATCH).unwrap();

    let mut reversed = BATCH;
    reversed.reverse();
    let backward = parse(&reversed).unwrap();

    let mut rotated = BATCH;
    rotated.rotate_left(3);
    let rotated = parse(&rotated).unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward, rotated);
}

#[test]
fn test_canonical_order_and_names() {
    let models = parse(&BATCH).unwrap();
    let rendered: Vec<String> = models.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "int[] foo(int[] bar);",
            "java.lang.String get();",
            "java.lang.String get(int index);",
            "java.lang.String get(java.lang.String key);",
            "java.lang.String get(java.lang.String key, int index);",
            "java.lang.String greet(java.lang.String name);",
            "java.util.List list(int index, int count);",
        ]
    );
    assert_eq!(
        unique_names(&models),
        vec!["FOO", "GET", "GET_1", "GET_2", "GET_3", "GREET", "LIST"]
    );
}

#[test]
fn test_unique_names_are_distinct() {
    let models = parse(&BATCH).unwrap();
    let mut names = unique_names(&models);
    names.sort();
    names.dedup();
    assert_eq!(names.len(), models.len());
}

#[test]
fn test_duplicate_suffixing() {
    let models = parse(&["String get(String key)", "String get(int index)", "String get()"]).unwrap();
    assert_eq!(unique_names(&models), vec!["GET", "GET_1", "GET_2"]);
    assert!(models[0].arguments().is_empty());
    assert_eq!(models[1].arguments()[0].name(), "index");
    assert_eq!(models[2].arguments()[0].name(), "key");
}

#[test]
fn test_argument_consistency_enforced() {
    let err = parse(&["void a(int x)", "void b(String x)"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::ArgumentConsistency {
            name: "x".to_string(),
            first: PrimitiveType::Int.into(),
            second: TypeDescriptor::named("java.lang.String"),
        }
    );
}

#[test]
fn test_array_and_primitive_resolution() {
    let models = parse(&["int[] foo(int[] bar)", "int[][] x()"]).unwrap();
    let int_array = TypeDescriptor::array_of(PrimitiveType::Int.into(), 1);

    let foo = &models[0];
    assert_eq!(foo.result_type(), &int_array);
    assert_eq!(foo.arguments()[0].ty(), &int_array);

    let x = &models[1];
    assert_eq!(x.result_type().dimensions(), 2);
    assert_eq!(
        x.result_type(),
        &TypeDescriptor::array_of(PrimitiveType::Int.into(), 2)
    );
}

#[test]
fn test_default_namespace_fallback() {
    let short = parse(&["String greet(String name)"]).unwrap();
    let qualified = parse(&["java.lang.String greet(java.lang.String name)"]).unwrap();
    assert_eq!(short, qualified);
    assert_eq!(
        short[0].result_type(),
        &TypeDescriptor::named("java.lang.String")
    );
}

#[test]
fn test_binding_failure_names_signature_and_target() {
    let err = parse(&["String greet(String name)", "void missing(int count)"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MemberBinding {
            signature: "void missing(int count)".to_string(),
            target: TARGET.to_string(),
        }
    );
    let message = err.to_string();
    assert!(message.contains("void missing(int count)"));
    assert!(message.contains(TARGET));
}

#[test]
fn test_malformed_signature_aborts_batch() {
    let err = parse(&["String greet(String name)", "not a signature"]).unwrap_err();
    assert!(matches!(err, ParseError::MalformedSignature { .. }));
}

#[test]
fn test_unresolved_type_aborts_batch() {
    let err = parse(&["String greet(Strng name)"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::TypeResolution {
            name: "Strng".to_string()
        }
    );
}

#[test]
fn test_void_only_as_result_type() {
    assert!(matches!(
        parse(&["void a(void x)"]),
        Err(ParseError::MalformedSignature { .. })
    ));
    assert_eq!(
        parse(&["void[] a(int x)"]).unwrap_err(),
        ParseError::TypeResolution {
            name: "void[]".to_string()
        }
    );
    assert!(parse(&["void a(int x)"]).is_ok());
}

#[test]
fn test_empty_batch() {
    assert!(parse(&[]).unwrap().is_empty());
}

#[test]
fn test_duplicate_signatures_are_permitted() {
    // Two signatures equal under the sort key are kept; only a warning is logged
    let models = parse(&["String greet(String name)", "String greet(String name)"]).unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(unique_names(&models), vec!["GREET", "GREET_1"]);
    assert_eq!(models[0].member(), models[1].member());
}

#[test]
fn test_bound_member_matches_registry() {
    let models = parse(&["java.util.List list(int index, int count)"]).unwrap();
    let member = models[0].member();
    assert_eq!(member.owner, TARGET);
    assert_eq!(member.name, "list");
    assert_eq!(member.index, 9);
    let expected: Vec<TypeDescriptor> = vec![PrimitiveType::Int.into(), PrimitiveType::Int.into()];
    assert_eq!(member.params, expected);
}

#[test]
fn test_default_parser_uses_core_types() {
    let parser = ApiMethodParser::new("java.lang.String").signatures(["int length()"]);
    assert_eq!(parser.target(), "java.lang.String");
    assert_eq!(parser.signature_list(), ["int length()".to_string()]);
    // Core registry knows the type but declares no members
    assert!(matches!(
        parser.parse(),
        Err(ParseError::MemberBinding { .. })
    ));
}

#[test]
fn test_context_can_be_replaced() {
    let parser = ApiMethodParser::new(TARGET)
        .signatures(["String greet(String name)"])
        .context(registry());
    assert_eq!(parser.parse().unwrap().len(), 1);

    let shared = std::sync::Arc::new(registry());
    let parser = ApiMethodParser::with_context(TARGET, shared.clone())
        .signatures(["String greet(String name)"]);
    assert_eq!(parser.parse().unwrap().len(), 1);
}

#[test]
fn test_parallel_invocations() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let models = parse(&BATCH).unwrap();
                unique_names(&models)
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for names in &results[1..] {
        assert_eq!(names, &results[0]);
    }
}

#[test]
fn test_json_output() {
    let models = parse(&["int[] foo(int[] bar)"]).unwrap();
    let json = serde_json::to_value(&models).unwrap();
    assert_eq!(json[0]["uniqueName"], "FOO");
    assert_eq!(json[0]["resultType"], "int[]");
    assert_eq!(json[0]["arguments"][0]["name"], "bar");
    assert_eq!(json[0]["arguments"][0]["type"], "int[]");
    assert_eq!(json[0]["member"]["owner"], TARGET);
}
