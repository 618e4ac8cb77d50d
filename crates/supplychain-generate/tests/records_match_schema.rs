use jsonschema::JSONSchema;
use serde_json::Value;

use supplychain_core::{part_json_schema, supplier_json_schema};
use supplychain_generate::{GenerateOptions, RecordGenerator};

fn compile(schema: Value) -> JSONSchema {
    JSONSchema::compile(&schema).expect("compile schema")
}

fn assert_valid(compiled: &JSONSchema, instance: &Value) {
    if let Err(errors) = compiled.validate(instance) {
        let messages: Vec<String> = errors.map(|err| err.to_string()).collect();
        panic!("record does not match its schema: {messages:?}");
    }
}

#[test]
fn generated_suppliers_match_supplier_schema() {
    let compiled = compile(serde_json::to_value(supplier_json_schema()).expect("schema json"));
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(21));

    for supplier in generator.generate_suppliers(50, "tenant_acme") {
        assert_valid(&compiled, &serde_json::to_value(&supplier).expect("supplier json"));
    }
}

#[test]
fn generated_parts_match_part_schema() {
    let compiled = compile(serde_json::to_value(part_json_schema()).expect("schema json"));
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(22));
    let pool = vec!["01HZX3V5AE0000000000000000".to_string()];

    for part in generator.generate_parts(50, "tenant_acme", &pool) {
        assert_valid(&compiled, &serde_json::to_value(&part).expect("part json"));
    }
    for part in generator.generate_parts(5, "tenant_acme", &[]) {
        assert_valid(&compiled, &serde_json::to_value(&part).expect("part json"));
    }
}

#[test]
fn unknown_enum_label_is_rejected() {
    let compiled = compile(serde_json::to_value(part_json_schema()).expect("schema json"));
    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(23));
    let part = generator.build_part("tenant_acme", &[]);

    let mut value = serde_json::to_value(&part).expect("part json");
    value["category"] = Value::String("PLASTIC".to_string());
    assert!(!compiled.is_valid(&value));
}
