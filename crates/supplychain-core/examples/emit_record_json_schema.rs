use supplychain_core::{part_json_schema, supplier_json_schema};

fn main() {
    let schemas = serde_json::json!({
        "supplier": supplier_json_schema(),
        "part": part_json_schema(),
    });
    let json = serde_json::to_string_pretty(&schemas).expect("serialize json schema");
    println!("{json}");
}
