use std::path::PathBuf;

use supplychain_generate::{GenerateOptions, RecordGenerator, write_records_csv};

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out"));
    std::fs::create_dir_all(&out_dir).expect("create output directory");

    let mut generator = RecordGenerator::new(&GenerateOptions::seeded(42));
    let suppliers = generator.generate_suppliers(100, "tenant_acme");
    let ids: Vec<String> = suppliers.iter().map(|s| s.supplier_id.clone()).collect();
    let parts = generator.generate_parts(500, "tenant_acme", &ids);

    let suppliers_csv = write_records_csv(&out_dir.join("suppliers.csv"), &suppliers)
        .expect("write suppliers.csv");
    let parts_csv = write_records_csv(&out_dir.join("parts.csv"), &parts).expect("write parts.csv");
    println!(
        "wrote {} suppliers to {} and {} parts to {}",
        suppliers_csv.rows,
        suppliers_csv.path.display(),
        parts_csv.rows,
        parts_csv.path.display()
    );
}
