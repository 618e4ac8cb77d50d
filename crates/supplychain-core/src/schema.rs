use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::part::Part;
use crate::supplier::Supplier;

/// JSON schema describing a serialized [`Supplier`].
pub fn supplier_json_schema() -> RootSchema {
    schema_for!(Supplier)
}

/// JSON schema describing a serialized [`Part`].
pub fn part_json_schema() -> RootSchema {
    schema_for!(Part)
}
