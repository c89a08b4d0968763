/// Numeric identifiers carried by records and audit entries.
pub type DbId = i64;
