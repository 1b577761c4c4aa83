/// Catalog identifiers are opaque strings (random UUIDs rendered as text).
pub type EntityId = String;
