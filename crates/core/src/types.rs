/// Server-assigned identifiers are opaque strings (Mongo-style hex
/// object ids). An empty id means "not yet persisted".
pub type EntityId = String;
