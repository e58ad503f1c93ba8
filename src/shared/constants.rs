/// Icon stored for a category when the request does not name one
pub const DEFAULT_CATEGORY_ICON: &str = "default";

/// Sibling position used when the request does not name one
pub const DEFAULT_SORTING: i64 = 0;

/// Prefix accepted in front of a token in the `Authorization` header
pub const BEARER_PREFIX: &str = "Bearer ";
