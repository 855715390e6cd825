pub mod http_profile;
pub mod schema;

pub use http_profile::{HttpProfileResource, RESOURCE_KIND};
pub use schema::{http_profile_schema, FieldKind, FieldSpec};
