use std::fmt::Debug;

/// Title and description lookups keyed by handler name. Implementations
/// usually sit on top of route reflection or hand-written registries;
/// both lookups return an empty string on a miss.
pub trait MetadataResolver: Debug {
    fn title(&self, handler_name: &str) -> String;
    fn description(&self, handler_name: &str) -> String;
}

/// Resolver that never finds anything, for callers without handler
/// metadata. Titles then fall back to the capitalized HTTP method.
#[derive(Debug, Default)]
pub struct NoopResolver;

impl MetadataResolver for NoopResolver {
    fn title(&self, _handler_name: &str) -> String {
        String::new()
    }

    fn description(&self, _handler_name: &str) -> String {
        String::new()
    }
}
