use crate::ServerError;

/// Per-field execution context provided by the host engine.
///
/// The engine guarantees this is present at field-resolution time; the
/// resolver interceptor reads the identifying names from it before delegating
/// to the resolver itself.
pub trait ResolverContext {
    /// Name of the object type that owns the field being resolved.
    fn object(&self) -> &str;

    /// Name of the field being resolved.
    fn field_name(&self) -> &str;
}

/// Per-request execution context provided by the host engine.
pub trait RequestContext {
    /// Errors accumulated over the whole request so far.
    ///
    /// Returned by value so implementations that guard their error list with
    /// a lock can hand out a snapshot.
    fn errors(&self) -> Vec<ServerError>;
}
