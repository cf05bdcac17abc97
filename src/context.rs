//! Per-call context and correlation-field extraction.
//!
//! Every logging call takes a [`Context`]. The adapter hands it to a
//! [`ContextExtractor`] during field conversion, which may append
//! correlation fields (request identifiers and the like) after the caller's
//! own fields.

use crate::fields::Field;

/// Field key used by [`RequestIdExtractor`].
pub const REQUEST_ID_KEY: &str = "request_id";

/// Request-scoped values a logging call can be correlated with.
///
/// Cheap to clone. Use [`Context::background`] when there is nothing to
/// correlate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    request_id: Option<String>,
    values: Vec<Field>,
}

impl Context {
    /// The empty context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Return a copy of this context carrying `request_id`.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Return a copy of this context carrying an extra correlation field.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<Field>) -> Self {
        self.values.push(field.into());
        self
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Correlation fields, in insertion order.
    pub fn values(&self) -> &[Field] {
        &self.values
    }
}

/// Derives correlation fields from a [`Context`].
///
/// Implementations append to `out`; they must not reorder or remove what is
/// already there.
pub trait ContextExtractor: Send + Sync {
    fn extract(&self, ctx: &Context, out: &mut Vec<Field>);
}

/// Default extractor: appends `request_id` when set, then the context's
/// correlation values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdExtractor;

impl ContextExtractor for RequestIdExtractor {
    fn extract(&self, ctx: &Context, out: &mut Vec<Field>) {
        if let Some(id) = ctx.request_id() {
            out.push(Field::new(REQUEST_ID_KEY, id));
        }
        out.extend(ctx.values().iter().cloned());
    }
}

/// Extractor that ignores the context entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContext;

impl ContextExtractor for NoContext {
    fn extract(&self, _ctx: &Context, _out: &mut Vec<Field>) {}
}

impl<F> ContextExtractor for F
where
    F: Fn(&Context, &mut Vec<Field>) + Send + Sync,
{
    fn extract(&self, ctx: &Context, out: &mut Vec<Field>) {
        self(ctx, out);
    }
}
