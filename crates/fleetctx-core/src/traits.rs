use crate::error::Error;
use crate::types::{Driver, Load, OrgContext, Trailer, Truck};

/// Anything tagged with an organizational context.
pub trait Scoped {
    fn org_context(&self) -> Option<&OrgContext>;
}

impl Scoped for Driver {
    fn org_context(&self) -> Option<&OrgContext> { self.organizational_context.as_ref() }
}

impl Scoped for Truck {
    fn org_context(&self) -> Option<&OrgContext> { self.organizational_context.as_ref() }
}

impl Scoped for Trailer {
    fn org_context(&self) -> Option<&OrgContext> { self.organizational_context.as_ref() }
}

impl Scoped for Load {
    fn org_context(&self) -> Option<&OrgContext> { self.organizational_context.as_ref() }
}

impl<T: Scoped + ?Sized> Scoped for &T {
    fn org_context(&self) -> Option<&OrgContext> { (**self).org_context() }
}

/// Receives failures the search index absorbs instead of returning.
pub trait SearchObserver: Send + Sync {
    fn search_failed(&self, query: &str, error: &Error);
}
