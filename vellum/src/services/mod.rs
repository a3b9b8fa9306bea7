pub(crate) mod config;
pub(crate) mod host;
pub(crate) mod registry;

pub(crate) use registry::ServiceRegistry;
