mod event;
mod feature;
mod model;

pub(crate) use event::RouterEvent;
pub(crate) use feature::RouterFeature;
