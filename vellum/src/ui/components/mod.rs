pub(crate) mod drag_overlay;
pub(crate) mod resize_handle;
