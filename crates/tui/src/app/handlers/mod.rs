pub(crate) mod keys;
pub(crate) mod mouse;

pub(crate) use keys::handle_key;
pub(crate) use mouse::handle_mouse;
