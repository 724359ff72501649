
mod view;

pub(crate) use self::view::new_view;
pub use self::view::View;
