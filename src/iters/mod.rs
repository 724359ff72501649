
mod iter;
mod into_iter;

pub use self::{
    iter::*,
    into_iter::*,
};
