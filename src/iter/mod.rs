mod in_order;
mod owned_iter;
mod post_order;
mod pre_order;

pub use in_order::Iter;
pub use owned_iter::*;
pub(crate) use post_order::*;
pub(crate) use pre_order::*;
