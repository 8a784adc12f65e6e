pub mod model;
pub mod service;

pub use model::{MenuItem, NewMenuItem};
pub use service::MenuService;
