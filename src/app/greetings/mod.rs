pub mod handler;

pub use handler::{hello, GreetingView};
