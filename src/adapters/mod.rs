pub mod http;

pub use http::{FeiertageApi, SchulferienApi};
