pub mod navbar;

pub use navbar::{NavbarStyle, navbar_style};
