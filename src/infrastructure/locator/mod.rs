//! Asset locators

mod static_dirs;

pub use static_dirs::StaticDirsLocator;
