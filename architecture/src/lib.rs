/// Declares the listed modules public and re-exports their items.
/// ```ignore
/// // code
/// make_re_export!(xxx);
/// // gen
/// pub mod xxx;
/// pub use xxx::*;
/// ```
#[macro_export]
macro_rules! make_re_export {
    ($($(#[$meta:meta])* $mod_name:ident),*) => {
        $($(#[$meta])* pub mod $mod_name;)*
        $($(#[$meta])* pub use self::$mod_name::*;)*
    };
}

pub mod background_service;
pub mod model;
pub mod repository;
pub mod response;
