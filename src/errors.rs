/// The catch-all result of loaders and other fallible helpers, which could fail in
/// many different ways.
pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
