//! Request-scoped helpers used by controllers: session access and permission checks.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
