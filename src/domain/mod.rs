use std::fmt::Display;
use std::hash::Hash;

pub mod auth;
pub mod password;
pub mod restaurant;
pub mod types;
pub mod user;

/// Behaviour required from records managed by a list controller.
///
/// `matches` implements the resource's search predicate: a case-insensitive
/// substring match over its searchable text fields. The empty query matches
/// every record.
pub trait ListRecord: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    fn matches(&self, query: &str) -> bool;
}
