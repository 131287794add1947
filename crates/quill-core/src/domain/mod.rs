//! Domain entities - the core business objects.

use serde::{Deserialize, Deserializer};

mod author;
mod post;
pub mod validation;

pub use author::{Author, AuthorChanges, NewAuthor};
pub use post::{Category, NewPost, Post, PostChanges};

/// Keep an explicit `null` distinct from a missing key in patch payloads.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
