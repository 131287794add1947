//! Post entity for SeaORM.

use chrono::Utc;
use quill_core::ValidationError;
use quill_core::domain::{NewPost, Post, PostChanges};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Post {
    type Error = ValidationError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Post::from_storage(
            model.id,
            model.title,
            model.content,
            &model.category,
            model.summary,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title().to_owned()),
            content: Set(post.content().to_owned()),
            category: Set(post.category().as_str().to_owned()),
            summary: Set(post.summary().map(str::to_owned)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

/// Assumes `changes` already passed `PostChanges::validate`.
impl From<PostChanges> for ActiveModel {
    fn from(changes: PostChanges) -> Self {
        Self {
            id: NotSet,
            title: changes.title.map_or(NotSet, Set),
            content: changes.content.map_or(NotSet, Set),
            category: changes.category.map_or(NotSet, Set),
            summary: changes.summary.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now().into())),
        }
    }
}
