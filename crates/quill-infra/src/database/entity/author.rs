//! Author entity for SeaORM.

use chrono::Utc;
use quill_core::ValidationError;
use quill_core::domain::{Author, AuthorChanges, NewAuthor};
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Stored rows go back through the field validators on the way out.
impl TryFrom<Model> for Author {
    type Error = ValidationError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Author::from_storage(
            model.id,
            model.name,
            model.phone_number,
            model.created_at.into(),
            model.updated_at.map(Into::into),
        )
    }
}

/// Insert form: the database generates `id`, storage stamps `created_at`.
impl From<NewAuthor> for ActiveModel {
    fn from(author: NewAuthor) -> Self {
        Self {
            id: NotSet,
            name: Set(author.name().to_owned()),
            phone_number: Set(author.phone_number().map(str::to_owned)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(None),
        }
    }
}

/// Update form: only supplied columns are written, `updated_at` always is.
impl From<AuthorChanges> for ActiveModel {
    fn from(changes: AuthorChanges) -> Self {
        Self {
            id: NotSet,
            name: changes.name.map_or(NotSet, Set),
            phone_number: changes.phone_number.map_or(NotSet, Set),
            created_at: NotSet,
            updated_at: Set(Some(Utc::now().into())),
        }
    }
}
