//! Post entity for SeaORM.

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
    pub timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            timestamp: model.timestamp.into(),
        }
    }
}

/// Conversion from Domain NewPost to SeaORM ActiveModel.
///
/// The id stays `NotSet` so the store assigns it on insert.
impl From<quill_core::domain::NewPost> for ActiveModel {
    fn from(new_post: quill_core::domain::NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(new_post.title),
            content: Set(new_post.content),
            timestamp: Set(new_post.timestamp.into()),
        }
    }
}
