use crate::dto::tag::TagDto;

/// Free-form label attachable to both dogs and news items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating or renaming a tag.
#[derive(Debug, Clone)]
pub struct UpsertTagParams {
    pub name: String,
}
