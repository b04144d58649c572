//! Role database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Role, RoleName};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Role {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let name: RoleName = model.name.parse()?;
        Ok(Role::new(model.id, name))
    }
}
