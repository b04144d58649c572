//! Store database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Store;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub number_store: i32,
    pub amount_sensor: i32,
    pub fill_percent: i32,
    pub color: String,
    pub ubication: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(model: Model) -> Self {
        Store {
            id: model.id,
            name: model.name,
            number_store: model.number_store,
            amount_sensor: model.amount_sensor,
            fill_percent: model.fill_percent,
            color: model.color,
            ubication: model.ubication,
            created_at: model.created_at,
        }
    }
}
