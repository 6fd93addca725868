use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::points_of_interest::Entity")]
    PointsOfInterest,
}

impl Related<super::points_of_interest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointsOfInterest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
