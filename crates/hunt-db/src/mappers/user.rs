//! User entity <-> model mapper

use hunt_core::entities::User;
use hunt_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            is_admin: model.is_admin,
            created_at: model.created_at,
        }
    }
}
