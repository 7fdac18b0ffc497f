use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::null_as_default;

/// Username registration request
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ChooseUsernameDto {
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub firebase_uid: String,
}

/// Response after a username is registered
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedDto {
    pub user_id: i32,
    pub message: String,
}

#[derive(Clone, Default, Deserialize, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UsernameQuery {
    /// Firebase UID of the account to look up
    pub firebase_uid: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UsernameDto {
    pub username: String,
}

/// Request to add a venue to the user's favorites
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveFavoriteDto {
    #[serde(deserialize_with = "null_as_default")]
    pub firebase_uid: String,
    /// Places ID of the coffee shop
    #[serde(deserialize_with = "null_as_default")]
    pub coffee_shop_id: String,
}

/// Review submission
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewDto {
    #[serde(deserialize_with = "null_as_default")]
    pub firebase_uid: String,
    /// Stored as given, the client presents a 1 to 5 scale
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub comment: String,
    /// Places ID of the reviewed coffee shop
    #[serde(deserialize_with = "null_as_default")]
    pub place_id: String,
}
