//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{reward::Reward, user::User};

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing fields deserialize as empty strings so that the use case can
/// report every missing field at once.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub full_name: String,
    pub school_name: String,
    #[serde(alias = "class")]
    pub class_level: String,
    pub password: String,
    pub phone_no: String,
    pub email: String,
    pub birthdate: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub username: String,
    pub credits: i32,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// What the login entry point tells an unauthenticated client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormResponse {
    pub auth_required: bool,
    pub method: &'static str,
    pub fields: [&'static str; 2],
}

impl Default for LoginFormResponse {
    fn default() -> Self {
        Self {
            auth_required: true,
            method: "POST",
            fields: ["username", "password"],
        }
    }
}

/// Sign in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub username: String,
    pub full_name: String,
    pub expires_at: i64,
}

// ============================================================================
// Portal views
// ============================================================================

/// Home page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub username: String,
    pub full_name: String,
    pub school_name: String,
    #[serde(rename = "class")]
    pub class_level: String,
    pub email: String,
    pub credits: i32,
}

impl HomeResponse {
    pub fn new(user: &User, credits: i32) -> Self {
        Self {
            username: user.user_name.to_string(),
            full_name: user.full_name.clone(),
            school_name: user.school_name.clone(),
            class_level: user.class_level.clone(),
            email: user.email.clone(),
            credits,
        }
    }
}

/// Profile (portal) page data; everything except the password
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub username: String,
    pub full_name: String,
    pub school_name: String,
    #[serde(rename = "class")]
    pub class_level: String,
    pub email: String,
    pub phone_no: String,
    pub birthdate: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
    pub credits: i32,
}

impl ProfileResponse {
    pub fn new(user: &User, credits: i32) -> Self {
        Self {
            username: user.user_name.to_string(),
            full_name: user.full_name.clone(),
            school_name: user.school_name.clone(),
            class_level: user.class_level.clone(),
            email: user.email.clone(),
            phone_no: user.phone_no.clone(),
            birthdate: user.birthdate.to_string(),
            country: user.country.clone(),
            state: user.state.clone(),
            city: user.city.clone(),
            address: user.address.clone(),
            credits,
        }
    }
}

/// Balance only
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditsResponse {
    pub username: String,
    pub credits: i32,
}

/// One earned reward
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDto {
    #[serde(rename = "type")]
    pub reward_type: String,
    pub description: String,
    pub date: String,
}

impl From<Reward> for RewardDto {
    fn from(reward: Reward) -> Self {
        Self {
            reward_type: reward.reward_type,
            description: reward.description,
            date: reward.date_earned,
        }
    }
}

/// Vouchers page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VouchersResponse {
    #[serde(flatten)]
    pub home: HomeResponse,
    pub rewards: Vec<RewardDto>,
}
