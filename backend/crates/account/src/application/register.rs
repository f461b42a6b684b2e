//! Register Use Case
//!
//! Creates a user and their opening credit balance.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::{credit::Credit, user::User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    birthdate::Birthdate, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// Registration form
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub full_name: String,
    pub school_name: String,
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

impl RegisterInput {
    /// Names of required fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("school_name", &self.school_name),
            ("class", &self.class_level),
            ("password", &self.password),
            ("phone_no", &self.phone_no),
            ("email", &self.email),
            ("birthdate", &self.birthdate),
            ("country", &self.country),
            ("state", &self.state),
            ("city", &self.city),
            ("address", &self.address),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Fields longer than their column allows, as `name (max N)`
    pub fn oversize_fields(&self) -> Vec<String> {
        [
            ("full_name", &self.full_name, 120),
            ("school_name", &self.school_name, 120),
            ("class", &self.class_level, 20),
            ("password", &self.password, 120),
            ("phone_no", &self.phone_no, 20),
            ("email", &self.email, 120),
            ("birthdate", &self.birthdate, 20),
            ("country", &self.country, 50),
            ("state", &self.state, 50),
            ("city", &self.city, 50),
        ]
        .into_iter()
        .filter(|(_, value, max)| value.chars().count() > *max)
        .map(|(name, _, max)| format!("{name} (max {max})"))
        .collect()
    }
}

/// Register output
pub struct RegisterOutput {
    pub user_name: String,
    pub credits: i32,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        let missing = input.missing_fields();
        if !missing.is_empty() {
            return Err(AccountError::InvalidForm(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let oversize = input.oversize_fields();
        if !oversize.is_empty() {
            return Err(AccountError::InvalidForm(format!(
                "Fields too long: {}",
                oversize.join(", ")
            )));
        }

        let birthdate = Birthdate::new(input.birthdate)?;
        let user_name = UserName::derive(&input.full_name, &birthdate)?;

        // Fast path; the store re-checks inside its transaction
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AccountError::DuplicateUsername);
        }

        let user = User {
            user_name: user_name.clone(),
            full_name: input.full_name,
            school_name: input.school_name,
            class_level: input.class_level,
            password: UserPassword::new(input.password),
            phone_no: input.phone_no,
            email: input.email,
            birthdate,
            country: input.country,
            state: input.state,
            city: input.city,
            address: input.address,
        };
        let credit = Credit::opening(user_name.clone(), self.config.starting_credits);

        self.user_repo.register(&user, &credit).await?;

        tracing::info!(
            user_name = %user_name,
            starting_credits = credit.points,
            "User registered"
        );

        Ok(RegisterOutput {
            user_name: user_name.into_inner(),
            credits: credit.points,
        })
    }
}
