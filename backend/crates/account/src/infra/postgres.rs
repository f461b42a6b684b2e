//! PostgreSQL Repository Implementations

use kernel::error::conversions::is_unique_violation;
use sqlx::PgPool;

use crate::domain::entity::{credit::Credit, reward::Reward, user::User};
use crate::domain::repository::{CreditRepository, RewardRepository, UserRepository};
use crate::domain::value_object::{
    birthdate::Birthdate, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAccountRepository {
    async fn register(&self, user: &User, credit: &Credit) -> AccountResult<()> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (
                username,
                full_name,
                school_name,
                class_level,
                password,
                phone_no,
                email,
                birthdate,
                country,
                state,
                city,
                address
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(&user.full_name)
        .bind(&user.school_name)
        .bind(&user.class_level)
        .bind(user.password.as_str())
        .bind(&user.phone_no)
        .bind(&user.email)
        .bind(user.birthdate.as_str())
        .bind(&user.country)
        .bind(&user.state)
        .bind(&user.city)
        .bind(&user.address)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            // Dropping the transaction rolls it back
            return Err(AccountError::DuplicateUsername);
        }

        sqlx::query("INSERT INTO credits (username, points, last_update) VALUES ($1, $2, $3)")
            .bind(credit.user_name.as_str())
            .bind(credit.points)
            .bind(credit.last_update)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AccountError::DuplicateUsername
                } else {
                    AccountError::Storage(e)
                }
            })?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                full_name,
                school_name,
                class_level,
                password,
                phone_no,
                email,
                birthdate,
                country,
                state,
                city,
                address
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AccountResult<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(user_name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Credit Repository Implementation
// ============================================================================

impl CreditRepository for PgAccountRepository {
    async fn find_credit(&self, user_name: &UserName) -> AccountResult<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            "SELECT username, points, last_update FROM credits WHERE username = $1",
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CreditRow::into_credit))
    }

    async fn accrue(
        &self,
        user_name: &UserName,
        now: f64,
        interval_secs: f64,
    ) -> AccountResult<bool> {
        // Single statement: the row lock makes check-and-increment atomic
        let updated = sqlx::query(
            r#"
            UPDATE credits SET
                points = points + 1,
                last_update = $2
            WHERE username = $1
              AND $2 - last_update >= $3
            "#,
        )
        .bind(user_name.as_str())
        .bind(now)
        .bind(interval_secs)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Reward Repository Implementation
// ============================================================================

impl RewardRepository for PgAccountRepository {
    async fn append(&self, reward: &Reward) -> AccountResult<Reward> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO rewards (username, reward_type, description, date_earned)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(reward.user_name.as_str())
        .bind(&reward.reward_type)
        .bind(&reward.description)
        .bind(&reward.date_earned)
        .fetch_one(&self.pool)
        .await?;

        Ok(Reward {
            id: Some(id),
            ..reward.clone()
        })
    }

    async fn list_by_user_name(&self, user_name: &UserName) -> AccountResult<Vec<Reward>> {
        let rows = sqlx::query_as::<_, RewardRow>(
            r#"
            SELECT id, username, reward_type, description, date_earned
            FROM rewards
            WHERE username = $1
            ORDER BY id
            "#,
        )
        .bind(user_name.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RewardRow::into_reward).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    full_name: String,
    school_name: Option<String>,
    class_level: Option<String>,
    password: String,
    phone_no: Option<String>,
    email: Option<String>,
    birthdate: Option<String>,
    country: Option<String>,
    state: Option<String>,
    city: Option<String>,
    address: Option<String>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_name: UserName::from_db(self.username),
            full_name: self.full_name,
            school_name: self.school_name.unwrap_or_default(),
            class_level: self.class_level.unwrap_or_default(),
            password: UserPassword::new(self.password),
            phone_no: self.phone_no.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            birthdate: Birthdate::from_db(self.birthdate.unwrap_or_default()),
            country: self.country.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CreditRow {
    username: String,
    points: i32,
    last_update: f64,
}

impl CreditRow {
    fn into_credit(self) -> Credit {
        Credit {
            user_name: UserName::from_db(self.username),
            points: self.points,
            last_update: self.last_update,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RewardRow {
    id: i32,
    username: String,
    reward_type: String,
    description: String,
    date_earned: String,
}

impl RewardRow {
    fn into_reward(self) -> Reward {
        Reward {
            id: Some(self.id),
            user_name: UserName::from_db(self.username),
            reward_type: self.reward_type,
            description: self.description,
            date_earned: self.date_earned,
        }
    }
}
