pub mod test_helpers {
    use sqlx::{
        sqlite::{SqliteConnectOptions, SqlitePoolOptions},
        SqlitePool,
    };
    use std::str::FromStr;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(":memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Insert a test user with a hashed password, returning the new row id
    pub async fn insert_test_user(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<i64, sqlx::Error> {
        use argon2::{
            password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
            Argon2,
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| {
                sqlx::Error::Configuration(format!("Password hashing failed: {}", e).into())
            })?
            .to_string();

        let referral_code = format!("{}2025", name);

        let result = sqlx::query(
            "INSERT INTO users (name, phone, email, password_hash, referral_code) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind("0700000000")
        .bind(email)
        .bind(password_hash)
        .bind(referral_code)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a test donation attributed to a referral code
    pub async fn insert_test_donation(
        pool: &SqlitePool,
        name: &str,
        email: &str,
        amount: f64,
        referral_code: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO donations (name, email, amount, referral_code, date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(email)
        .bind(amount)
        .bind(referral_code)
        .bind("2025-06-01 12:00:00")
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
