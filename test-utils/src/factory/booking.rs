//! Booking factory for creating test booking entities.
//!
//! This module provides factory methods for creating booking entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Provides a builder pattern for creating booking entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, class.id)
///     .status("confirmed")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    customer_name: String,
    customer_email: String,
    status: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - customer_name: `"Customer {id}"` where id is auto-incremented
    /// - customer_email: `"customer{id}@example.com"`
    /// - status: `"pending"`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `class_id` - Class ID this booking belongs to
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, class_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            class_id,
            customer_name: format!("Customer {}", id),
            customer_email: format!("customer{}@example.com", id),
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    /// Sets the customer name.
    ///
    /// # Arguments
    /// - `customer_name` - Name of the customer holding the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = customer_name.into();
        self
    }

    /// Sets the customer email.
    ///
    /// # Arguments
    /// - `customer_email` - Email address of the customer
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn customer_email(mut self, customer_email: impl Into<String>) -> Self {
        self.customer_email = customer_email.into();
        self
    }

    /// Sets the booking status.
    ///
    /// # Arguments
    /// - `status` - One of `pending`, `confirmed`, or `cancelled`
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for tests exercising hold-expiry behavior, which keys off
    /// how long a booking has been pending.
    ///
    /// # Arguments
    /// - `created_at` - Creation timestamp for the booking
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            class_id: ActiveValue::Set(self.class_id),
            customer_name: ActiveValue::Set(self.customer_name),
            customer_email: ActiveValue::Set(self.customer_email),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values for the specified class.
///
/// Shorthand for `BookingFactory::new(db, class_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `class_id` - Class ID the booking belongs to
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    class_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, class_id).build().await
}
