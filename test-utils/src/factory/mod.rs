//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let class = factory::class::create_class(&db).await?;
//!     let booking = factory::booking::create_booking(&db, class.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::class::ClassFactory;
//!
//! let class = ClassFactory::new(&db)
//!     .name("Evening Yoga")
//!     .capacity(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `class` - Create class entities
//! - `booking` - Create booking entities
//! - `time_block` - Create time block entities
//! - `feedback` - Create feedback entities
//! - `helpers` - Shared utilities (unique ID generation)

pub mod booking;
pub mod class;
pub mod feedback;
pub mod helpers;
pub mod time_block;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use class::create_class;
pub use feedback::create_feedback;
pub use time_block::create_time_block;
