//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// User accounts. Read-only to the listing seeder.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable display name (max 32 characters).
        display_name -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Rentable listings owned by users.
    ///
    /// `CHECK` constraints enforce a positive price and
    /// `end_date > start_date`.
    listings (id) {
        /// Primary key, defaulted by `gen_random_uuid()`.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Short title (max 100 characters).
        title -> Varchar,
        description -> Text,
        /// `NUMERIC(10, 2)`.
        price -> Numeric,
        start_date -> Date,
        end_date -> Date,
        address -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp (auto-updated by trigger).
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(listings -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(listings, users);
