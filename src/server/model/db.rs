//! Database model type aliases.
//!
//! Aliases for the SeaORM models used throughout the server, so signatures don't need to
//! reach into the generated `entity` crate directly.

/// Type alias for the affiliation database model.
///
/// # Fields (from `entity::affiliation::Model`)
/// - `id` - Primary key
/// - `name` - Unique institution name
/// - `created_at` - Timestamp when the affiliation was created
/// - `updated_at` - Timestamp of the last affiliation update
pub type AffiliationModel = entity::affiliation::Model;

/// Type alias for the member database model.
///
/// # Fields (from `entity::member::Model`)
/// - `id` - Primary key
/// - `organization_type` - Scope tag (resident, fellow, trainee, peer group, staff)
/// - `affiliation_id` - Owning institution (nullable)
/// - `affiliation_scope` - Generated, `affiliation_id` or 0
/// - `member_code` - Institution-assigned identifier
/// - `name`, `position` - Display fields
/// - `entry_date`, `graduated_at`, `leave_at`, `active_again_at` - Lifecycle dates
/// - `status` - Active, graduated, or on leave
/// - `deleted_at` - Soft delete marker
/// - `deletion_epoch` - Generated, `'0'` while active, derived from `deleted_at` otherwise
pub type MemberModel = entity::member::Model;
