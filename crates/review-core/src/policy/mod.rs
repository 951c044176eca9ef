//! Centralized access policy
//!
//! Every entry point consults this single table of predicates over
//! (actor, action, resource kind) instead of re-declaring permission
//! logic per endpoint. Object-level checks run only after the coarse
//! check passes; a denial at either stage is a hard `Forbidden`.

use crate::entities::{Role, User};
use crate::value_objects::Snowflake;

/// What the caller is trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

/// The kind of resource being acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Category,
    Genre,
    Title,
    Review,
    Comment,
    User,
}

/// Outcome of a policy evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Forbidden,
}

impl Decision {
    #[inline]
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// The caller's authentication state as seen by the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated {
        user_id: Snowflake,
        role: Role,
        is_staff: bool,
        is_superuser: bool,
    },
}

impl Actor {
    /// Build an actor from a loaded user record
    pub fn from_user(user: &User) -> Self {
        Self::Authenticated {
            user_id: user.id,
            role: user.role,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        }
    }

    /// The caller's user id, if authenticated
    pub fn user_id(&self) -> Option<Snowflake> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    /// Admin-level access: the admin role, or both staff and superuser flags
    pub fn is_admin(&self) -> bool {
        match self {
            Self::Anonymous => false,
            Self::Authenticated {
                role,
                is_staff,
                is_superuser,
                ..
            } => *role == Role::Admin || (*is_staff && *is_superuser),
        }
    }

    /// Moderator role check (admin implies moderator powers elsewhere)
    pub fn is_moderator(&self) -> bool {
        matches!(
            self,
            Self::Authenticated {
                role: Role::Moderator,
                ..
            }
        )
    }
}

/// Who may mutate a resource kind at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteRule {
    /// Catalogue and user administration: admin only
    AdminOnly,
    /// User-authored content: any authenticated caller may create;
    /// update/delete is settled by the object check
    AuthoredContent,
}

const fn write_rule(kind: ResourceKind) -> WriteRule {
    match kind {
        ResourceKind::Category | ResourceKind::Genre | ResourceKind::Title | ResourceKind::User => {
            WriteRule::AdminOnly
        }
        ResourceKind::Review | ResourceKind::Comment => WriteRule::AuthoredContent,
    }
}

/// Read access. The catalogue (titles, categories, genres, reviews,
/// comments) is readable by anyone including anonymous callers; the
/// user directory is admin-only.
pub fn can_read(actor: &Actor, kind: ResourceKind) -> bool {
    match kind {
        ResourceKind::User => actor.is_admin(),
        _ => true,
    }
}

/// Coarse-grained write check, evaluated before any object is loaded.
///
/// Anonymous callers are denied all mutations. For authored content the
/// coarse stage only requires authentication; ownership is settled by
/// [`can_write_object`].
pub fn can_write(actor: &Actor, action: Action, kind: ResourceKind) -> bool {
    if action == Action::Read {
        return can_read(actor, kind);
    }
    let Actor::Authenticated { .. } = actor else {
        return false;
    };
    match write_rule(kind) {
        WriteRule::AdminOnly => actor.is_admin(),
        WriteRule::AuthoredContent => true,
    }
}

/// Object-level write check, evaluated only after [`can_write`] passed.
///
/// Clauses are OR'd, never exclusive: the author clause alone permits a
/// caller who is neither moderator nor admin.
pub fn can_write_object(
    actor: &Actor,
    kind: ResourceKind,
    author_id: Snowflake,
) -> bool {
    if actor.is_admin() {
        return true;
    }
    if actor.is_moderator() && write_rule(kind) == WriteRule::AuthoredContent {
        return true;
    }
    actor.user_id() == Some(author_id)
}

/// Full evaluation: coarse check, then the object check when an author
/// is in play. Returns a decision rather than silently no-opping.
pub fn authorize(
    actor: &Actor,
    action: Action,
    kind: ResourceKind,
    author_id: Option<Snowflake>,
) -> Decision {
    if !can_write(actor, action, kind) {
        return Decision::Forbidden;
    }
    if let Some(author_id) = author_id {
        if matches!(action, Action::Update | Action::Delete)
            && !can_write_object(actor, kind, author_id)
        {
            return Decision::Forbidden;
        }
    }
    Decision::Allowed
}
