use crate::error::UsersError;
use crate::model::{User, UserId};
use parking_lot::Mutex;
use tracing::{debug, warn};

#[derive(Debug)]
struct RegistryInner {
    users: Vec<User>,
    next_id: u64,
}

/// Ordered in-memory collection of users.
///
/// Every operation runs to completion under a single lock, so the id counter and the
/// collection always move together. Ids come from a counter that only grows; a deleted
/// id is never handed out again.
#[derive(Debug)]
pub struct UserRegistry {
    inner: Mutex<RegistryInner>,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: Mutex::new(RegistryInner { users: Vec::new(), next_id: 1 }) }
    }

    /// Builds a registry holding `users` in the given order.
    ///
    /// Later records repeating an id already taken are dropped. The counter resumes after
    /// the highest id present.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut stored: Vec<User> = Vec::new();
        for user in users {
            if stored.iter().any(|u| u.id == user.id) {
                warn!(id = %user.id, "Skipping duplicate user id in initial records");
                continue;
            }
            stored.push(user);
        }

        let next_id = stored.iter().map(|u| u.id.get()).max().map_or(1, |max| max.saturating_add(1));

        Self { inner: Mutex::new(RegistryInner { users: stored, next_id }) }
    }

    /// The demo records every fresh deployment starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_users([User::new(1, "Miguel"), User::new(2, "Ana"), User::new(3, "Carlos")])
    }

    #[must_use]
    pub fn list_all(&self) -> Vec<User> {
        self.inner.lock().users.clone()
    }

    /// # Errors
    /// [`UsersError::NotFound`] when no record has `id`.
    pub fn get_by_id(&self, id: UserId) -> Result<User, UsersError> {
        self.inner
            .lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| UsersError::not_found(id))
    }

    /// Appends a new record with the next id.
    ///
    /// # Errors
    /// [`UsersError::Internal`] once the id space is exhausted.
    pub fn create(&self, name: Option<String>) -> Result<User, UsersError> {
        let mut inner = self.inner.lock();

        let id = inner.next_id;
        inner.next_id = id.checked_add(1).ok_or("User id space exhausted")?;

        let user = User { id: UserId(id), name };
        inner.users.push(user.clone());
        drop(inner);

        debug!(id, "User created");
        Ok(user)
    }

    /// Replaces the name of the record with `id`; an absent name clears it.
    ///
    /// # Errors
    /// [`UsersError::NotFound`] when no record has `id`.
    pub fn update_by_id(&self, id: UserId, name: Option<String>) -> Result<User, UsersError> {
        let mut inner = self.inner.lock();

        let user = inner.users.iter_mut().find(|u| u.id == id).ok_or_else(|| UsersError::not_found(id))?;
        user.name = name;
        let updated = user.clone();
        drop(inner);

        debug!(%id, "User updated");
        Ok(updated)
    }

    /// Removes the record with `id`, keeping the relative order of the rest.
    ///
    /// # Errors
    /// [`UsersError::NotFound`] when no record has `id`.
    pub fn delete_by_id(&self, id: UserId) -> Result<User, UsersError> {
        let mut inner = self.inner.lock();

        let index = inner.users.iter().position(|u| u.id == id).ok_or_else(|| UsersError::not_found(id))?;
        let removed = inner.users.remove(index);
        drop(inner);

        debug!(%id, "User deleted");
        Ok(removed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().users.is_empty()
    }
}
