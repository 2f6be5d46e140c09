// ============================
// userdesk-backend-lib/src/storage.rs
// ============================
//! Storage abstraction with an in-memory implementation.
use crate::user::{NewUser, User, UserError, UserUpdate};
use parking_lot::RwLock;

/// Trait for user storage backends
pub trait UserRepository: Send + Sync {
    /// Every stored user, in insertion order
    fn get_all(&self) -> Vec<User>;

    /// Look up a user by id
    fn get_by_id(&self, id: i64) -> Result<User, UserError>;

    /// Look up a user by username; absence is not an error
    fn get_by_username(&self, username: &str) -> Option<User>;

    /// Look up a user by email; absence is not an error
    fn get_by_email(&self, email: &str) -> Option<User>;

    /// Store a new user, assigning its id
    fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Apply a versioned update and return the stored result
    fn update(&self, update: UserUpdate) -> Result<User, UserError>;

    /// Remove a user by id
    fn delete(&self, id: i64) -> Result<(), UserError>;
}

#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    /// Next id to hand out; never reused, even after deletes
    next_id: i64,
}

/// In-memory implementation of [`UserRepository`].
///
/// One reader/writer lock guards the whole table. State lives as long as the
/// store value does and is lost on restart.
#[derive(Debug)]
pub struct InMemoryUserStore {
    table: RwLock<UserTable>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserStore {
    fn get_all(&self) -> Vec<User> {
        self.table.read().users.clone()
    }

    fn get_by_id(&self, id: i64) -> Result<User, UserError> {
        let table = self.table.read();
        table
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(UserError::NotFound)
    }

    fn get_by_username(&self, username: &str) -> Option<User> {
        let table = self.table.read();
        table.users.iter().find(|u| u.username == username).cloned()
    }

    fn get_by_email(&self, email: &str) -> Option<User> {
        let table = self.table.read();
        table.users.iter().find(|u| u.email == email).cloned()
    }

    fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut table = self.table.write();

        for existing in &table.users {
            if existing.username == user.username {
                return Err(UserError::DuplicateUsername(user.username));
            }
            if existing.email == user.email {
                return Err(UserError::DuplicateEmail(user.email));
            }
        }

        let user = user.into_user(table.next_id);
        table.next_id += 1;
        table.users.push(user.clone());
        Ok(user)
    }

    fn update(&self, update: UserUpdate) -> Result<User, UserError> {
        // Uniqueness checks and the mutation share one critical section.
        let mut table = self.table.write();

        let id = update.id;
        if table
            .users
            .iter()
            .any(|u| u.id != id && u.email == update.email)
        {
            return Err(UserError::DuplicateEmail(update.email));
        }
        if table
            .users
            .iter()
            .any(|u| u.id != id && u.username == update.username)
        {
            return Err(UserError::DuplicateUsername(update.username));
        }

        let stored = table
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or(UserError::NotFound)?;

        if stored.version != update.version {
            return Err(UserError::EditConflict);
        }

        stored.first_name = update.first_name;
        stored.last_name = update.last_name;
        stored.username = update.username;
        stored.email = update.email;
        stored.version += 1;

        Ok(stored.clone())
    }

    fn delete(&self, id: i64) -> Result<(), UserError> {
        let mut table = self.table.write();
        let position = table
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(UserError::NotFound)?;
        table.users.remove(position);
        Ok(())
    }
}
