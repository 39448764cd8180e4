use indexmap::IndexMap;

/// Workspace access role for a named user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ReadOnly,
    ReadWrite,
}

impl Role {
    pub(crate) fn from_name(name: &str) -> Option<Role> {
        match name.to_ascii_lowercase().as_str() {
            "read" => Some(Role::ReadOnly),
            "write" => Some(Role::ReadWrite),
            _ => None,
        }
    }
}

/// Workspace-level configuration: per-user access roles.
#[derive(Debug, Default)]
pub struct Configuration {
    users: IndexMap<String, Role>,
}

impl Configuration {
    pub fn add_user(&mut self, username: &str, role: Role) {
        self.users.insert(username.to_owned(), role);
    }

    pub fn users(&self) -> &IndexMap<String, Role> {
        &self.users
    }
}
