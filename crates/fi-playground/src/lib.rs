//! Example domain used to exercise `fi-collections`.
//!
//! Plain data holders: a [`User`] made of a [`RealName`], an [`Email`] and a
//! [`Password`]. Users can be stored in a `Collection<User>` directly, or as
//! objects inside an [`Element`].

use std::any::Any;

use fi_collections::{Element, Member, Object, TypeDescriptor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealName {
    first: String,
    last: String,
}

impl RealName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        RealName {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Email(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: impl Into<String>) -> Self {
        Password(password.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    real_name: RealName,
    email: Email,
    password: Password,
}

impl User {
    /// Nominal type name used by collections of users.
    pub const TYPE: &'static str = "User";

    pub fn new(real_name: RealName, email: Email, password: Password) -> Self {
        User {
            real_name,
            email,
            password,
        }
    }

    pub fn real_name(&self) -> &RealName {
        &self.real_name
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn check_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }

    /// Everything after the first `@`, or the whole address if there is none.
    pub fn email_domain(&self) -> &str {
        let email = self.email();
        email.split_once('@').map_or(email, |(_, domain)| domain)
    }

    /// Wraps a copy of this user as a dynamic element.
    pub fn to_element(&self) -> Element {
        Element::object(self.clone())
    }
}

impl Member for User {
    fn descriptor(&self) -> TypeDescriptor {
        TypeDescriptor::nominal(User::TYPE)
    }
}

impl Object for User {
    fn class_name(&self) -> &'static str {
        User::TYPE
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
