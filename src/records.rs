use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Opaque key of a person tracked as a graph node.
    ActorId
);

string_id!(
    /// Opaque key of a movie or show. Edge labels are sets of these.
    ProductionId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionStub {
    pub id: ProductionId,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonStub {
    pub id: ActorId,
    #[serde(default)]
    pub name: String,
}

/// A person as returned by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: ActorId,
    pub name: String,
    /// Productions the person acted in, in provider order.
    #[serde(default)]
    pub filmography: Vec<ProductionStub>,
}

/// A production as returned by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    pub id: ProductionId,
    pub title: String,
    #[serde(default)]
    pub cast: Vec<PersonStub>,
}

impl ProductionStub {
    pub fn new(id: impl Into<ProductionId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl PersonStub {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Person {
    pub fn new(
        id: impl Into<ActorId>,
        name: impl Into<String>,
        filmography: Vec<ProductionStub>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            filmography,
        }
    }
}

impl Production {
    pub fn new(id: impl Into<ProductionId>, title: impl Into<String>, cast: Vec<PersonStub>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cast,
        }
    }
}
