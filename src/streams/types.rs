//! Stream definitions
//!
//! The set of streams is closed: every entity the API exposes is a variant
//! of [`StreamKind`], and each variant carries a static
//! [`StreamDefinition`].

use serde::{Deserialize, Serialize};

/// Static description of one extractable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamDefinition {
    /// Unique stream identifier, e.g. `users`
    pub stream_id: &'static str,
    /// API path of the resource
    pub resource_path: &'static str,
    /// Name of the entity in the API's schema definitions
    pub schema_name: &'static str,
    /// Primary key fields (never empty)
    pub key_properties: &'static [&'static str],
    /// Field used as the watermark, if any
    pub replication_key: Option<&'static str>,
}

const USERS: StreamDefinition = StreamDefinition {
    stream_id: "users",
    resource_path: "/api/v1/users",
    schema_name: "UserDTO",
    key_properties: &["id"],
    replication_key: Some("updated_at"),
};

const ROLES: StreamDefinition = StreamDefinition {
    stream_id: "roles",
    resource_path: "/api/v1/roles",
    schema_name: "RoleDTO",
    key_properties: &["id"],
    replication_key: None,
};

const GROUPS: StreamDefinition = StreamDefinition {
    stream_id: "groups",
    resource_path: "/api/v1/groups",
    schema_name: "GroupDTO",
    key_properties: &["id"],
    replication_key: None,
};

const TEAMS: StreamDefinition = StreamDefinition {
    stream_id: "teams",
    resource_path: "/api/v1/teams",
    schema_name: "TeamDTO",
    key_properties: &["id"],
    replication_key: None,
};

/// The streams this tap can extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    Users,
    Roles,
    Groups,
    Teams,
}

impl StreamKind {
    /// Every stream, in discovery order
    pub const ALL: [StreamKind; 4] = [
        StreamKind::Users,
        StreamKind::Roles,
        StreamKind::Groups,
        StreamKind::Teams,
    ];

    /// Look up a stream by its identifier
    pub fn from_stream_id(stream_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.stream_id() == stream_id)
    }

    /// Static definition of this stream
    pub fn definition(self) -> &'static StreamDefinition {
        match self {
            StreamKind::Users => &USERS,
            StreamKind::Roles => &ROLES,
            StreamKind::Groups => &GROUPS,
            StreamKind::Teams => &TEAMS,
        }
    }

    /// Stream identifier
    pub fn stream_id(self) -> &'static str {
        self.definition().stream_id
    }

    /// API path of the resource
    pub fn resource_path(self) -> &'static str {
        self.definition().resource_path
    }

    /// Name of the entity in the API's schema definitions
    pub fn schema_name(self) -> &'static str {
        self.definition().schema_name
    }

    /// Primary key fields as owned strings
    pub fn key_properties(self) -> Vec<String> {
        self.definition()
            .key_properties
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Watermark field, if the stream has one
    pub fn replication_key(self) -> Option<&'static str> {
        self.definition().replication_key
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stream_id())
    }
}

impl std::str::FromStr for StreamKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_stream_id(s).ok_or_else(|| crate::error::Error::StreamNotFound {
            stream: s.to_string(),
        })
    }
}
