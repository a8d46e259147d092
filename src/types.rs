//! Core types for the path-operations abstraction.

use std::fmt;
use std::str::FromStr;

use crate::OpsError;

/// Symbolic permission preset, decoupled from any OS-specific bit layout.
///
/// Operations take a `ModeLabel` instead of raw permission bits so that one
/// vocabulary maps onto differing permission models (POSIX bits, ACLs).
/// POSIX backends can use the default projection ([`file_mode`](Self::file_mode)
/// / [`dir_mode`](Self::dir_mode)); other backends map labels to their own
/// native representation.
///
/// Parsing an unrecognized label fails with [`OpsError::UnknownMode`]:
///
/// ```rust
/// use pathops_backend::{ModeLabel, OpsError};
///
/// let mode: ModeLabel = "user_readonly".parse().unwrap();
/// assert!(!mode.writable());
///
/// let err = "read_backwards".parse::<ModeLabel>().unwrap_err();
/// assert!(matches!(err, OpsError::UnknownMode { .. }));
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModeLabel {
    /// Owner may read, nobody may write.
    UserReadonly,
    /// Owner may read and write.
    UserWritable,
    /// Owner and group may read, nobody may write.
    GroupReadonly,
    /// Owner and group may read and write.
    GroupWritable,
    /// Everyone may read, nobody may write.
    WorldReadable,
}

impl ModeLabel {
    /// Every label in the vocabulary, in declaration order.
    pub const ALL: [ModeLabel; 5] = [
        ModeLabel::UserReadonly,
        ModeLabel::UserWritable,
        ModeLabel::GroupReadonly,
        ModeLabel::GroupWritable,
        ModeLabel::WorldReadable,
    ];

    /// The canonical string form of this label.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModeLabel::UserReadonly => "user_readonly",
            ModeLabel::UserWritable => "user_writable",
            ModeLabel::GroupReadonly => "group_readonly",
            ModeLabel::GroupWritable => "group_writable",
            ModeLabel::WorldReadable => "world_readable",
        }
    }

    /// Returns `true` if this label grants write access to anyone.
    #[inline]
    pub const fn writable(&self) -> bool {
        matches!(self, ModeLabel::UserWritable | ModeLabel::GroupWritable)
    }

    /// Default POSIX projection for a regular file.
    #[inline]
    pub const fn file_mode(&self) -> u32 {
        match self {
            ModeLabel::UserReadonly => 0o400,
            ModeLabel::UserWritable => 0o600,
            ModeLabel::GroupReadonly => 0o440,
            ModeLabel::GroupWritable => 0o660,
            ModeLabel::WorldReadable => 0o444,
        }
    }

    /// Default POSIX projection for a directory.
    ///
    /// Directories keep the matching execute bits so their content stays
    /// listable by whoever can read them.
    #[inline]
    pub const fn dir_mode(&self) -> u32 {
        match self {
            ModeLabel::UserReadonly => 0o500,
            ModeLabel::UserWritable => 0o700,
            ModeLabel::GroupReadonly => 0o550,
            ModeLabel::GroupWritable => 0o770,
            ModeLabel::WorldReadable => 0o555,
        }
    }
}

impl FromStr for ModeLabel {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user_readonly" => Ok(ModeLabel::UserReadonly),
            "user_writable" => Ok(ModeLabel::UserWritable),
            "group_readonly" => Ok(ModeLabel::GroupReadonly),
            "group_writable" => Ok(ModeLabel::GroupWritable),
            "world_readable" => Ok(ModeLabel::WorldReadable),
            other => Err(OpsError::UnknownMode {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ModeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated group name for ownership changes.
///
/// Group names are site-specific, so this stays an open vocabulary; validation
/// only rejects names that could never denote a group. Whether a well-formed
/// name denotes a group the backend knows is decided per backend, which signals
/// [`OpsError::UnknownGroup`] otherwise.
///
/// ```rust
/// use pathops_backend::GroupLabel;
///
/// let group: GroupLabel = "datalad".parse().unwrap();
/// assert_eq!(group.as_str(), "datalad");
/// assert!("team/admins".parse::<GroupLabel>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct GroupLabel(String);

impl GroupLabel {
    /// Validate and wrap a group name.
    ///
    /// # Errors
    ///
    /// [`OpsError::UnknownGroup`] if the name is empty or contains path
    /// separators, whitespace, or NUL bytes.
    pub fn new(name: impl Into<String>) -> Result<Self, OpsError> {
        let name = name.into();
        let malformed = name.is_empty()
            || name
                .chars()
                .any(|c| c == '/' || c == '\\' || c == '\0' || c.is_whitespace());
        if malformed {
            return Err(OpsError::UnknownGroup { label: name });
        }
        Ok(Self(name))
    }

    /// The group name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for GroupLabel {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for GroupLabel {
    type Error = OpsError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<GroupLabel> for String {
    fn from(label: GroupLabel) -> Self {
        label.0
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
