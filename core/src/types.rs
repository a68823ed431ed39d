/// Reserved identifier that turns a removal request into a bulk removal.
pub const ALL: &str = "ALL";

/// Instrument/stream identifier that real-time events and subscriptions are
/// keyed by (e.g. a ticker code such as "005930").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn as_str(&self) -> &str { &self.0 }

    /// Whether this is the reserved "ALL" sentinel.
    pub fn is_all(&self) -> bool { self.0 == ALL }
}

impl From<&str> for SubjectId {
    fn from(val: &str) -> Self {
        SubjectId(val.to_string())
    }
}

impl From<String> for SubjectId {
    fn from(val: String) -> Self {
        SubjectId(val)
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Channel/slot identifier under which the external collaborator registers a
/// subscription. Multiple screens may independently subscribe to one subject.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn as_str(&self) -> &str { &self.0 }

    /// Whether this is the reserved "ALL" sentinel.
    pub fn is_all(&self) -> bool { self.0 == ALL }
}

impl From<&str> for ScreenId {
    fn from(val: &str) -> Self {
        ScreenId(val.to_string())
    }
}

impl From<String> for ScreenId {
    fn from(val: String) -> Self {
        ScreenId(val)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
