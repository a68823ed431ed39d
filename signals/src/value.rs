/// One dispatch argument.
///
/// The schema registry is arity-only, so arguments travel as the wire
/// delivers them: text fields and the occasional integer code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalValue {
    Str(String),
    Int(i64),
}

impl SignalValue {
    /// Borrow the textual form, if this is a text argument.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SignalValue::Str(s) => Some(s),
            SignalValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            SignalValue::Str(_) => None,
            SignalValue::Int(i) => Some(*i),
        }
    }
}

impl From<&str> for SignalValue {
    fn from(val: &str) -> Self { SignalValue::Str(val.to_string()) }
}

impl From<String> for SignalValue {
    fn from(val: String) -> Self { SignalValue::Str(val) }
}

impl From<i64> for SignalValue {
    fn from(val: i64) -> Self { SignalValue::Int(val) }
}

impl std::fmt::Display for SignalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalValue::Str(s) => write!(f, "{s}"),
            SignalValue::Int(i) => write!(f, "{i}"),
        }
    }
}
