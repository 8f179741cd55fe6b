/// Shape of a single value accepted by the session config validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// String in hyphenated UUID form.
    Uuid,
    Boolean,
    /// Number without a fractional part.
    Integer,
    /// Array of objects with arbitrary keys and values.
    Records,
    Object(&'static [FieldRule]),
}

impl FieldKind {
    /// Name used in "Expected ..., received ..." messages.
    pub fn expected(self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Uuid => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "number",
            FieldKind::Records => "array",
            FieldKind::Object(_) => "object",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule {
        name,
        kind,
        required: false,
    }
}

const fn required(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule {
        name,
        kind,
        required: true,
    }
}

pub const SESSION_CONTEXT_RULES: &[FieldRule] = &[
    optional("cookies", FieldKind::Records),
    optional("localStorage", FieldKind::Records),
];

pub const DIMENSIONS_RULES: &[FieldRule] = &[
    required("width", FieldKind::Integer),
    required("height", FieldKind::Integer),
];

/// Recognized session config fields, in serialization order.
pub const SESSION_CONFIG_RULES: &[FieldRule] = &[
    optional("sessionId", FieldKind::Uuid),
    optional("userAgent", FieldKind::String),
    optional("useProxy", FieldKind::Boolean),
    optional("proxyUrl", FieldKind::String),
    optional("blockAds", FieldKind::Boolean),
    optional("solveCaptcha", FieldKind::Boolean),
    optional("sessionContext", FieldKind::Object(SESSION_CONTEXT_RULES)),
    optional("timeout", FieldKind::Integer),
    optional("concurrency", FieldKind::Integer),
    optional("isSelenium", FieldKind::Boolean),
    optional("dimensions", FieldKind::Object(DIMENSIONS_RULES)),
];
