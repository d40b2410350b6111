use uuid::Uuid;

/// +----------------------------------------------------------+
/// | STRUCTS | TRAITS | ENUMS | FUNCTIONS                     |
/// +----------+-------+-------+------------------------------+
/// | Structs:                                                 |
/// |   - AdminSession                                         |
/// |   - RequestContext                                       |
/// +----------------------------------------------------------+

/// An authenticated administrator, as resolved by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    /// Identifier of the admin user.
    pub subject: String,
}

impl AdminSession {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
        }
    }
}

/// Per-request state handed to every service operation.
///
/// Services never read session or request data from ambient state; whatever they need travels
/// in this value.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlates log lines for one request.
    pub request_id: Uuid,
    /// Present when the caller authenticated as an administrator.
    pub admin: Option<AdminSession>,
}

impl RequestContext {
    /// Context for a caller that did not authenticate.
    pub fn anonymous() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            admin: None,
        }
    }

    /// Context for an authenticated administrator.
    pub fn admin(session: AdminSession) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            admin: Some(session),
        }
    }
}

impl From<Option<AdminSession>> for RequestContext {
    fn from(admin: Option<AdminSession>) -> Self {
        match admin {
            Some(session) => Self::admin(session),
            None => Self::anonymous(),
        }
    }
}
