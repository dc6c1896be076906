//! Event types produced by the generator.

/// HTTP method of a simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Get, Method::Post, Method::Put, Method::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Endpoint hit by a simulated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Users,
    Orders,
    Products,
    Health,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Users,
        Endpoint::Orders,
        Endpoint::Products,
        Endpoint::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Users => "/api/users",
            Endpoint::Orders => "/api/orders",
            Endpoint::Products => "/api/products",
            Endpoint::Health => "/api/health",
        }
    }
}

/// Failure mode attached to an errored request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Validation,
    Database,
    Auth,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 4] = [
        ErrorKind::Timeout,
        ErrorKind::Validation,
        ErrorKind::Database,
        ErrorKind::Auth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Timeout => "timeout",
            ErrorKind::Validation => "validation",
            ErrorKind::Database => "database",
            ErrorKind::Auth => "auth",
        }
    }
}

/// A single simulated web request.
///
/// Base latency and the optional slow-tail delay are kept separate so
/// the tail remains observable; metrics record their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEvent {
    pub method: Method,
    pub endpoint: Endpoint,
    pub base_latency_secs: f64,
    pub slow_tail_secs: Option<f64>,
    pub error: Option<ErrorKind>,
}

impl RequestEvent {
    /// Total latency: base plus any slow-tail addition.
    pub fn total_latency_secs(&self) -> f64 {
        self.base_latency_secs + self.slow_tail_secs.unwrap_or(0.0)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// User action recorded in the structured log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    ViewProduct,
    AddToCart,
    Checkout,
    Logout,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Login,
        Action::ViewProduct,
        Action::AddToCart,
        Action::Checkout,
        Action::Logout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Login => "login",
            Action::ViewProduct => "view_product",
            Action::AddToCart => "add_to_cart",
            Action::Checkout => "checkout",
            Action::Logout => "logout",
        }
    }
}

/// A single simulated user action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub user_id: String,
    pub request_id: String,
    pub action: Action,
    pub duration_secs: f64,
    /// Failure label for errored actions; the demo workload only ever
    /// produces timeouts here.
    pub error_type: Option<&'static str>,
}

impl ActionEvent {
    pub fn is_error(&self) -> bool {
        self.error_type.is_some()
    }
}
