use fractic_server_error::{define_client_error, define_internal_error};

// Auth-related.
define_client_error!(NotAuthenticated, "User is not authenticated.");

// Fetch-related.
define_client_error!(
    FetchFailed,
    "Failed to fetch rows from '{table}'.",
    { table: &str }
);
define_client_error!(
    SupersededReconciliation,
    "Reconciliation pass superseded by a newer fetch generation."
);

// FX-related.
define_client_error!(
    RateUnavailable,
    "Exchange rate {base} -> {quote} is unavailable.",
    { base: &str, quote: &str }
);
define_client_error!(
    InvalidFxPayload,
    "Invalid FX rate payload: {details}.",
    { details: &str }
);

// Lookup-related.
define_internal_error!(
    CategoryLookupFailed,
    "Category label lookup against '{table}' failed.",
    { table: &str }
);
