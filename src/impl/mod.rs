// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod clock;
        pub(crate) mod fx_rate_datasource;
        pub(crate) mod identity_datasource;
        pub(crate) mod row_set_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod account_model;
        pub(crate) mod budget_item_model;
        pub(crate) mod category_model;
        pub(crate) mod fx_payload_model;
        pub(crate) mod goal_model;
        pub(crate) mod payment_model;
        pub(crate) mod row_model;
        pub(crate) mod timestamp_model;
        pub(crate) mod transaction_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod budget;
        pub(crate) mod category;
        pub(crate) mod dashboard;
        pub(crate) mod goal;
        pub(crate) mod month_window;
        pub(crate) mod payment;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod account_classifier;
        pub(crate) mod amount_meta;
        pub(crate) mod currency_converter;
        pub(crate) mod goal_progress;
        pub(crate) mod payment_aggregator;
        pub(crate) mod transaction_linker;
        pub(crate) mod utils;
    }
    pub(crate) mod repositories {
        pub(crate) mod records_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod reconcile_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod money_fmt;
    pub(crate) mod transaction_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::budget::*;
        pub use crate::domain::entities::category::*;
        pub use crate::domain::entities::dashboard::*;
        pub use crate::domain::entities::goal::*;
        pub use crate::domain::entities::month_window::*;
        pub use crate::domain::entities::payment::*;
        pub use crate::domain::entities::transaction::*;
    }

    pub mod datasources {
        pub use crate::data::datasources::clock::*;
        pub use crate::data::datasources::fx_rate_datasource::*;
        pub use crate::data::datasources::identity_datasource::*;
        pub use crate::data::datasources::row_set_datasource::*;
        pub use crate::data::models::fx_payload_model::FxPayloadModel;
        pub use crate::data::models::row_model::RowModel;
    }

    pub mod logic {
        pub use crate::domain::logic::amount_meta::compute_amount_meta;
        pub use crate::domain::logic::currency_converter::CurrencyConverter;
    }
}
