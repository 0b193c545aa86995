// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod attendance_csv_datasource;
        pub(crate) mod document_datasource;
        pub(crate) mod recharges_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod attendance_status_model;
        pub(crate) mod club_document_model;
        pub(crate) mod credit_amount_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod accounts_repository_impl;
        pub(crate) mod history_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod attendance;
        pub(crate) mod events;
        pub(crate) mod ledger;
        pub(crate) mod recharge;
        pub(crate) mod session;
    }
    pub(crate) mod logic {
        pub(crate) mod calendar;
        pub(crate) mod cycle;
        pub(crate) mod reconcile;
        pub(crate) mod replay;
    }
    pub(crate) mod repositories {
        pub(crate) mod accounts_repository;
        pub(crate) mod history_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod accounting_usecase;
        pub(crate) mod statement_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod statement_printer;
    pub(crate) mod utils;
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
        pub use crate::domain::entities::attendance::*;
        pub use crate::domain::entities::events::*;
        pub use crate::domain::entities::ledger::*;
        pub use crate::domain::entities::recharge::*;
        pub use crate::domain::entities::session::*;
    }
}
