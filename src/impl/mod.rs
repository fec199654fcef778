// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod income_statement_json_datasource;
        pub(crate) mod view_config_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod accounting_amount_model;
        pub(crate) mod income_statement_model;
        pub(crate) mod iso_date_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod expansion_state;
        pub(crate) mod income_statement;
        pub(crate) mod report_query;
        pub(crate) mod table_row;
        pub(crate) mod value_formatter;
        pub(crate) mod view_config;
    }
    pub(crate) mod logic {
        pub(crate) mod report_table;
        pub(crate) mod row_mapper;
        pub(crate) mod table_projector;
    }
    pub(crate) mod repositories {
        pub(crate) mod report_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod load_report_usecase;
        pub(crate) mod load_view_config_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod amount_fmt;
    pub(crate) mod csv_exporter;
    pub(crate) mod table_printer;
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
        pub use crate::domain::entities::expansion_state::*;
        pub use crate::domain::entities::income_statement::*;
        pub use crate::domain::entities::report_query::*;
        pub use crate::domain::entities::table_row::*;
        pub use crate::domain::entities::value_formatter::*;
        pub use crate::domain::entities::view_config::*;
    }

    pub mod table {
        pub use crate::domain::logic::report_table::*;
        pub use crate::domain::logic::row_mapper::*;
        pub use crate::domain::logic::table_projector::*;
    }

    pub mod formatters {
        pub use crate::presentation::amount_fmt::CurrencyFormatter;
    }
}
