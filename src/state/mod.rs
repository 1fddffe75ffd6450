mod persistence;

pub use persistence::{
    load_catalog, load_catalog_csv, load_catalog_json, load_daily_plan, load_weight_logs,
    save_daily_plan,
};
